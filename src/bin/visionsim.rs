use std::{
    fs::File,
    io::{BufReader, Read as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use visionsim::{ConditionCategory, RenderFrame, SessionOpts, SimulationSession, VisualEffect};

#[derive(Parser, Debug)]
#[command(name = "visionsim", version)]
struct Cli {
    /// Log pipeline diagnostics to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog conditions and their rendering metadata.
    Catalog(CatalogArgs),
    /// Compute one frame's filter and overlay stack.
    Frame(FrameArgs),
    /// Step the animation clock and print one frame fingerprint per tick.
    Animate(AnimateArgs),
}

#[derive(Parser, Debug)]
struct CatalogArgs {
    /// Only list one category.
    #[arg(long, value_enum)]
    category: Option<CategoryChoice>,

    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CategoryChoice {
    ColorVision,
    Refractive,
    OpticalMedia,
    VisualField,
    Retinal,
    Neurological,
}

impl From<CategoryChoice> for ConditionCategory {
    fn from(c: CategoryChoice) -> Self {
        match c {
            CategoryChoice::ColorVision => Self::ColorVision,
            CategoryChoice::Refractive => Self::Refractive,
            CategoryChoice::OpticalMedia => Self::OpticalMedia,
            CategoryChoice::VisualField => Self::VisualField,
            CategoryChoice::Retinal => Self::Retinal,
            CategoryChoice::Neurological => Self::Neurological,
        }
    }
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Effects JSON document (array of effects); `-` reads stdin.
    #[arg(long = "effects")]
    effects_path: Option<PathBuf>,

    /// Inline enabled effect as `id=intensity`; repeatable.
    #[arg(long = "effect", value_parser = parse_inline_effect)]
    inline: Vec<VisualEffect>,

    /// Session options JSON.
    #[arg(long = "opts")]
    opts_path: Option<PathBuf>,

    /// Reference image; its dimensions override the configured surface size.
    #[arg(long)]
    reference: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Sample time in seconds.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Output format.
    #[arg(long, value_enum, default_value_t = FrameFormat::Json)]
    format: FrameFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FrameFormat {
    Json,
    Css,
    Svg,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Host frame rate.
    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// Seconds to animate.
    #[arg(long, default_value_t = 1.0)]
    duration: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Catalog(args) => cmd_catalog(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Animate(args) => cmd_animate(args),
    }
}

fn parse_inline_effect(s: &str) -> Result<VisualEffect, String> {
    let (id, intensity) = s
        .split_once('=')
        .ok_or_else(|| format!("expected id=intensity, got '{s}'"))?;
    let intensity: f64 = intensity
        .trim()
        .parse()
        .map_err(|e| format!("bad intensity in '{s}': {e}"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing condition id in '{s}'"));
    }
    Ok(VisualEffect::new(id, intensity))
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    let mut s = String::new();
    if path == Path::new("-") {
        std::io::stdin()
            .read_to_string(&mut s)
            .context("read effects from stdin")?;
    } else {
        let f = File::open(path).with_context(|| format!("open '{}'", path.display()))?;
        BufReader::new(f)
            .read_to_string(&mut s)
            .with_context(|| format!("read '{}'", path.display()))?;
    }
    Ok(s)
}

fn load_effects(input: &InputArgs) -> anyhow::Result<Vec<VisualEffect>> {
    let mut effects = match &input.effects_path {
        Some(path) => {
            let text = read_text(path)?;
            visionsim::parse_effects_json(&text)
                .with_context(|| format!("parse effects '{}'", path.display()))?
        }
        None => Vec::new(),
    };
    effects.extend(input.inline.iter().cloned());
    Ok(effects)
}

fn load_session(input: &InputArgs) -> anyhow::Result<SimulationSession> {
    let mut opts = match &input.opts_path {
        Some(path) => SessionOpts::from_json(&read_text(path)?)
            .with_context(|| format!("parse options '{}'", path.display()))?,
        None => SessionOpts::default(),
    };
    if let Some(reference) = &input.reference {
        let (width, height) = image::image_dimensions(reference)
            .with_context(|| format!("read reference image '{}'", reference.display()))?;
        opts.surface = visionsim::Surface::new(width, height)?;
    }
    Ok(SimulationSession::new(opts)?)
}

fn cmd_catalog(args: CatalogArgs) -> anyhow::Result<()> {
    let entries: Vec<&visionsim::ConditionMeta> = match args.category {
        Some(c) => visionsim::by_category(c.into()).collect(),
        None => visionsim::entries().iter().collect(),
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    for m in entries {
        println!(
            "{:<24} {:<14} {:<8} {:<8} {:<9} {:?}",
            m.id,
            m.category.label(),
            format!("{:?}", m.render).to_lowercase(),
            format!("{:?}", m.motion).to_lowercase(),
            m.blend.css_keyword(),
            m.priority,
        );
    }
    Ok(())
}

#[derive(serde::Serialize)]
struct FrameReport<'a> {
    fingerprint: String,
    filter_css: String,
    frame: &'a RenderFrame,
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let effects = load_effects(&args.input)?;
    let mut session = load_session(&args.input)?;
    let frame = session.render_frame(&effects, args.time);

    match args.format {
        FrameFormat::Json => {
            let report = FrameReport {
                fingerprint: frame.fingerprint().to_string(),
                filter_css: frame.filter.to_string(),
                frame: &frame,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        FrameFormat::Css => print!("{}", frame.to_css(session.surface())),
        FrameFormat::Svg => println!("{}", frame.svg_defs()),
    }
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.fps.is_finite() && args.fps > 0.0,
        "--fps must be a positive number"
    );
    anyhow::ensure!(
        args.duration.is_finite() && args.duration >= 0.0,
        "--duration must be a non-negative number"
    );

    let effects = load_effects(&args.input)?;
    let mut session = load_session(&args.input)?;

    let first = session.render_frame(&effects, 0.0);
    println!("0 {:.3} {}", first.time, first.fingerprint());

    let frames = (args.duration * args.fps).floor() as u64;
    for k in 1..=frames {
        if !session.is_animating() {
            break;
        }
        let host_ms = k as f64 * 1000.0 / args.fps;
        let Some(tick) = session.tick(host_ms) else {
            break;
        };
        let frame = session.render_frame(&effects, tick.time);
        println!("{k} {:.3} {}", frame.time, frame.fingerprint());
    }

    let stats = session.stats();
    eprintln!(
        "frames={} static_hits={} static_misses={} dynamic_samples={} dynamic_reuses={}",
        stats.frames,
        stats.static_hits,
        stats.static_misses,
        stats.dynamic_samples,
        stats.dynamic_reuses
    );
    Ok(())
}
