//! CSS rendition of a [`RenderTree`]; the only place surface pixels enter the math.

use crate::compose::tree::{RenderLayer, RenderTree};
use crate::filter::descriptor::Num;
use crate::foundation::core::Surface;
use crate::overlay::descriptor::{AnimationName, AnimationSpec, ColorStop, Layer};
use std::fmt;

/// Class prefix of emitted layer rules; layer `n` is `.visionsim-layer-<n>`.
pub const LAYER_CLASS: &str = "visionsim-layer";

impl RenderTree {
    /// One style rule per layer with pixel-resolved gradients, followed by the keyframes of every
    /// animation in use.
    pub fn to_css(&self, surface: Surface) -> String {
        CssTree {
            tree: self,
            surface,
        }
        .to_string()
    }
}

struct CssTree<'a> {
    tree: &'a RenderTree,
    surface: Surface,
}

impl fmt::Display for CssTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, layer) in self.tree.layers.iter().enumerate() {
            write_layer(f, n, layer, self.surface)?;
        }
        for name in AnimationName::ALL {
            let used = self
                .tree
                .overlays()
                .any(|o| o.animation.is_some_and(|a| a.name == name));
            if used {
                write_keyframes(f, name)?;
            }
        }
        Ok(())
    }
}

fn write_layer(
    f: &mut fmt::Formatter<'_>,
    n: usize,
    layer: &RenderLayer,
    surface: Surface,
) -> fmt::Result {
    let o = &layer.overlay;
    writeln!(f, ".{LAYER_CLASS}-{n} {{")?;
    writeln!(f, "  /* {} */", o.condition)?;
    writeln!(f, "  position: absolute;")?;
    writeln!(f, "  inset: 0;")?;
    writeln!(f, "  pointer-events: none;")?;
    writeln!(f, "  z-index: {};", layer.z_index)?;
    writeln!(f, "  mix-blend-mode: {};", o.blend.css_keyword())?;
    writeln!(f, "  opacity: {};", Num(o.opacity))?;

    // CSS paints the first background on top; layers are listed back to front.
    let mut gradients = o.layers.iter().rev().filter(|l| !matches!(l, Layer::Ghost { .. }));
    if let Some(first) = gradients.next() {
        f.write_str("  background-image: ")?;
        write_gradient(f, first, surface)?;
        for g in gradients {
            f.write_str(", ")?;
            write_gradient(f, g, surface)?;
        }
        writeln!(f, ";")?;
    }

    let ghosts = o.layers.iter().filter_map(|l| match l {
        Layer::Ghost { offset, opacity } => Some((surface.extent_px(*offset), *opacity)),
        _ => None,
    });
    for (k, (px, opacity)) in ghosts.enumerate() {
        writeln!(
            f,
            "  --visionsim-ghost-{k}: translate({}px, {}px) {};",
            Num(px.x),
            Num(px.y),
            Num(opacity)
        )?;
    }

    if let Some(filter) = &o.filter {
        writeln!(f, "  filter: {filter};")?;
    }
    if let Some(anim) = &o.animation {
        write_animation(f, anim, o.opacity, surface)?;
    }
    writeln!(f, "}}")
}

fn write_stops(f: &mut fmt::Formatter<'_>, stops: &[ColorStop]) -> fmt::Result {
    for s in stops {
        write!(f, ", {} {}%", s.color, Num(s.offset * 100.0))?;
    }
    Ok(())
}

fn write_gradient(f: &mut fmt::Formatter<'_>, layer: &Layer, surface: Surface) -> fmt::Result {
    match layer {
        Layer::Radial {
            center,
            radii,
            stops,
        } => {
            let c = surface.to_px(*center);
            let r = surface.extent_px(*radii);
            write!(
                f,
                "radial-gradient(ellipse {}px {}px at {}px {}px",
                Num(r.x),
                Num(r.y),
                Num(c.x),
                Num(c.y)
            )?;
            write_stops(f, stops)?;
        }
        Layer::Linear { angle_deg, stops } => {
            write!(f, "linear-gradient({}deg", Num(*angle_deg))?;
            write_stops(f, stops)?;
        }
        Layer::Conic {
            center,
            from_deg,
            stops,
        } => {
            let c = surface.to_px(*center);
            write!(
                f,
                "conic-gradient(from {}deg at {}px {}px",
                Num(*from_deg),
                Num(c.x),
                Num(c.y)
            )?;
            write_stops(f, stops)?;
        }
        Layer::Ghost { .. } => return Ok(()),
    }
    f.write_str(")")
}

fn write_animation(
    f: &mut fmt::Formatter<'_>,
    anim: &AnimationSpec,
    opacity: f64,
    surface: Surface,
) -> fmt::Result {
    let (amplitude, unit) = match anim.name {
        AnimationName::OscillateX | AnimationName::Sway => {
            (anim.amplitude * f64::from(surface.width), "px")
        }
        AnimationName::Rotate => (anim.amplitude, "deg"),
        AnimationName::Pulse | AnimationName::Warp => (anim.amplitude, ""),
    };
    let easing = if anim.name == AnimationName::Rotate {
        "linear"
    } else {
        "ease-in-out"
    };
    writeln!(f, "  --visionsim-amplitude: {}{unit};", Num(amplitude))?;
    writeln!(f, "  --visionsim-opacity: {};", Num(opacity))?;
    writeln!(
        f,
        "  animation: {} {}s {easing} infinite;",
        anim.name.keyframes_name(),
        Num(anim.period_secs)
    )
}

fn write_keyframes(f: &mut fmt::Formatter<'_>, name: AnimationName) -> fmt::Result {
    let body = match name {
        AnimationName::OscillateX => {
            "0%, 100% { transform: translateX(calc(-1 * var(--visionsim-amplitude))); } \
             50% { transform: translateX(var(--visionsim-amplitude)); }"
        }
        AnimationName::Sway => {
            "0%, 100% { transform: translate(0, 0); } \
             25% { transform: translate(var(--visionsim-amplitude), calc(0.6 * var(--visionsim-amplitude))); } \
             75% { transform: translate(calc(-1 * var(--visionsim-amplitude)), calc(-0.6 * var(--visionsim-amplitude))); }"
        }
        AnimationName::Rotate => {
            "from { transform: rotate(0deg); } to { transform: rotate(var(--visionsim-amplitude)); }"
        }
        AnimationName::Pulse => {
            "0%, 100% { opacity: var(--visionsim-opacity); } \
             50% { opacity: calc(var(--visionsim-opacity) * (1 - var(--visionsim-amplitude))); }"
        }
        AnimationName::Warp => {
            "0%, 100% { transform: scale(1); } \
             50% { transform: scale(calc(1 + var(--visionsim-amplitude))); }"
        }
    };
    writeln!(f, "@keyframes {} {{ {body} }}", name.keyframes_name())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/css.rs"]
mod tests;
