//! Reusable shape families. Every builder returns one [`Layer`] in surface-relative units.

use crate::foundation::core::{Point, Rgba, Vec2};
use crate::overlay::descriptor::{ColorStop, Layer, Stops};
use smallvec::smallvec;

pub(crate) const CENTER: Point = Point::new(0.5, 0.5);

/// Hard-edged cut across the surface.
///
/// Opaque from the start of the gradient line up to `edge`, transparent after; `feather` softens
/// the boundary on both sides. `angle_deg` picks the side: 90 darkens the left, 270 the right,
/// 180 the top, 0 the bottom.
pub(crate) fn field_cut(angle_deg: f64, edge: f64, feather: f64, color: Rgba, alpha: f64) -> Layer {
    Layer::Linear {
        angle_deg,
        stops: smallvec![
            ColorStop::new(color, alpha, 0.0),
            ColorStop::new(color, alpha, (edge - feather).max(0.0)),
            ColorStop::new(color, 0.0, (edge + feather).min(1.0)),
            ColorStop::new(color, 0.0, 1.0),
        ],
    }
}

/// Dark wedge covering a quarter turn starting at `from_deg`.
pub(crate) fn quadrant(from_deg: f64, feather: f64, color: Rgba, alpha: f64) -> Layer {
    Layer::Conic {
        center: CENTER,
        from_deg,
        stops: smallvec![
            ColorStop::new(color, alpha, 0.0),
            ColorStop::new(color, alpha, 0.25 - feather),
            ColorStop::new(color, 0.0, 0.25 + feather),
            ColorStop::new(color, 0.0, 1.0 - feather),
            ColorStop::new(color, alpha, 1.0),
        ],
    }
}

/// Solid core fading out to the rim. `softness` is the fraction of the radius spent fading.
pub(crate) fn blob(center: Point, radii: Vec2, color: Rgba, alpha: f64, softness: f64) -> Layer {
    let softness = softness.clamp(0.0, 1.0);
    Layer::Radial {
        center,
        radii,
        stops: smallvec![
            ColorStop::new(color, alpha, 0.0),
            ColorStop::new(color, alpha, 1.0 - softness),
            ColorStop::new(color, 0.0, 1.0),
        ],
    }
}

/// Circular [`blob`].
pub(crate) fn disc(center: Point, radius: f64, color: Rgba, alpha: f64, softness: f64) -> Layer {
    blob(center, Vec2::new(radius, radius), color, alpha, softness)
}

/// Clear center with darkness closing in from the periphery.
///
/// `clear` is the transparent fraction of the frame-sized ellipse; the corners of the surface sit
/// at about 0.71 of it.
pub(crate) fn tunnel(clear: f64, feather: f64, color: Rgba, alpha: f64) -> Layer {
    let clear = clear.clamp(0.0, 1.0);
    Layer::Radial {
        center: CENTER,
        radii: Vec2::new(1.0, 1.0),
        stops: smallvec![
            ColorStop::new(color, 0.0, 0.0),
            ColorStop::new(color, 0.0, clear),
            ColorStop::new(color, alpha, (clear + feather).min(1.0)),
            ColorStop::new(color, alpha, 1.0),
        ],
    }
}

/// Thin luminous ring of `radius` and half-width `width`.
pub(crate) fn ring(center: Point, radius: f64, width: f64, color: Rgba, alpha: f64) -> Layer {
    let outer = (radius + width).max(f64::EPSILON);
    Layer::Radial {
        center,
        radii: Vec2::new(outer, outer),
        stops: smallvec![
            ColorStop::new(color, 0.0, ((radius - width) / outer).max(0.0)),
            ColorStop::new(color, alpha, radius / outer),
            ColorStop::new(color, 0.0, 1.0),
        ],
    }
}

/// Evenly spaced rays swept around `center`. `duty` is the lit fraction of each ray period.
pub(crate) fn rays(
    center: Point,
    count: u32,
    rotation_deg: f64,
    duty: f64,
    color: Rgba,
    alpha: f64,
) -> Layer {
    let count = count.max(1);
    let period = 1.0 / f64::from(count);
    let half = 0.5 * period * duty.clamp(0.0, 1.0);
    let mut stops = Stops::new();
    for k in 0..count {
        let mid = (f64::from(k) + 0.5) * period;
        stops.push(ColorStop::new(color, 0.0, mid - half));
        stops.push(ColorStop::new(color, alpha, mid));
        stops.push(ColorStop::new(color, 0.0, mid + half));
    }
    Layer::Conic {
        center,
        from_deg: rotation_deg.rem_euclid(360.0),
        stops,
    }
}

/// Diffuse wash: `center_alpha` in the middle easing to `edge_alpha` at the rim.
pub(crate) fn haze(center: Point, radii: Vec2, color: Rgba, center_alpha: f64, edge_alpha: f64) -> Layer {
    Layer::Radial {
        center,
        radii,
        stops: smallvec![
            ColorStop::new(color, center_alpha, 0.0),
            ColorStop::new(color, 0.5 * (center_alpha + edge_alpha), 0.6),
            ColorStop::new(color, edge_alpha, 1.0),
        ],
    }
}

/// Linear wash going from `from_alpha` to `to_alpha` along `angle_deg`.
pub(crate) fn wash(angle_deg: f64, color: Rgba, from_alpha: f64, to_alpha: f64) -> Layer {
    Layer::Linear {
        angle_deg,
        stops: smallvec![
            ColorStop::new(color, from_alpha, 0.0),
            ColorStop::new(color, to_alpha, 1.0),
        ],
    }
}

/// Shifted copy of the base image.
pub(crate) fn ghost(offset: Vec2, opacity: f64) -> Layer {
    Layer::Ghost { offset, opacity }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/shapes.rs"]
mod tests;
