use crate::foundation::core::{Point, Vec2};

/// Golden angle in radians; spreads per-index phase offsets without visible clustering.
const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

/// `sin(t * freq + offset)`, the shared driver of every time-dependent overlay parameter.
///
/// Each visual sub-feature gets its own `(freq, offset)` pair so features never move in lockstep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Phase {
    /// Angular frequency in radians per second.
    pub freq: f64,
    /// Phase offset in radians.
    pub offset: f64,
}

impl Phase {
    pub const fn new(freq: f64, offset: f64) -> Self {
        Self { freq, offset }
    }

    /// `sin(t * freq + offset)`, in `[-1, 1]`.
    pub fn sin(self, t: f64) -> f64 {
        (t * self.freq + self.offset).sin()
    }

    /// `cos(t * freq + offset)`, in `[-1, 1]`.
    pub fn cos(self, t: f64) -> f64 {
        (t * self.freq + self.offset).cos()
    }

    /// The sine remapped into `[0, 1]`.
    pub fn unit(self, t: f64) -> f64 {
        0.5 + 0.5 * self.sin(t)
    }

    /// Derive a per-particle phase from a small integer index.
    ///
    /// Frequency is detuned by up to ~50% in a repeating pattern of seven and the offset advances
    /// by the golden angle, so neighbouring indices decorrelate without a random generator.
    pub fn seeded(self, index: u32) -> Self {
        let detune = 1.0 + f64::from(index % 7) * 0.071;
        Self {
            freq: self.freq * detune,
            offset: self.offset + f64::from(index) * GOLDEN_ANGLE,
        }
    }
}

/// Two incommensurate sines mixed 60/40; organic-looking motion in `[-1, 1]`.
pub fn wobble(t: f64, a: Phase, b: Phase) -> f64 {
    0.6 * a.sin(t) + 0.4 * b.sin(t)
}

/// Position of a point drifting around `center` by at most `amplitude` on each axis.
pub fn drift(center: Point, amplitude: Vec2, t: f64, x: Phase, y: Phase) -> Point {
    Point::new(
        center.x + amplitude.x * wobble(t, x, x.seeded(3)),
        center.y + amplitude.y * wobble(t, y, y.seeded(5)),
    )
}

/// Progress through a repeating cycle of `period` seconds, in `[0, 1)`.
///
/// Non-positive periods collapse to a constant zero.
pub fn cycle(t: f64, period: f64) -> f64 {
    if !(period > 0.0) || !t.is_finite() {
        return 0.0;
    }
    (t / period).rem_euclid(1.0)
}

/// Deterministic pseudo-scatter of an index into `[0, 1)`, built from sines only.
pub fn scatter(index: u32, salt: f64) -> f64 {
    let i = f64::from(index);
    let v = (i * 12.9898 + salt * 78.233).sin() * 0.5 + (i * 4.1414 + salt).cos() * 0.5;
    (v * 0.5 + 0.5).clamp(0.0, 0.999_999)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/phase.rs"]
mod tests;
