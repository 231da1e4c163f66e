use crate::catalog::condition::ConditionKind;
use crate::foundation::core::Intensity;

use xxhash_rust::xxh3::xxh3_64;

type Mat3 = [[f64; 3]; 3];

const IDENTITY: Mat3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Full-severity RGB transforms for the color-vision conditions.
///
/// Rows map to output R, G, B; each row sums to one so white stays white.
fn full_severity(kind: ConditionKind) -> Option<Mat3> {
    let m = match kind {
        ConditionKind::Protanopia => [
            [0.567, 0.433, 0.0],
            [0.558, 0.442, 0.0],
            [0.0, 0.242, 0.758],
        ],
        ConditionKind::Deuteranopia => [[0.625, 0.375, 0.0], [0.7, 0.3, 0.0], [0.0, 0.3, 0.7]],
        ConditionKind::Tritanopia => [
            [0.95, 0.05, 0.0],
            [0.0, 0.433, 0.567],
            [0.0, 0.475, 0.525],
        ],
        ConditionKind::Protanomaly => [
            [0.817, 0.183, 0.0],
            [0.333, 0.667, 0.0],
            [0.0, 0.125, 0.875],
        ],
        ConditionKind::Deuteranomaly => [
            [0.8, 0.2, 0.0],
            [0.258, 0.742, 0.0],
            [0.0, 0.142, 0.858],
        ],
        ConditionKind::Tritanomaly => [
            [0.967, 0.033, 0.0],
            [0.0, 0.733, 0.267],
            [0.0, 0.183, 0.817],
        ],
        ConditionKind::Achromatopsia => [
            [0.299, 0.587, 0.114],
            [0.299, 0.587, 0.114],
            [0.299, 0.587, 0.114],
        ],
        ConditionKind::Achromatomaly => [
            [0.618, 0.32, 0.062],
            [0.163, 0.775, 0.062],
            [0.163, 0.32, 0.517],
        ],
        _ => return None,
    };
    Some(m)
}

/// A color-vision transform blended toward identity by `1 - amount`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ColorMatrix {
    pub condition: ConditionKind,
    /// Blend factor toward the full-severity transform, `[0, 1]`.
    pub amount: f64,
    pub rows: Mat3,
}

impl ColorMatrix {
    /// `identity * (1 - i) + full * i`. `None` for conditions without a color transform.
    pub fn for_condition(kind: ConditionKind, intensity: Intensity) -> Option<Self> {
        let full = full_severity(kind)?;
        let t = intensity.get();
        let mut rows = [[0.0; 3]; 3];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, v) in row.iter_mut().enumerate() {
                *v = IDENTITY[r][c] * (1.0 - t) + full[r][c] * t;
            }
        }
        Some(Self {
            condition: kind,
            amount: t,
            rows,
        })
    }

    pub fn is_identity(&self) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(IDENTITY.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= 1e-9)
    }

    /// Apply to a linear RGB triple.
    pub fn apply(&self, rgb: [f64; 3]) -> [f64; 3] {
        let mut out = [0.0; 3];
        for (o, row) in out.iter_mut().zip(self.rows.iter()) {
            *o = row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2];
        }
        out
    }

    /// Element id referenced from the CSS filter string, e.g. `cvd-protanopia-50-1f0c9a2b`.
    ///
    /// The trailing hash covers the emitted `values`, so two matrices share an id only when
    /// their `<filter>` elements are identical.
    pub fn svg_id(&self) -> String {
        let digest = xxh3_64(self.svg_values().as_bytes());
        format!(
            "cvd-{}-{}-{:08x}",
            self.condition.id(),
            (self.amount * 100.0).round() as u32,
            digest as u32
        )
    }

    /// 4x5 `feColorMatrix` `values` attribute.
    pub fn svg_values(&self) -> String {
        let r = &self.rows;
        format!(
            "{:.3} {:.3} {:.3} 0 0 {:.3} {:.3} {:.3} 0 0 {:.3} {:.3} {:.3} 0 0 0 0 0 1 0",
            r[0][0], r[0][1], r[0][2], r[1][0], r[1][1], r[1][2], r[2][0], r[2][1], r[2][2]
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/color_matrix.rs"]
mod tests;
