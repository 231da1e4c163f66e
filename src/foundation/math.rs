/// Upper bound for every opacity the engine emits; the base image always stays partly visible.
pub const MAX_OPACITY: f64 = 0.99;

/// Smallest radius/extent (surface-relative) a shape may degenerate to.
pub const MIN_EXTENT: f64 = 0.005;

/// Largest radius/extent (surface-relative); one full surface covers the visible field.
pub const MAX_EXTENT: f64 = 1.0;

/// Clamp an opacity into `[0, MAX_OPACITY]`. NaN maps to zero.
pub fn clamp_opacity(v: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, MAX_OPACITY)
}

/// Clamp a surface-relative radius into `[MIN_EXTENT, MAX_EXTENT]`.
pub fn clamp_extent(v: f64) -> f64 {
    if v.is_nan() {
        return MIN_EXTENT;
    }
    v.clamp(MIN_EXTENT, MAX_EXTENT)
}

/// Clamp a gradient stop offset into `[0, 1]`.
pub fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, 1.0)
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Combine independent Gaussian blur radii into one equivalent radius.
pub fn quadrature_sum(radii: impl IntoIterator<Item = f64>) -> f64 {
    radii
        .into_iter()
        .filter(|r| r.is_finite() && *r > 0.0)
        .map(|r| r * r)
        .sum::<f64>()
        .sqrt()
}

/// Host time sanitised for phase math: non-finite values read as zero.
pub fn finite_time(t: f64) -> f64 {
    if t.is_finite() { t } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
