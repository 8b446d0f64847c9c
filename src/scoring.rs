//! Scorers computed over the normalized word sequence.
//!
//! Every scorer is stateless between calls: configuration is fixed at
//! construction and each call works on its own transient data.

pub mod keyword;
pub mod readability;
pub mod reading_time;
pub mod sentiment;

/// Clamp `value` into `[min, max]`, mapping NaN to `min`.
pub(crate) fn clamp_score(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(1.5, -1.0, 1.0), 1.0);
        assert_eq!(clamp_score(-3.0, -1.0, 1.0), -1.0);
        assert_eq!(clamp_score(0.25, 0.0, 1.0), 0.25);
        assert_eq!(clamp_score(f32::NAN, 0.0, 1.0), 0.0);
        assert_eq!(clamp_score(f32::INFINITY, 0.0, 1.0), 1.0);
    }
}
