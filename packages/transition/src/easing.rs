//! Easing curve for the scripted scroll.

/// Cubic ease-out: fast start, settling toward the end.
///
/// Input is clamped to `0.0..=1.0`, so the curve is safe to feed raw elapsed
/// ratios.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn decelerates_toward_the_end() {
        assert_eq!(ease_out_cubic(0.5), 0.875);
        let first_quarter = ease_out_cubic(0.25);
        let last_quarter = ease_out_cubic(1.0) - ease_out_cubic(0.75);
        assert!(first_quarter > last_quarter);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }
}
