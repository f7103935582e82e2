//! About-section counter math.

use crate::constants::{EXPERIENCE_START_MS, MS_PER_YEAR};

/// Years since the career start date, rounded to the nearest half year.
pub fn experience_years(now_ms: f64) -> f64 {
    let years = (now_ms - EXPERIENCE_START_MS) / MS_PER_YEAR;
    (years * 2.0).round() / 2.0
}

/// Interpolated counter value at `progress` in `[0, 1]`.
pub fn counter_value(start: f64, end: f64, progress: f64) -> f64 {
    start + progress.clamp(0.0, 1.0) * (end - start)
}

/// Display text for a counter: one decimal place for fractional stats,
/// floored integer otherwise.
pub fn counter_text(value: f64, decimal: bool) -> String {
    if decimal {
        format!("{value:.1}")
    } else {
        format!("{}", value.floor() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EXPERIENCE_START_MS, MS_PER_YEAR};

    #[test]
    fn experience_rounds_to_half_years() {
        let now = EXPERIENCE_START_MS + 2.3 * MS_PER_YEAR;
        assert_eq!(experience_years(now), 2.5);
        let now = EXPERIENCE_START_MS + 1.1 * MS_PER_YEAR;
        assert_eq!(experience_years(now), 1.0);
    }

    #[test]
    fn counter_value_clamps_progress() {
        assert_eq!(counter_value(0.0, 10.0, 0.5), 5.0);
        assert_eq!(counter_value(0.0, 10.0, 1.5), 10.0);
        assert_eq!(counter_value(0.0, 10.0, -0.5), 0.0);
    }

    #[test]
    fn counter_text_formats_by_kind() {
        assert_eq!(counter_text(1.5, true), "1.5");
        assert_eq!(counter_text(7.9, false), "7");
    }
}
