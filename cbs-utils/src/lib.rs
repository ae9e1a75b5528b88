//! Shared formatting and math utilities for the CBS map crates.
//!
//! ```rust
//! use cbs_utils::format::{format_number, format_percentage};
//!
//! assert_eq!(format_number(872680), "872\u{a0}680");
//! assert_eq!(format_percentage(0.12345), "12.35%");
//! ```

/// Numeric helpers: ratios, rounding, interpolation
pub mod math {
    use cbs_regions::{DataField, Region};

    /// Share of `region.total` held by `field`.
    ///
    /// Returns 0.0 when the region has no population at all.
    pub fn calc_percentage(region: &Region, field: DataField) -> f64 {
        let value = region.value(field);
        let total = region.total;
        if total != 0 {
            value as f64 / total as f64
        } else {
            0.0
        }
    }

    /// Round half up, i.e. ties go towards positive infinity (-2.5 -> -2).
    pub fn round_half_up(x: f64) -> f64 {
        let floor = x.floor();
        if x - floor >= 0.5 {
            floor + 1.0
        } else {
            floor
        }
    }

    /// Round `number` to `precision` decimal digits.
    ///
    /// The scaled value is nudged by one machine epsilon (relative) before
    /// rounding, so that 1.005 at two digits becomes 1.01 even though it is
    /// stored as 1.00499999999999989...
    pub fn to_precision(number: f64, precision: i32) -> f64 {
        let factor = 10f64.powi(precision);
        round_half_up(number * factor * (1.0 + f64::EPSILON)) / factor
    }

    pub fn lerp(min: f64, max: f64, ratio: f64) -> f64 {
        min + (max - min) * ratio
    }

    /// Inverse of [`lerp`]. `min == max` yields a non-finite result.
    pub fn unlerp(min: f64, max: f64, value: f64) -> f64 {
        (value - min) / (max - min)
    }

    /// Restrict `value` to `[min, max]`.
    ///
    /// Applies `max` first, then `min`, so with inverted bounds `min` wins.
    /// Unlike `f64::clamp` this never panics.
    pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
        let value = value.min(max);
        value.max(min)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn region(total: u64, non_western: u64) -> Region {
            Region {
                id: "GM0014".to_string(),
                name: "Groningen".to_string(),
                total,
                western_total: total / 10,
                non_western_total: non_western,
                morocco: non_western / 5,
                antilles_and_aruba: non_western / 5,
                surinam: non_western / 5,
                turkey: non_western / 5,
                other_non_western: non_western / 5,
            }
        }

        #[test]
        fn test_calc_percentage() {
            let r = region(200, 50);
            assert_eq!(calc_percentage(&r, DataField::NonWesternTotal), 0.25);
            assert_eq!(calc_percentage(&r, DataField::Total), 1.0);
            assert_eq!(calc_percentage(&r, DataField::Morocco), 0.05);
        }

        #[test]
        fn test_calc_percentage_zero_total() {
            let r = Region {
                total: 0,
                ..region(0, 0)
            };
            for field in DataField::ALL {
                assert_eq!(calc_percentage(&r, field), 0.0);
            }
            // sub-counts are not validated, a zero total still wins
            let inconsistent = Region {
                turkey: 12,
                ..region(0, 0)
            };
            assert_eq!(calc_percentage(&inconsistent, DataField::Turkey), 0.0);
        }

        #[test]
        fn test_calc_percentage_within_unit_interval() {
            for total in [1, 7, 100, 12_345, 872_680] {
                for non_western in [0, total / 3, total] {
                    let r = region(total, non_western);
                    for field in DataField::ALL {
                        let ratio = calc_percentage(&r, field);
                        assert!((0.0..=1.0).contains(&ratio), "{field} -> {ratio}");
                    }
                }
            }
        }

        #[test]
        fn test_to_precision() {
            assert_eq!(to_precision(2.5, 0), 3.0);
            assert_eq!(to_precision(1.005, 2), 1.01);
            assert_eq!(to_precision(1.234, 1), 1.2);
            assert_eq!(to_precision(12.345, 2), 12.35);
        }

        #[test]
        fn test_round_half_up() {
            assert_eq!(round_half_up(0.5), 1.0);
            assert_eq!(round_half_up(0.49999999999999994), 0.0);
            assert_eq!(round_half_up(-2.5), -2.0);
            assert_eq!(round_half_up(-2.6), -3.0);
        }

        #[test]
        fn test_lerp_unlerp() {
            assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
            assert_eq!(unlerp(0.0, 10.0, 5.0), 0.5);
            assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
            assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);

            for (min, max) in [(0.0, 1.0), (-3.0, 7.5), (10.0, -10.0), (0.0, 0.5)] {
                for ratio in [-0.5, 0.0, 0.1, 0.25, 0.5, 0.9, 1.0, 2.0] {
                    let back = unlerp(min, max, lerp(min, max, ratio));
                    assert!((back - ratio).abs() < 1e-12, "{min}..{max} @ {ratio}");
                }
            }
        }

        #[test]
        fn test_clamp() {
            assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
            assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
            assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
            // inverted bounds: min wins
            assert_eq!(clamp(5.0, 10.0, 0.0), 10.0);
        }
    }
}

/// Display string formatting for counts and ratios
pub mod format {
    use crate::math::{round_half_up, to_precision};
    use std::fmt::Display;

    /// Separator inserted between groups of three digits (no-break space).
    pub const THOUSANDS_SEPARATOR: char = '\u{a0}';

    /// Group the integer digits of `x` in threes, counted from the right.
    ///
    /// A leading sign and anything after the decimal point are left as is.
    pub fn format_number(x: impl Display) -> String {
        let raw = x.to_string();
        let (sign, unsigned) = match raw.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", raw.as_str()),
        };
        let (int_part, fraction) = match unsigned.find('.') {
            Some(dot) => unsigned.split_at(dot),
            None => (unsigned, ""),
        };

        let mut out = String::with_capacity(raw.len() + int_part.len() / 3 * 2);
        out.push_str(sign);
        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                out.push(THOUSANDS_SEPARATOR);
            }
            out.push(digit);
        }
        out.push_str(fraction);
        out
    }

    /// `ratio` as a percentage with at most two decimals, e.g. "12.35%".
    pub fn format_percentage(ratio: f64) -> String {
        // + 0.0 turns -0 into 0
        format!("{}%", to_precision(ratio * 100.0, 2) + 0.0)
    }

    /// `ratio` as a percentage with exactly two decimals, e.g. "10.00%".
    ///
    /// Exact ties round away from zero ("0.125" -> "0.13"), not to even.
    pub fn format_percentage_fixed(ratio: f64) -> String {
        let percent = ratio * 100.0 + 0.0;
        let hundredths = percent * 100.0;
        // only a tie if the scaling was exact, 12.345 is stored slightly above
        if hundredths.fract().abs() == 0.5 && percent.mul_add(100.0, -hundredths) == 0.0 {
            let away = hundredths.signum() * (hundredths.abs().floor() + 1.0);
            return format!("{:.2}%", away / 100.0);
        }
        format!("{:.2}%", percent)
    }

    /// Whole-percent axis/legend label with a suffix, e.g. "50%pp".
    pub fn format_tick_label(ratio: f64, addition: &str) -> String {
        format!("{}%{}", round_half_up(ratio * 100.0) + 0.0, addition)
    }

}
