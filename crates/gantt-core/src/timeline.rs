//! Timeline Coordinate Model
//!
//! Pure conversions between task geometry in scale units and pixels, and
//! between the window anchor and the date of each visible unit. Nothing here
//! keeps state: callers recompute geometry from the project on every render.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::scale::{Scale, ScaleState, Unit};

/// Horizontal placement of a bar, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub left_px: f64,
    pub width_px: f64,
}

/// Width of one unit so that the scale exactly tiles the viewport
pub fn unit_width(scale: Scale, viewport_width_px: f64) -> f64 {
    if viewport_width_px <= 0.0 || !viewport_width_px.is_finite() {
        return 0.0;
    }
    viewport_width_px / f64::from(scale.units_to_show())
}

pub fn pixels_for_task(state: ScaleState, unit_width: f64) -> BarGeometry {
    BarGeometry {
        left_px: state.start_offset * unit_width,
        width_px: state.duration * unit_width,
    }
}

/// Fractional units covered by a pointer movement
pub fn units_from_pixel_delta(delta_px: f64, unit_width: f64) -> f64 {
    if unit_width <= 0.0 {
        return 0.0;
    }
    delta_px / unit_width
}

/// New start offset after moving the bar by `delta_units`, kept inside the
/// viewport: `[0, units - duration]`.
pub fn apply_drag(state: ScaleState, scale: Scale, delta_units: f64) -> f64 {
    let max = f64::from(scale.units_to_show()) - state.duration;
    (state.start_offset + delta_units).min(max).max(0.0)
}

/// New duration after dragging the right edge by `delta_units`, kept inside
/// `[1, units - start_offset]`.
pub fn apply_resize_right(state: ScaleState, scale: Scale, delta_units: f64) -> f64 {
    let max = f64::from(scale.units_to_show()) - state.start_offset;
    (state.duration + delta_units).min(max).max(1.0)
}

/// Date of the `index`-th visible unit.
///
/// Month units use calendar arithmetic; a day past the end of the target month
/// is clamped to its last day.
pub fn date_for_unit_index(anchor: NaiveDate, scale: Scale, index: u32) -> NaiveDate {
    let moved = match scale.unit() {
        Unit::Day => anchor.checked_add_days(Days::new(u64::from(index))),
        Unit::Week => anchor.checked_add_days(Days::new(7 * u64::from(index))),
        Unit::Month => anchor.checked_add_months(Months::new(index)),
    };
    moved.unwrap_or(anchor)
}

/// Inclusive first and last date of the visible window
pub fn visible_range(anchor: NaiveDate, scale: Scale) -> (NaiveDate, NaiveDate) {
    let units = scale.units_to_show();
    let end = match scale.unit() {
        Unit::Day => anchor.checked_add_days(Days::new(u64::from(units) - 1)),
        Unit::Week => anchor.checked_add_days(Days::new(u64::from(units) * 7 - 1)),
        Unit::Month => anchor.checked_add_months(Months::new(units - 1)),
    };
    (anchor, end.unwrap_or(anchor))
}

/// ISO-8601 week number (1..=53).
///
/// Weeks belong to the year holding their Thursday. A week past 52 wraps to 1
/// when the Thursday of Dec 31's week is within a week of the next year's
/// first Thursday.
pub fn iso_week_number(date: NaiveDate) -> u32 {
    let thursday = thursday_of_week(date);
    let week = weeks_since_first_thursday(thursday) + 1;

    if week > 52 {
        let Some(dec31) = NaiveDate::from_ymd_opt(date.year(), 12, 31) else {
            return week;
        };
        let next_thursday = thursday_of_week(dec31);
        if weeks_since_first_thursday(next_thursday) == 0 {
            return 1;
        }
    }
    week
}

/// Thursday of the Monday-based week containing `date`
fn thursday_of_week(date: NaiveDate) -> NaiveDate {
    let from_monday = i64::from(date.weekday().num_days_from_monday());
    date.checked_add_signed(chrono::Duration::days(3 - from_monday))
        .unwrap_or(date)
}

/// Whole weeks between the first Thursday of `thursday`'s year and `thursday`
fn weeks_since_first_thursday(thursday: NaiveDate) -> u32 {
    let first = first_thursday(thursday.year()).unwrap_or(thursday);
    let days = (thursday - first).num_days().max(0);
    (days / 7) as u32
}

fn first_thursday(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, 1, Weekday::Thu, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_unit_width_tiles_viewport() {
        for scale in Scale::ALL {
            for width in [1.0, 320.0, 777.0, 1200.0, 1919.5] {
                let w = unit_width(scale, width);
                let total = w * f64::from(scale.units_to_show());
                assert!((total - width).abs() < 1e-9, "{} {}", scale, width);
            }
        }
        assert_eq!(unit_width(Scale::Days, 0.0), 0.0);
        assert_eq!(unit_width(Scale::Days, -10.0), 0.0);
    }

    #[test]
    fn test_pixels_for_task_weeks_scenario() {
        let w = unit_width(Scale::Weeks, 1200.0);
        assert_eq!(w, 100.0);
        let geometry = pixels_for_task(ScaleState::new(1.0, 2.0), w);
        assert_eq!(geometry.left_px, 100.0);
        assert_eq!(geometry.width_px, 200.0);
    }

    #[test]
    fn test_units_from_pixel_delta_is_fractional() {
        assert_eq!(units_from_pixel_delta(50.0, 100.0), 0.5);
        assert_eq!(units_from_pixel_delta(-250.0, 100.0), -2.5);
        assert_eq!(units_from_pixel_delta(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_apply_drag_stays_in_bounds() {
        let deltas = [-100.0, -3.7, -0.5, 0.0, 0.25, 2.0, 9.9, 100.0];
        for scale in Scale::ALL {
            let units = f64::from(scale.units_to_show());
            let mut duration = 1.0;
            while duration <= units {
                let mut offset = 0.0;
                while offset + duration <= units {
                    for delta in deltas {
                        let state = ScaleState::new(offset, duration);
                        let result = apply_drag(state, scale, delta);
                        assert!(result >= 0.0);
                        assert!(result <= units - duration + 1e-12);
                    }
                    offset += 0.75;
                }
                duration += 0.5;
            }
        }
    }

    #[test]
    fn test_apply_drag_keeps_fraction() {
        let state = ScaleState::new(2.0, 3.0);
        assert_eq!(apply_drag(state, Scale::Days, 1.25), 3.25);
        assert_eq!(apply_drag(state, Scale::Days, -5.0), 0.0);
        assert_eq!(apply_drag(state, Scale::Days, 50.0), 11.0);
    }

    #[test]
    fn test_apply_resize_right_stays_in_bounds() {
        let deltas = [-100.0, -2.2, -0.5, 0.0, 0.3, 4.0, 100.0];
        for scale in Scale::ALL {
            let units = f64::from(scale.units_to_show());
            let mut offset = 0.0;
            while offset <= units - 1.0 {
                for duration in [1.0, 1.5, 2.0] {
                    if offset + duration > units {
                        continue;
                    }
                    for delta in deltas {
                        let state = ScaleState::new(offset, duration);
                        let result = apply_resize_right(state, scale, delta);
                        assert!(result >= 1.0);
                        assert!(result <= units - offset + 1e-12);
                    }
                }
                offset += 0.5;
            }
        }
    }

    #[test]
    fn test_apply_resize_right_examples() {
        let state = ScaleState::new(10.0, 2.0);
        assert_eq!(apply_resize_right(state, Scale::Days, 1.5), 3.5);
        assert_eq!(apply_resize_right(state, Scale::Days, 10.0), 4.0);
        assert_eq!(apply_resize_right(state, Scale::Days, -10.0), 1.0);
    }

    #[test]
    fn test_date_for_unit_index() {
        let anchor = date(2024, 1, 31);
        assert_eq!(date_for_unit_index(anchor, Scale::Days, 1), date(2024, 2, 1));
        assert_eq!(date_for_unit_index(anchor, Scale::Weeks, 2), date(2024, 2, 14));
        assert_eq!(date_for_unit_index(anchor, Scale::Months, 1), date(2024, 2, 29));
        assert_eq!(date_for_unit_index(anchor, Scale::Months, 5), date(2024, 6, 30));
        assert_eq!(date_for_unit_index(anchor, Scale::Days, 0), anchor);
    }

    #[test]
    fn test_visible_range() {
        let anchor = date(2024, 1, 1);
        assert_eq!(visible_range(anchor, Scale::Days).1, date(2024, 1, 14));
        assert_eq!(visible_range(anchor, Scale::Weeks).1, date(2024, 3, 24));
        assert_eq!(visible_range(anchor, Scale::Months).1, date(2024, 6, 1));
    }

    #[test]
    fn test_iso_week_examples() {
        assert_eq!(iso_week_number(date(2024, 1, 1)), 1);
        assert_eq!(iso_week_number(date(2023, 1, 1)), 52);
        assert_eq!(iso_week_number(date(2024, 12, 31)), 1);
        assert_eq!(iso_week_number(date(2020, 12, 31)), 53);
        assert_eq!(iso_week_number(date(2021, 1, 1)), 53);
        assert_eq!(iso_week_number(date(2026, 10, 15)), 42);
    }

    #[test]
    fn test_iso_week_matches_chrono() {
        let mut day = date(2010, 1, 1);
        let end = date(2035, 12, 31);
        while day <= end {
            assert_eq!(iso_week_number(day), day.iso_week().week(), "{}", day);
            day = day.succ_opt().unwrap();
        }
    }
}
