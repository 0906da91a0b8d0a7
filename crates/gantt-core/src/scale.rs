//! Time scales
//!
//! The three zoom levels of the chart and the per-scale geometry a task keeps.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Atomic time column of a scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Day,
    Week,
    Month,
}

/// A named zoom level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    #[default]
    Days,
    Weeks,
    Months,
}

impl Scale {
    pub const ALL: [Scale; 3] = [Scale::Days, Scale::Weeks, Scale::Months];

    pub fn unit(self) -> Unit {
        match self {
            Scale::Days => Unit::Day,
            Scale::Weeks => Unit::Week,
            Scale::Months => Unit::Month,
        }
    }

    /// Number of units that fit the viewport
    pub fn units_to_show(self) -> u32 {
        match self {
            Scale::Days => 14,
            Scale::Weeks => 12,
            Scale::Months => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scale::Days => "days",
            Scale::Weeks => "weeks",
            Scale::Months => "months",
        }
    }

    /// Button label
    pub fn label(self) -> &'static str {
        match self {
            Scale::Days => "Días",
            Scale::Weeks => "Semanas",
            Scale::Months => "Meses",
        }
    }

    /// Move an anchor date one full viewport forward (`direction > 0`) or back.
    ///
    /// Days step 14 days, weeks 84 days, months 6 calendar months. Month steps
    /// clamp the day to the target month's length. Returns the input unchanged
    /// if the result would leave chrono's supported range.
    pub fn step(self, date: NaiveDate, direction: i32) -> NaiveDate {
        let forward = direction >= 0;
        let moved = match self {
            Scale::Days | Scale::Weeks => {
                let days = Days::new(u64::from(self.units_to_show()) * self.days_per_unit());
                if forward {
                    date.checked_add_days(days)
                } else {
                    date.checked_sub_days(days)
                }
            }
            Scale::Months => {
                let months = Months::new(self.units_to_show());
                if forward {
                    date.checked_add_months(months)
                } else {
                    date.checked_sub_months(months)
                }
            }
        };
        moved.unwrap_or(date)
    }

    fn days_per_unit(self) -> u64 {
        match self {
            Scale::Weeks => 7,
            _ => 1,
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "days" => Ok(Scale::Days),
            "weeks" => Ok(Scale::Weeks),
            "months" => Ok(Scale::Months),
            other => Err(format!("unknown scale: {}", other)),
        }
    }
}

/// Position and length of a bar, in units of one scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleState {
    pub start_offset: f64,
    pub duration: f64,
}

impl ScaleState {
    pub const fn new(start_offset: f64, duration: f64) -> Self {
        Self {
            start_offset,
            duration,
        }
    }
}

/// One `ScaleState` per scale, adjusted independently
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleStates {
    pub days: ScaleState,
    pub weeks: ScaleState,
    pub months: ScaleState,
}

impl ScaleStates {
    pub fn get(&self, scale: Scale) -> ScaleState {
        match scale {
            Scale::Days => self.days,
            Scale::Weeks => self.weeks,
            Scale::Months => self.months,
        }
    }

    pub fn get_mut(&mut self, scale: Scale) -> &mut ScaleState {
        match scale {
            Scale::Days => &mut self.days,
            Scale::Weeks => &mut self.weeks,
            Scale::Months => &mut self.months,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_known_scales() {
        for scale in Scale::ALL {
            assert_eq!(scale.as_str().parse::<Scale>(), Ok(scale));
        }
        assert!("years".parse::<Scale>().is_err());
        assert!("Days".parse::<Scale>().is_err());
    }

    #[test]
    fn test_step_days_and_weeks() {
        let start = date(2024, 1, 1);
        assert_eq!(Scale::Days.step(start, 1), date(2024, 1, 15));
        assert_eq!(Scale::Days.step(start, -1), date(2023, 12, 18));
        assert_eq!(Scale::Weeks.step(start, 1), date(2024, 3, 25));
        assert_eq!(Scale::Weeks.step(start, -1), date(2023, 10, 9));
    }

    #[test]
    fn test_step_months_is_calendar_based() {
        assert_eq!(Scale::Months.step(date(2024, 1, 15), 1), date(2024, 7, 15));
        assert_eq!(Scale::Months.step(date(2024, 1, 15), -1), date(2023, 7, 15));
        // Aug 31 -> Feb has no 31st
        assert_eq!(Scale::Months.step(date(2023, 8, 31), 1), date(2024, 2, 29));
    }

    #[test]
    fn test_scale_states_are_independent() {
        let mut states = ScaleStates {
            days: ScaleState::new(0.0, 3.0),
            weeks: ScaleState::new(0.0, 1.0),
            months: ScaleState::new(0.0, 1.0),
        };
        states.get_mut(Scale::Weeks).start_offset = 4.5;
        assert_eq!(states.get(Scale::Weeks).start_offset, 4.5);
        assert_eq!(states.get(Scale::Days).start_offset, 0.0);
        assert_eq!(states.get(Scale::Months).start_offset, 0.0);
    }

    #[test]
    fn test_scale_state_json_shape() {
        let json = serde_json::to_string(&ScaleState::new(1.5, 2.0)).unwrap();
        assert_eq!(json, r#"{"startOffset":1.5,"duration":2.0}"#);
        let scale = serde_json::to_string(&Scale::Weeks).unwrap();
        assert_eq!(scale, r#""weeks""#);
    }
}
