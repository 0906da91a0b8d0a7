//! Header labels and range text (es-ES)

use chrono::{Datelike, NaiveDate, Weekday};

use crate::scale::{Scale, Unit};
use crate::timeline::{date_for_unit_index, iso_week_number, visible_range};

const MONTHS_SHORT: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

const MONTHS_LONG: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// One column of the time-scale header
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderUnit {
    pub label: String,
    /// Start of a week (Monday) under the day scale
    pub marker: bool,
    pub weekend: bool,
}

pub fn month_short(date: NaiveDate) -> &'static str {
    MONTHS_SHORT[date.month0() as usize]
}

pub fn month_long(date: NaiveDate) -> &'static str {
    MONTHS_LONG[date.month0() as usize]
}

/// Labels for every visible unit of `scale` starting at `anchor`
pub fn header_units(anchor: NaiveDate, scale: Scale) -> Vec<HeaderUnit> {
    (0..scale.units_to_show())
        .map(|i| {
            let date = date_for_unit_index(anchor, scale, i);
            match scale.unit() {
                Unit::Day => {
                    let weekday = date.weekday();
                    HeaderUnit {
                        label: date.day().to_string(),
                        marker: weekday == Weekday::Mon,
                        weekend: matches!(weekday, Weekday::Sat | Weekday::Sun),
                    }
                }
                Unit::Week => HeaderUnit {
                    label: format!("S{}", iso_week_number(date)),
                    marker: false,
                    weekend: false,
                },
                Unit::Month => HeaderUnit {
                    label: month_short(date).to_string(),
                    marker: false,
                    weekend: false,
                },
            }
        })
        .collect()
}

/// Compact range shown next to the navigation buttons
pub fn range_text(anchor: NaiveDate, scale: Scale) -> String {
    let (start, end) = visible_range(anchor, scale);
    match scale.unit() {
        Unit::Day => format!("{} - {}", day_month(start), day_month(end)),
        Unit::Week => format!("S{} - S{}", iso_week_number(start), iso_week_number(end)),
        Unit::Month => {
            if start.year() == end.year() {
                format!("{} - {} {}", month_short(start), month_short(end), start.year())
            } else {
                format!(
                    "{} {} - {} {}",
                    month_short(start),
                    start.year(),
                    month_short(end),
                    end.year()
                )
            }
        }
    }
}

/// Title above the time-scale header
pub fn timeline_title(anchor: NaiveDate, scale: Scale) -> String {
    let (start, end) = visible_range(anchor, scale);
    match scale.unit() {
        Unit::Day => month_year(start),
        Unit::Week => {
            if start.month() == end.month() && start.year() == end.year() {
                month_year(start)
            } else {
                format!("{} - {}", month_long(start), month_year(end))
            }
        }
        Unit::Month => format!("{} - {}", start.year(), end.year()),
    }
}

/// `"12/30"` style counter for length-limited inputs
pub fn char_counter(text: &str, max: usize) -> String {
    format!("{}/{}", text.chars().count(), max)
}

/// Cut `text` to at most `max` characters
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Download name of an exported chart
pub fn export_file_name(project_name: &str, date: NaiveDate) -> String {
    format!("GanttRoll-{}-{}.png", project_name, date.format("%Y-%m-%d"))
}

fn day_month(date: NaiveDate) -> String {
    format!("{} {}", date.day(), month_short(date))
}

fn month_year(date: NaiveDate) -> String {
    format!("{} de {}", month_long(date), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_header() {
        let units = header_units(date(2024, 1, 1), Scale::Days);
        assert_eq!(units.len(), 14);
        assert_eq!(units[0].label, "1");
        assert!(units[0].marker);
        assert!(units[5].weekend && units[6].weekend);
        assert!(!units[4].weekend);
        assert!(units[7].marker);
        assert_eq!(units[13].label, "14");
    }

    #[test]
    fn test_week_header() {
        let units = header_units(date(2024, 1, 1), Scale::Weeks);
        assert_eq!(units.len(), 12);
        assert_eq!(units[0].label, "S1");
        assert_eq!(units[11].label, "S12");
    }

    #[test]
    fn test_month_header() {
        let units = header_units(date(2024, 8, 15), Scale::Months);
        let labels: Vec<_> = units.iter().map(|u| u.label.as_str()).collect();
        assert_eq!(labels, vec!["ago", "sept", "oct", "nov", "dic", "ene"]);
    }

    #[test]
    fn test_range_text() {
        assert_eq!(range_text(date(2024, 1, 1), Scale::Days), "1 ene - 14 ene");
        assert_eq!(range_text(date(2024, 1, 1), Scale::Weeks), "S1 - S12");
        assert_eq!(range_text(date(2024, 1, 1), Scale::Months), "ene - jun 2024");
        assert_eq!(
            range_text(date(2024, 9, 1), Scale::Months),
            "sept 2024 - feb 2025"
        );
    }

    #[test]
    fn test_timeline_title() {
        assert_eq!(timeline_title(date(2024, 1, 1), Scale::Days), "enero de 2024");
        assert_eq!(
            timeline_title(date(2024, 1, 1), Scale::Weeks),
            "enero - marzo de 2024"
        );
        assert_eq!(timeline_title(date(2024, 9, 1), Scale::Months), "2024 - 2025");
    }

    #[test]
    fn test_counters_and_truncation() {
        assert_eq!(char_counter("Diseño", 30), "6/30");
        assert_eq!(truncate_chars("ñññññ", 3), "ñññ");
        assert_eq!(truncate_chars("ab", 30), "ab");
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name("Mi Proyecto", date(2024, 5, 9)),
            "GanttRoll-Mi Proyecto-2024-05-09.png"
        );
    }
}
