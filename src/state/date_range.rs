// Date-range filter state.
// Predefined ranges resolve against a caller-supplied "today" so resolution
// is a pure function; bounds are inclusive on both ends.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Preset ranges offered by the date filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredefinedRange {
    Yesterday,
    Last7Days,
    Last15Days,
    Last30Days,
    Last3Months,
}

impl PredefinedRange {
    pub const ALL: [PredefinedRange; 5] = [
        PredefinedRange::Yesterday,
        PredefinedRange::Last7Days,
        PredefinedRange::Last15Days,
        PredefinedRange::Last30Days,
        PredefinedRange::Last3Months,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PredefinedRange::Yesterday => "Yesterday",
            PredefinedRange::Last7Days => "Last 7 days",
            PredefinedRange::Last15Days => "Last 15 days",
            PredefinedRange::Last30Days => "Last 30 days",
            PredefinedRange::Last3Months => "Last 3 months",
        }
    }

    /// Resolve to concrete dates. "Last N days" ends today and spans N
    /// calendar days; `Yesterday` is the single preceding day; three months
    /// use calendar-month arithmetic.
    pub fn resolve(&self, today: NaiveDate) -> DateRange {
        match self {
            PredefinedRange::Yesterday => {
                let day = today - Days::new(1);
                DateRange {
                    start: day,
                    end: day,
                }
            }
            PredefinedRange::Last7Days => DateRange {
                start: today - Days::new(6),
                end: today,
            },
            PredefinedRange::Last15Days => DateRange {
                start: today - Days::new(14),
                end: today,
            },
            PredefinedRange::Last30Days => DateRange {
                start: today - Days::new(29),
                end: today,
            },
            PredefinedRange::Last3Months => DateRange {
                start: today.checked_sub_months(Months::new(3)).unwrap_or(today),
                end: today,
            },
        }
    }
}

/// An inclusive span of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// State of the date-picker control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatePickerState {
    pub range: Option<DateRange>,
    pub calendar_visible: bool,
    pub selected: Option<PredefinedRange>,
}

impl DatePickerState {
    /// Apply a preset: records the selection and resolves the range.
    pub fn select(&mut self, preset: PredefinedRange, today: NaiveDate) {
        self.selected = Some(preset);
        self.range = Some(preset.resolve(today));
    }

    /// Drop the filter back to "all dates".
    pub fn clear(&mut self) {
        self.selected = None;
        self.range = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_yesterday_is_a_single_day() {
        let range = PredefinedRange::Yesterday.resolve(date(2026, 8, 5));
        assert_eq!(range.start, date(2026, 8, 4));
        assert_eq!(range.end, date(2026, 8, 4));
    }

    #[test]
    fn test_last_7_days_spans_a_week_ending_today() {
        let today = date(2026, 8, 5);
        let range = PredefinedRange::Last7Days.resolve(today);
        assert_eq!(range.start, date(2026, 7, 30));
        assert_eq!(range.end, today);
    }

    #[test]
    fn test_last_30_days_crosses_month_boundary() {
        let range = PredefinedRange::Last30Days.resolve(date(2026, 1, 10));
        assert_eq!(range.start, date(2025, 12, 12));
    }

    #[test]
    fn test_last_3_months_uses_calendar_months() {
        let range = PredefinedRange::Last3Months.resolve(date(2026, 5, 31));
        // February is shorter; chrono clamps to the last valid day.
        assert_eq!(range.start, date(2026, 2, 28));
        assert_eq!(range.end, date(2026, 5, 31));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = DateRange {
            start: date(2026, 8, 1),
            end: date(2026, 8, 5),
        };
        assert!(range.contains(date(2026, 8, 1)));
        assert!(range.contains(date(2026, 8, 5)));
        assert!(!range.contains(date(2026, 7, 31)));
        assert!(!range.contains(date(2026, 8, 6)));
    }

    #[test]
    fn test_picker_defaults_and_selection() {
        let mut picker = DatePickerState::default();
        assert!(picker.range.is_none());
        assert!(!picker.calendar_visible);
        assert!(picker.selected.is_none());

        let today = date(2026, 8, 5);
        picker.select(PredefinedRange::Last15Days, today);
        assert_eq!(picker.selected, Some(PredefinedRange::Last15Days));
        assert_eq!(picker.range.unwrap().start, date(2026, 7, 22));

        picker.clear();
        assert!(picker.range.is_none());
        assert!(picker.selected.is_none());
    }
}
