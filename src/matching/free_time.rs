//! Free-time gaps inside the standard working day.

use std::collections::BTreeMap;

use crate::models::{ScheduleSlot, TimeOfDay, Weekday};

/// Working window start, 08:00.
const WORK_WINDOW_START_MIN: u16 = 8 * 60;

/// Working window end (exclusive), 16:00.
const WORK_WINDOW_END_MIN: u16 = 16 * 60;

/// Gaps shorter than this are scheduling noise and dropped.
const MIN_GAP_MINUTES: u16 = 15;

/// Anything that occupies a time range on a set of weekdays.
pub trait IntervalRecord {
    fn start(&self) -> TimeOfDay;
    fn end(&self) -> TimeOfDay;
    fn days(&self) -> &[Weekday];
}

impl IntervalRecord for ScheduleSlot {
    fn start(&self) -> TimeOfDay {
        self.start
    }

    fn end(&self) -> TimeOfDay {
        self.end
    }

    fn days(&self) -> &[Weekday] {
        &self.days
    }
}

/// Per-weekday free gaps within [08:00, 16:00), formatted `"HH:MM - HH:MM"`.
///
/// Days with no recorded interval are absent from the result entirely:
/// absence signals "no data", while an empty list would wrongly claim a
/// fully booked day. Days Sun through Thu, in week order.
pub fn free_time<R: IntervalRecord>(records: &[R]) -> BTreeMap<Weekday, Vec<String>> {
    let mut result = BTreeMap::new();

    for day in Weekday::ALL {
        let mut busy: Vec<(u16, u16)> = records
            .iter()
            .filter(|r| r.days().contains(&day))
            .map(|r| (r.start().minutes(), r.end().minutes()))
            .collect();
        if busy.is_empty() {
            continue;
        }
        busy.sort();

        let gaps = window_gaps(&merge_intervals(busy));
        if gaps.is_empty() {
            continue;
        }
        result.insert(
            day,
            gaps.iter()
                .map(|&(s, e)| format!("{} - {}", fmt_minutes(s), fmt_minutes(e)))
                .collect(),
        );
    }

    result
}

/// Merge overlapping intervals in a start-sorted list.
fn merge_intervals(sorted: Vec<(u16, u16)>) -> Vec<(u16, u16)> {
    let mut merged: Vec<(u16, u16)> = Vec::new();
    for (start, end) in sorted {
        match merged.last_mut() {
            Some(current) if start < current.1 => current.1 = current.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

/// Walk merged intervals against the working window, collecting the gaps
/// between the cursor and each interval, plus the trailing gap to the window
/// end. Sub-threshold gaps are discarded.
fn window_gaps(merged: &[(u16, u16)]) -> Vec<(u16, u16)> {
    let mut gaps = Vec::new();
    let mut cursor = WORK_WINDOW_START_MIN;

    for &(start, end) in merged {
        if start > cursor {
            gaps.push((cursor, start));
        }
        cursor = cursor.max(end);
    }
    if cursor < WORK_WINDOW_END_MIN {
        gaps.push((cursor, WORK_WINDOW_END_MIN));
    }

    gaps.retain(|&(s, e)| e - s >= MIN_GAP_MINUTES);
    gaps
}

fn fmt_minutes(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u16, m: u16) -> TimeOfDay {
        TimeOfDay::from_hm(h, m).unwrap()
    }

    fn slot(start: (u16, u16), end: (u16, u16), days: &[Weekday]) -> ScheduleSlot {
        ScheduleSlot {
            start: t(start.0, start.1),
            end: t(end.0, end.1),
            days: days.to_vec(),
            date: None,
        }
    }

    #[test]
    fn single_busy_interval_splits_the_window() {
        let slots = [slot((9, 0), (10, 30), &[Weekday::Mon])];
        let free = free_time(&slots);
        assert_eq!(
            free[&Weekday::Mon],
            vec!["08:00 - 09:00", "10:30 - 16:00"]
        );
    }

    #[test]
    fn days_without_data_are_absent() {
        let slots = [slot((9, 0), (10, 30), &[Weekday::Mon])];
        let free = free_time(&slots);
        assert_eq!(free.len(), 1);
        assert!(!free.contains_key(&Weekday::Sun));
        assert!(!free.contains_key(&Weekday::Tue));
    }

    #[test]
    fn overlapping_intervals_merge_before_gap_computation() {
        let slots = [
            slot((9, 0), (10, 0), &[Weekday::Wed]),
            slot((9, 45), (11, 0), &[Weekday::Wed]),
        ];
        let free = free_time(&slots);
        assert_eq!(
            free[&Weekday::Wed],
            vec!["08:00 - 09:00", "11:00 - 16:00"]
        );
    }

    #[test]
    fn unsorted_input_handled() {
        let slots = [
            slot((13, 0), (14, 0), &[Weekday::Sun]),
            slot((9, 0), (10, 0), &[Weekday::Sun]),
        ];
        let free = free_time(&slots);
        assert_eq!(
            free[&Weekday::Sun],
            vec!["08:00 - 09:00", "10:00 - 13:00", "14:00 - 16:00"]
        );
    }

    #[test]
    fn short_gaps_discarded() {
        // 10 minutes between the two intervals: below the threshold
        let slots = [
            slot((8, 0), (11, 50), &[Weekday::Tue]),
            slot((12, 0), (16, 0), &[Weekday::Tue]),
        ];
        let free = free_time(&slots);
        assert!(!free.contains_key(&Weekday::Tue));
    }

    #[test]
    fn fully_booked_day_absent_rather_than_empty() {
        let slots = [slot((8, 0), (16, 0), &[Weekday::Thu])];
        let free = free_time(&slots);
        assert!(!free.contains_key(&Weekday::Thu));
    }

    #[test]
    fn busy_outside_window_leaves_whole_window_free() {
        let slots = [slot((6, 0), (7, 30), &[Weekday::Mon])];
        let free = free_time(&slots);
        assert_eq!(free[&Weekday::Mon], vec!["08:00 - 16:00"]);
    }

    #[test]
    fn record_spanning_multiple_days_counted_on_each() {
        let slots = [slot((9, 0), (10, 0), &[Weekday::Sun, Weekday::Tue])];
        let free = free_time(&slots);
        assert_eq!(free.len(), 2);
        assert_eq!(free[&Weekday::Sun], free[&Weekday::Tue]);
    }

    #[test]
    fn result_iterates_in_week_order() {
        let slots = [
            slot((9, 0), (10, 0), &[Weekday::Thu]),
            slot((9, 0), (10, 0), &[Weekday::Sun]),
            slot((9, 0), (10, 0), &[Weekday::Tue]),
        ];
        let free = free_time(&slots);
        let days: Vec<Weekday> = free.keys().copied().collect();
        assert_eq!(days, vec![Weekday::Sun, Weekday::Tue, Weekday::Thu]);
    }

    #[test]
    fn no_records_yields_empty_map() {
        let free = free_time::<ScheduleSlot>(&[]);
        assert!(free.is_empty());
    }
}
