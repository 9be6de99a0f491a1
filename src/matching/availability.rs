//! Exam/lecturer availability matching.

use chrono::NaiveDate;
use rayon::prelude::*;

use crate::models::{DoctorRegistry, ExamEntry, TimeOfDay, Weekday};

/// Availability list sentinel for exams whose weekday cannot be resolved.
pub const UNKNOWN_DATE_DAY: &str = "Unknown Date/Day";

/// Date format carried by exam cells.
const DATE_FORMAT: &str = "%d/%m/%Y";

/// Half-open interval overlap: [s1,e1) and [s2,e2) overlap iff `s1 < e2 &&
/// e1 > s2`. Intervals that only touch at an endpoint do not overlap.
pub fn overlaps(s1: TimeOfDay, e1: TimeOfDay, s2: TimeOfDay, e2: TimeOfDay) -> bool {
    s1 < e2 && e1 > s2
}

/// Resolve each exam's weekday and compute its available lecturers.
///
/// Entries are independent and the registry is read-only here (extraction
/// and matching are phase-separated), so the work fans out across entries;
/// the returned list keeps the original entry order.
pub fn match_exams(mut exams: Vec<ExamEntry>, doctors: &DoctorRegistry) -> Vec<ExamEntry> {
    exams
        .par_iter_mut()
        .for_each(|exam| match_one(exam, doctors));
    exams
}

fn match_one(exam: &mut ExamEntry, doctors: &DoctorRegistry) {
    if exam.day_of_week.is_none() {
        if let Some(date) = &exam.date {
            exam.day_of_week = resolve_weekday(date);
        }
    }

    let Some(day) = exam.day_of_week else {
        tracing::debug!(course = %exam.course_name, "exam weekday unresolved");
        exam.available_doctors = vec![UNKNOWN_DATE_DAY.to_string()];
        return;
    };

    exam.available_doctors = doctors
        .iter()
        .filter(|doctor| {
            !doctor
                .busy
                .for_day(day)
                .iter()
                .any(|&(busy_start, busy_end)| overlaps(exam.start, exam.end, busy_start, busy_end))
        })
        .map(|doctor| doctor.name.clone())
        .collect();
}

/// Map a literal `DD/MM/YYYY` date onto the academic week. Malformed dates
/// and weekend dates both resolve to `None`.
fn resolve_weekday(date: &str) -> Option<Weekday> {
    let parsed = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()?;
    Weekday::from_calendar(chrono::Datelike::weekday(&parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u16, m: u16) -> TimeOfDay {
        TimeOfDay::from_hm(h, m).unwrap()
    }

    fn exam(start: TimeOfDay, end: TimeOfDay, date: Option<&str>) -> ExamEntry {
        ExamEntry {
            course_name: "مساق".into(),
            raw_time: String::new(),
            start,
            end,
            date: date.map(str::to_string),
            day_of_week: None,
            room: String::new(),
            section: String::new(),
            available_doctors: vec![],
        }
    }

    fn registry_with(name: &str, day: Weekday, busy: &[(TimeOfDay, TimeOfDay)]) -> DoctorRegistry {
        let mut registry = DoctorRegistry::new();
        let record = registry.get_or_insert(name);
        for &(s, e) in busy {
            record.busy.add(day, s, e);
        }
        registry
    }

    // --- overlap tests ---

    #[test]
    fn interval_overlaps_itself() {
        assert!(overlaps(t(9, 0), t(10, 0), t(9, 0), t(10, 0)));
    }

    #[test]
    fn touching_intervals_do_not_overlap() {
        assert!(!overlaps(t(9, 0), t(10, 0), t(10, 0), t(11, 0)));
        assert!(!overlaps(t(10, 0), t(11, 0), t(9, 0), t(10, 0)));
    }

    #[test]
    fn partial_and_contained_overlap() {
        assert!(overlaps(t(9, 0), t(10, 0), t(9, 30), t(11, 0)));
        assert!(overlaps(t(8, 0), t(12, 0), t(9, 0), t(10, 0)));
    }

    // --- weekday resolution tests ---

    #[test]
    fn sunday_date_resolves() {
        assert_eq!(resolve_weekday("07/01/2024"), Some(Weekday::Sun));
    }

    #[test]
    fn friday_date_unresolved() {
        assert_eq!(resolve_weekday("05/01/2024"), None);
    }

    #[test]
    fn malformed_date_unresolved() {
        assert_eq!(resolve_weekday("2024-01-07"), None);
        assert_eq!(resolve_weekday("31/02/2024"), None);
        assert_eq!(resolve_weekday(""), None);
    }

    // --- matching tests ---

    #[test]
    fn touching_exam_leaves_doctor_available() {
        let doctors = registry_with("د. أحمد", Weekday::Mon, &[(t(9, 0), t(10, 30))]);
        // 08/01/2024 is a Monday
        let matched = match_exams(
            vec![exam(t(10, 30), t(12, 0), Some("08/01/2024"))],
            &doctors,
        );
        assert_eq!(matched[0].day_of_week, Some(Weekday::Mon));
        assert_eq!(matched[0].available_doctors, vec!["د. أحمد"]);
    }

    #[test]
    fn overlapping_exam_removes_doctor() {
        let doctors = registry_with("د. أحمد", Weekday::Mon, &[(t(9, 0), t(10, 30))]);
        let matched = match_exams(
            vec![exam(t(10, 0), t(11, 0), Some("08/01/2024"))],
            &doctors,
        );
        assert!(matched[0].available_doctors.is_empty());
    }

    #[test]
    fn busy_on_other_day_does_not_block() {
        let doctors = registry_with("د. أحمد", Weekday::Tue, &[(t(9, 0), t(12, 0))]);
        let matched = match_exams(
            vec![exam(t(9, 0), t(11, 0), Some("08/01/2024"))],
            &doctors,
        );
        assert_eq!(matched[0].available_doctors, vec!["د. أحمد"]);
    }

    #[test]
    fn dateless_entry_gets_sentinel_and_no_comparison() {
        // Even a fully free doctor must not appear; no comparison runs
        let doctors = registry_with("د. أحمد", Weekday::Mon, &[]);
        let matched = match_exams(vec![exam(t(9, 0), t(11, 0), None)], &doctors);
        assert_eq!(matched[0].day_of_week, None);
        assert_eq!(matched[0].available_doctors, vec![UNKNOWN_DATE_DAY]);
    }

    #[test]
    fn weekend_date_gets_sentinel() {
        let doctors = DoctorRegistry::new();
        let matched = match_exams(
            vec![exam(t(9, 0), t(11, 0), Some("05/01/2024"))],
            &doctors,
        );
        assert_eq!(matched[0].day_of_week, None);
        assert_eq!(matched[0].available_doctors, vec![UNKNOWN_DATE_DAY]);
    }

    #[test]
    fn rematching_resolved_entry_is_idempotent() {
        let doctors = registry_with("د. أحمد", Weekday::Mon, &[(t(9, 0), t(10, 30))]);
        let first = match_exams(
            vec![exam(t(10, 30), t(12, 0), Some("08/01/2024"))],
            &doctors,
        );
        let second = match_exams(first.clone(), &doctors);
        assert_eq!(first, second);
    }

    #[test]
    fn availability_follows_registry_creation_order() {
        let mut doctors = DoctorRegistry::new();
        doctors.get_or_insert("ج");
        doctors.get_or_insert("أ");
        doctors.get_or_insert("ب");
        let matched = match_exams(
            vec![exam(t(9, 0), t(11, 0), Some("08/01/2024"))],
            &doctors,
        );
        assert_eq!(matched[0].available_doctors, vec!["ج", "أ", "ب"]);
    }

    #[test]
    fn entry_order_preserved_across_parallel_matching() {
        let doctors = DoctorRegistry::new();
        let exams: Vec<ExamEntry> = (0..64)
            .map(|i| {
                let mut e = exam(t(9, 0), t(10, 0), Some("08/01/2024"));
                e.course_name = format!("course-{i}");
                e
            })
            .collect();
        let matched = match_exams(exams, &doctors);
        for (i, entry) in matched.iter().enumerate() {
            assert_eq!(entry.course_name, format!("course-{i}"));
        }
    }
}
