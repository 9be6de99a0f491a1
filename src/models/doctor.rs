//! Lecturer busy-time records.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::time::{TimeOfDay, Weekday};

/// Busy intervals keyed by academic weekday.
///
/// A fixed five-entry container, one interval list per day. Intervals are
/// appended in extraction order and left unsorted; consumers that need order
/// sort lazily.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusySet {
    by_day: [Vec<(TimeOfDay, TimeOfDay)>; 5],
}

impl BusySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a busy interval to a day's list.
    pub fn add(&mut self, day: Weekday, start: TimeOfDay, end: TimeOfDay) {
        self.by_day[day.index()].push((start, end));
    }

    /// The day's busy intervals, in insertion order.
    pub fn for_day(&self, day: Weekday) -> &[(TimeOfDay, TimeOfDay)] {
        &self.by_day[day.index()]
    }

    /// True when no day has any interval.
    pub fn is_empty(&self) -> bool {
        self.by_day.iter().all(|intervals| intervals.is_empty())
    }
}

// Serializes as a day -> interval-list map, Sun through Thu, matching the
// wire shape of the schedule payload.
impl Serialize for BusySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Weekday::ALL.len()))?;
        for day in Weekday::ALL {
            map.serialize_entry(day.as_str(), self.for_day(day))?;
        }
        map.end()
    }
}

/// One lecturer and their extracted busy time.
///
/// Identity is the sanitized name string; a name recurring on a later roster
/// page extends this record rather than replacing it.
#[derive(Debug, Clone, Serialize)]
pub struct DoctorRecord {
    pub name: String,
    #[serde(rename = "busy_slots")]
    pub busy: BusySet,
}

impl DoctorRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            busy: BusySet::new(),
        }
    }
}

/// Insertion-ordered collection of doctor records.
///
/// The availability matcher iterates doctors in the order their records were
/// created, so creation order is part of the contract here.
#[derive(Debug, Clone, Default)]
pub struct DoctorRegistry {
    records: Vec<DoctorRecord>,
}

impl DoctorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the record for `name`, creating it (with an empty busy set) on
    /// first sight.
    pub fn get_or_insert(&mut self, name: &str) -> &mut DoctorRecord {
        let pos = match self.records.iter().position(|r| r.name == name) {
            Some(pos) => pos,
            None => {
                self.records.push(DoctorRecord::new(name));
                self.records.len() - 1
            }
        };
        &mut self.records[pos]
    }

    pub fn get(&self, name: &str) -> Option<&DoctorRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Records in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &DoctorRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// Serializes as a name -> record map, preserving creation order.
impl Serialize for DoctorRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for record in &self.records {
            map.serialize_entry(&record.name, record)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u16, m: u16) -> TimeOfDay {
        TimeOfDay::from_hm(h, m).unwrap()
    }

    // --- BusySet tests ---

    #[test]
    fn new_set_has_all_days_empty() {
        let set = BusySet::new();
        assert!(set.is_empty());
        for day in Weekday::ALL {
            assert!(set.for_day(day).is_empty());
        }
    }

    #[test]
    fn add_keeps_insertion_order_per_day() {
        let mut set = BusySet::new();
        set.add(Weekday::Mon, t(12, 0), t(13, 0));
        set.add(Weekday::Mon, t(9, 0), t(10, 30));
        assert_eq!(
            set.for_day(Weekday::Mon),
            &[(t(12, 0), t(13, 0)), (t(9, 0), t(10, 30))]
        );
        assert!(set.for_day(Weekday::Tue).is_empty());
    }

    #[test]
    fn serializes_as_day_keyed_map() {
        let mut set = BusySet::new();
        set.add(Weekday::Sun, t(8, 0), t(9, 30));
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["Sun"][0][0], "08:00");
        assert_eq!(json["Sun"][0][1], "09:30");
        assert_eq!(json["Thu"].as_array().unwrap().len(), 0);
    }

    // --- DoctorRegistry tests ---

    #[test]
    fn get_or_insert_creates_then_reuses() {
        let mut registry = DoctorRegistry::new();
        registry
            .get_or_insert("Dr A")
            .busy
            .add(Weekday::Sun, t(9, 0), t(10, 0));
        registry
            .get_or_insert("Dr A")
            .busy
            .add(Weekday::Sun, t(11, 0), t(12, 0));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("Dr A").unwrap().busy.for_day(Weekday::Sun).len(), 2);
    }

    #[test]
    fn iteration_follows_creation_order() {
        let mut registry = DoctorRegistry::new();
        registry.get_or_insert("C");
        registry.get_or_insert("A");
        registry.get_or_insert("B");
        registry.get_or_insert("A");

        let names: Vec<&str> = registry.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn registry_serializes_as_name_keyed_map() {
        let mut registry = DoctorRegistry::new();
        registry
            .get_or_insert("Dr A")
            .busy
            .add(Weekday::Wed, t(10, 0), t(11, 0));
        let json = serde_json::to_value(&registry).unwrap();
        assert_eq!(json["Dr A"]["busy_slots"]["Wed"][0][0], "10:00");
    }
}
