use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// Type aliases for clarity
pub type SlotId = String;
pub type CourseId = String;
pub type RoomId = String;

/// Represents a course to be placed on the weekly timetable.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub instructor_id: Option<String>,
    #[serde(default)]
    pub instructor: String,
    #[serde(default)]
    pub room_id: Option<RoomId>,
    #[serde(default)]
    pub room: String,
    pub expected_enrollment: u32,
    #[serde(default)]
    pub requires_lab: bool,
    #[serde(default)]
    pub required_equipment: Vec<String>,
}

impl Course {
    /// Grouping key for instructor double-bookings. Uses the stable
    /// identifier when one is present; the display name is the fallback
    /// for legacy records that only carry a name.
    pub fn instructor_key(&self) -> Option<&str> {
        match self.instructor_id.as_deref() {
            Some(id) if !id.is_empty() => Some(id),
            _ if !self.instructor.is_empty() => Some(&self.instructor),
            _ => None,
        }
    }

    /// Grouping key for room double-bookings, same fallback rule as
    /// [`Course::instructor_key`].
    pub fn room_key(&self) -> Option<&str> {
        match self.room_id.as_deref() {
            Some(id) if !id.is_empty() => Some(id),
            _ if !self.room.is_empty() => Some(&self.room),
            _ => None,
        }
    }
}

/// Represents a physical room with its capacity and fittings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub capacity: u32,
    #[serde(default)]
    pub equipment: Vec<String>,
}

/// The weekly timetable: slot id (e.g. "Monday-9:00 AM") to the courses
/// occupying that slot.
///
/// Slot values arriving over the wire are normalized once, here: a value
/// that is not an array, or an array entry that is not a course, is
/// dropped rather than rejected. Upstream state can transiently hold such
/// values mid-update, and a schedule must still deserialize.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Schedule {
    #[serde(flatten)]
    pub slots: BTreeMap<SlotId, Vec<Course>>,
}

impl<'de> Deserialize<'de> for Schedule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = BTreeMap::<SlotId, serde_json::Value>::deserialize(deserializer)?;
        let slots = raw
            .into_iter()
            .map(|(slot, value)| (slot, normalize_slot(value)))
            .collect();
        Ok(Schedule { slots })
    }
}

fn normalize_slot(value: serde_json::Value) -> Vec<Course> {
    match value {
        serde_json::Value::Array(entries) => entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// Splits a slot id like "Monday-9:00 AM" into its day and time labels.
/// Ids without a separator keep the whole string as the day.
pub fn slot_day_and_time(slot_id: &str) -> (&str, &str) {
    match slot_id.split_once('-') {
        Some((day, time)) => (day, time),
        None => (slot_id, ""),
    }
}

/// Which resource a conflict record is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictKind {
    Instructor,
    Room,
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictKind::Instructor => write!(f, "instructor"),
            ConflictKind::Room => write!(f, "room"),
        }
    }
}

/// A detected double-booking within a single slot.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub id: u32,
    pub kind: ConflictKind,
    pub slot_id: SlotId,
    pub courses: Vec<Course>,
    pub message: String,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

/// Verdict on whether one room satisfies one course's requirements.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Suitability {
    pub suitable: bool,
    pub message: String,
}

impl Suitability {
    pub fn suitable() -> Self {
        Suitability {
            suitable: true,
            message: String::new(),
        }
    }

    pub fn unsuitable(message: String) -> Self {
        Suitability {
            suitable: false,
            message,
        }
    }
}

/// A proposed course-to-room placement.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub course: Course,
    pub room: Room,
}

/// The result of one auto-assignment pass: proposed placements plus the
/// courses no room in the catalog could take.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentOutcome {
    pub assignments: Vec<Assignment>,
    pub failures: Vec<Course>,
}

/// Dataset-level counts shown next to the timetable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub total_slots: usize,
    pub total_courses: usize,
    pub instructor_conflicts: usize,
    pub room_conflicts: usize,
}
