use crate::conflicts::detect_conflicts;
use crate::data::{ConflictKind, Schedule, ScheduleSummary};

/// Dataset-level counts for the host dashboard: how full the timetable is
/// and how many double-bookings of each kind it currently holds.
pub fn summarize(schedule: &Schedule) -> ScheduleSummary {
    let conflicts = detect_conflicts(schedule);
    let instructor_conflicts = conflicts
        .iter()
        .filter(|c| c.kind == ConflictKind::Instructor)
        .count();

    ScheduleSummary {
        total_slots: schedule.slots.len(),
        total_courses: schedule.slots.values().map(Vec::len).sum(),
        instructor_conflicts,
        room_conflicts: conflicts.len() - instructor_conflicts,
    }
}
