use crate::data::{Conflict, ConflictKind, Course, Schedule, slot_day_and_time};
use itertools::Itertools;
use log::{info, trace};
use std::collections::HashMap;

/// Scans the schedule and reports every instructor and room double-booking.
///
/// Slots are visited in map order and, within a slot, instructor conflicts
/// are emitted before room conflicts, so repeated runs over an unchanged
/// schedule produce the same list with the same numbering. Conflict ids
/// restart at 1 on every call; they exist for host-side reference only.
pub fn detect_conflicts(schedule: &Schedule) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for (slot_id, courses) in &schedule.slots {
        // a lone course cannot collide with anything
        if courses.len() < 2 {
            continue;
        }
        trace!("checking slot {} with {} courses", slot_id, courses.len());

        collect_collisions(slot_id, courses, ConflictKind::Instructor, &mut conflicts);
        collect_collisions(slot_id, courses, ConflictKind::Room, &mut conflicts);
    }

    for (i, conflict) in conflicts.iter_mut().enumerate() {
        conflict.id = (i + 1) as u32;
    }

    info!(
        "detected {} conflicts across {} slots",
        conflicts.len(),
        schedule.slots.len()
    );
    conflicts
}

fn collect_collisions(
    slot_id: &str,
    courses: &[Course],
    kind: ConflictKind,
    out: &mut Vec<Conflict>,
) {
    fn key_of(course: &Course, kind: ConflictKind) -> Option<&str> {
        match kind {
            ConflictKind::Instructor => course.instructor_key(),
            ConflictKind::Room => course.room_key(),
        }
    }

    let groups: HashMap<&str, Vec<&Course>> = courses
        .iter()
        .filter_map(|c| key_of(c, kind).map(|k| (k, c)))
        .into_group_map();

    // emit in first-appearance order; HashMap iteration order would make
    // conflict numbering differ between runs
    for key in courses.iter().filter_map(|c| key_of(c, kind)).unique() {
        let group = &groups[key];
        if group.len() < 2 {
            continue;
        }

        out.push(Conflict {
            id: 0, // numbered after the scan
            kind,
            slot_id: slot_id.to_string(),
            courses: group.iter().map(|c| (*c).clone()).collect(),
            message: describe(slot_id, kind, key, group),
        });
    }
}

fn describe(slot_id: &str, kind: ConflictKind, key: &str, group: &[&Course]) -> String {
    // prefer the display name over an opaque stable id in messages
    let name = group
        .first()
        .map(|c| match kind {
            ConflictKind::Instructor => c.instructor.as_str(),
            ConflictKind::Room => c.room.as_str(),
        })
        .filter(|n| !n.is_empty())
        .unwrap_or(key);

    let when = match slot_day_and_time(slot_id) {
        (day, "") => day.to_string(),
        (day, time) => format!("{} at {}", day, time),
    };

    match kind {
        ConflictKind::Instructor => format!(
            "Instructor {} has {} courses on {}",
            name,
            group.len(),
            when
        ),
        ConflictKind::Room => {
            format!("Room {} has {} courses on {}", name, group.len(), when)
        }
    }
}
