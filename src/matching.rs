use crate::data::{Assignment, AssignmentOutcome, Course, Room, Suitability};
use log::{info, trace};

/// Checks one room against one course's requirements.
///
/// Checks run in order (capacity, lab, equipment) and stop at the first
/// failure, so the message names only the first violated rule. The
/// equipment check is the exception: it lists every missing item at once.
pub fn check_room(room: &Room, course: &Course) -> Suitability {
    // room has capacity
    if course.expected_enrollment > room.capacity {
        return Suitability::unsuitable(format!(
            "{} seats {} but {} expects {} students",
            room.name, room.capacity, course.code, course.expected_enrollment
        ));
    }

    // lab courses need a lab room
    if course.requires_lab && !is_lab(room) {
        return Suitability::unsuitable(format!(
            "{} requires a lab but {} is a {}",
            course.code, room.name, room.room_type
        ));
    }

    // every required equipment item has to be present
    let missing = missing_equipment(room, course);
    if !missing.is_empty() {
        return Suitability::unsuitable(format!(
            "{} lacks required equipment: {}",
            room.name,
            missing.join(", ")
        ));
    }

    Suitability::suitable()
}

fn is_lab(room: &Room) -> bool {
    room.room_type == "Computer Lab" || room.room_type.to_lowercase().contains("lab")
}

// equipment names match case-insensitively, and a room entry like
// "HD Projector" satisfies a requirement for "Projector"
fn missing_equipment<'a>(room: &Room, course: &'a Course) -> Vec<&'a str> {
    let inventory: Vec<String> = room.equipment.iter().map(|e| e.to_lowercase()).collect();

    course
        .required_equipment
        .iter()
        .filter(|item| {
            let needed = item.to_lowercase();
            !inventory.iter().any(|have| have.contains(&needed))
        })
        .map(String::as_str)
        .collect()
}

/// Filters the catalog down to rooms that satisfy the course, preserving
/// catalog order.
pub fn find_suitable_rooms<'a>(rooms: &'a [Room], course: &Course) -> Vec<&'a Room> {
    rooms
        .iter()
        .filter(|room| check_room(room, course).suitable)
        .collect()
}

/// Proposes a room for every unassigned course, taking the first suitable
/// room in catalog order. Courses no room can take are reported as
/// failures, never silently dropped.
///
/// Proposals within one pass are independent of each other: two courses
/// may be handed the same room. Time-slot occupancy is not this
/// function's concern; the host re-runs conflict detection after applying
/// the assignments.
pub fn auto_assign(courses: &[Course], rooms: &[Room]) -> AssignmentOutcome {
    info!(
        "auto-assigning {} courses across {} rooms",
        courses.len(),
        rooms.len()
    );

    let mut outcome = AssignmentOutcome::default();
    for course in courses {
        match find_suitable_rooms(rooms, course).into_iter().next() {
            Some(room) => {
                trace!("course {} placed in {}", course.code, room.name);
                outcome.assignments.push(Assignment {
                    course: course.clone(),
                    room: room.clone(),
                });
            }
            None => {
                trace!("no suitable room for course {}", course.code);
                outcome.failures.push(course.clone());
            }
        }
    }

    info!(
        "proposed {} assignments, {} courses without a suitable room",
        outcome.assignments.len(),
        outcome.failures.len()
    );
    outcome
}
