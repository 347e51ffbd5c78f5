use crate::data::{
    AssignmentOutcome, Conflict, Course, Room, Schedule, ScheduleSummary, Suitability,
};
use crate::{conflicts, matching, summary};
use axum::{Json, Router, routing::post};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckRoomRequest {
    room: Room,
    course: Course,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FindRoomsRequest {
    rooms: Vec<Room>,
    course: Course,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AutoAssignRequest {
    courses: Vec<Course>,
    rooms: Vec<Room>,
}

async fn conflicts_handler(Json(schedule): Json<Schedule>) -> Json<Vec<Conflict>> {
    Json(conflicts::detect_conflicts(&schedule))
}

async fn summary_handler(Json(schedule): Json<Schedule>) -> Json<ScheduleSummary> {
    Json(summary::summarize(&schedule))
}

async fn check_room_handler(Json(request): Json<CheckRoomRequest>) -> Json<Suitability> {
    Json(matching::check_room(&request.room, &request.course))
}

async fn suitable_rooms_handler(Json(request): Json<FindRoomsRequest>) -> Json<Vec<Room>> {
    let rooms = matching::find_suitable_rooms(&request.rooms, &request.course);
    Json(rooms.into_iter().cloned().collect())
}

async fn auto_assign_handler(Json(request): Json<AutoAssignRequest>) -> Json<AssignmentOutcome> {
    Json(matching::auto_assign(&request.courses, &request.rooms))
}

pub fn router() -> Router {
    Router::new()
        .route("/v1/schedule/conflicts", post(conflicts_handler))
        .route("/v1/schedule/summary", post(summary_handler))
        .route("/v1/rooms/check", post(check_room_handler))
        .route("/v1/rooms/suitable", post(suitable_rooms_handler))
        .route("/v1/rooms/auto-assign", post(auto_assign_handler))
}

pub async fn run_server() {
    let app = router();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:8080")
        .await
        .unwrap();

    println!("Server running at http://{}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
