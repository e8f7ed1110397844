use axum::Json;
use contracts::domain::a001_guest::aggregate::Guest;
use contracts::domain::a002_room::aggregate::Room;
use contracts::domain::a003_booking::aggregate::Booking;

use crate::shared::fixtures;

/// GET /api/guests
pub async fn list_guests() -> Json<Vec<Guest>> {
    Json(fixtures::guests().to_vec())
}

/// GET /api/rooms
pub async fn list_rooms() -> Json<Vec<Room>> {
    Json(fixtures::rooms().to_vec())
}

/// GET /api/bookings
pub async fn list_bookings() -> Json<Vec<Booking>> {
    Json(fixtures::bookings().to_vec())
}
