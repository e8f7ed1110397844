//! Статические демо-данные пансиона (гости, номера, бронирования)

use chrono::NaiveDate;
use contracts::domain::a001_guest::aggregate::Guest;
use contracts::domain::a002_room::aggregate::{Room, RoomCategory};
use contracts::domain::a003_booking::aggregate::{Booking, BookingStatus};
use once_cell::sync::Lazy;

fn guest(id: &str, first: &str, last: &str, country: &str, email: Option<&str>, phone: Option<&str>) -> Guest {
    Guest {
        id: id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        country: country.to_string(),
        email: email.map(str::to_string),
        phone: phone.map(str::to_string),
    }
}

fn room(id: &str, number: &str, category: RoomCategory, beds: u32, price: f64, amenities: &[&str]) -> Room {
    Room {
        id: id.to_string(),
        number: number.to_string(),
        category,
        beds,
        price_per_night: price,
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn booking(id: &str, guest_id: &str, room_id: &str, arrival: NaiveDate, departure: NaiveDate, status: BookingStatus) -> Booking {
    Booking {
        id: id.to_string(),
        guest_id: guest_id.to_string(),
        room_id: room_id.to_string(),
        arrival,
        departure,
        status,
    }
}

static GUESTS: Lazy<Vec<Guest>> = Lazy::new(|| {
    vec![
        guest("G-1001", "Anna", "Becker", "DE", Some("anna.becker@example.de"), Some("+49 30 1234567")),
        guest("G-1002", "Lukas", "Huber", "AT", Some("lukas.huber@example.at"), None),
        guest("G-1003", "Claire", "Dubois", "FR", None, Some("+33 1 23456789")),
        guest("G-1004", "Marco", "Rossi", "IT", Some("m.rossi@example.it"), None),
        guest("G-1005", "Sophie", "Meier", "CH", None, None),
        guest("G-1006", "Jan", "de Vries", "NL", Some("jan@example.nl"), Some("+31 20 7654321")),
        guest("G-1007", "Erika", "Schmidt", "DE", None, Some("+49 89 998877")),
        guest("G-1008", "Tom", "Walker", "", Some("tom.walker@example.com"), None),
    ]
});

static ROOMS: Lazy<Vec<Room>> = Lazy::new(|| {
    vec![
        room("R-101", "101", RoomCategory::Single, 1, 59.0, &["Dusche", "WLAN"]),
        room("R-102", "102", RoomCategory::Double, 2, 89.0, &["Dusche", "WLAN", "Balkon"]),
        room("R-103", "103", RoomCategory::Double, 2, 94.5, &["Badewanne", "WLAN"]),
        room("R-201", "201", RoomCategory::Family, 4, 129.0, &["Dusche", "WLAN", "Kinderbett"]),
        room("R-202", "202", RoomCategory::Apartment, 3, 145.0, &["Küche", "WLAN", "Terrasse"]),
    ]
});

static BOOKINGS: Lazy<Vec<Booking>> = Lazy::new(|| {
    vec![
        booking("B-5001", "G-1001", "R-102", date(2024, 6, 1), date(2024, 6, 5), BookingStatus::CheckedOut),
        booking("B-5002", "G-1002", "R-101", date(2024, 6, 3), date(2024, 6, 4), BookingStatus::CheckedOut),
        booking("B-5003", "G-1003", "R-201", date(2024, 6, 10), date(2024, 6, 17), BookingStatus::CheckedIn),
        booking("B-5004", "G-1004", "R-102", date(2024, 6, 12), date(2024, 6, 14), BookingStatus::Confirmed),
        booking("B-5005", "G-1005", "R-202", date(2024, 7, 1), date(2024, 7, 8), BookingStatus::Cancelled),
        booking("B-5006", "G-1006", "R-202", date(2024, 7, 15), date(2024, 7, 22), BookingStatus::Confirmed),
        booking("B-5007", "G-1007", "R-101", date(2024, 7, 20), date(2024, 7, 23), BookingStatus::Confirmed),
    ]
});

pub fn guests() -> &'static [Guest] {
    GUESTS.as_slice()
}

pub fn rooms() -> &'static [Room] {
    ROOMS.as_slice()
}

pub fn bookings() -> &'static [Booking] {
    BOOKINGS.as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bookings_reference_existing_guests_and_rooms() {
        for b in bookings() {
            assert!(guests().iter().any(|g| g.id == b.guest_id), "{}", b.id);
            assert!(rooms().iter().any(|r| r.id == b.room_id), "{}", b.id);
            assert!(b.departure > b.arrival, "{}", b.id);
        }
    }
}
