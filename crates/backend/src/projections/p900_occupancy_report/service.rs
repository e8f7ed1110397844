use contracts::domain::a002_room::aggregate::Room;
use contracts::domain::a003_booking::aggregate::{Booking, BookingStatus};
use contracts::projections::p900_occupancy_report::dto::OccupancyReportRow;

use crate::shared::fixtures;

/// Загрузка номеров по демо-данным
pub fn build_report() -> Vec<OccupancyReportRow> {
    compute(fixtures::rooms(), fixtures::bookings())
}

/// Отменённые бронирования не учитываются; номера без бронирований
/// попадают в отчёт с нулями. Сортировка по номеру комнаты.
pub fn compute(rooms: &[Room], bookings: &[Booking]) -> Vec<OccupancyReportRow> {
    let mut rows: Vec<OccupancyReportRow> = rooms
        .iter()
        .map(|room| {
            let active = bookings
                .iter()
                .filter(|b| b.room_id == room.id && b.status != BookingStatus::Cancelled);

            let (count, nights) = active.fold((0u32, 0i64), |(count, nights), b| {
                (count + 1, nights + b.nights())
            });

            OccupancyReportRow {
                room_number: room.number.clone(),
                category: room.category.display_name().to_string(),
                bookings: count,
                nights,
                revenue: nights as f64 * room.price_per_night,
            }
        })
        .collect();

    rows.sort_by(|a, b| a.room_number.cmp(&b.room_number));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_room::aggregate::RoomCategory;

    fn room(id: &str, number: &str, price: f64) -> Room {
        Room {
            id: id.into(),
            number: number.into(),
            category: RoomCategory::Double,
            beds: 2,
            price_per_night: price,
            amenities: vec![],
        }
    }

    fn booking(room_id: &str, arrival: &str, departure: &str, status: BookingStatus) -> Booking {
        Booking {
            id: format!("B-{room_id}-{arrival}"),
            guest_id: "G-1".into(),
            room_id: room_id.into(),
            arrival: arrival.parse().unwrap(),
            departure: departure.parse().unwrap(),
            status,
        }
    }

    #[test]
    fn test_compute_sums_nights_and_revenue() {
        let rooms = vec![room("R-2", "202", 100.0), room("R-1", "101", 50.0)];
        let bookings = vec![
            booking("R-1", "2024-06-01", "2024-06-03", BookingStatus::CheckedOut),
            booking("R-1", "2024-06-10", "2024-06-11", BookingStatus::Confirmed),
            booking("R-1", "2024-06-20", "2024-06-25", BookingStatus::Cancelled),
        ];

        let report = compute(&rooms, &bookings);
        assert_eq!(report.len(), 2);

        assert_eq!(report[0].room_number, "101");
        assert_eq!(report[0].bookings, 2);
        assert_eq!(report[0].nights, 3);
        assert_eq!(report[0].revenue, 150.0);

        assert_eq!(report[1].room_number, "202");
        assert_eq!(report[1].bookings, 0);
        assert_eq!(report[1].nights, 0);
        assert_eq!(report[1].revenue, 0.0);
    }

    #[test]
    fn test_fixture_report_covers_every_room() {
        let report = build_report();
        assert_eq!(report.len(), fixtures::rooms().len());
    }
}
