use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: String,
    pub guest_id: String,
    pub room_id: String,
    pub arrival: NaiveDate,
    pub departure: NaiveDate,
    pub status: BookingStatus,
}

impl Booking {
    /// Количество ночей; некорректный интервал даёт 0
    pub fn nights(&self) -> i64 {
        (self.departure - self.arrival).num_days().max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(arrival: &str, departure: &str) -> Booking {
        Booking {
            id: "B-1".into(),
            guest_id: "G-1".into(),
            room_id: "R-1".into(),
            arrival: arrival.parse().unwrap(),
            departure: departure.parse().unwrap(),
            status: BookingStatus::Confirmed,
        }
    }

    #[test]
    fn test_nights() {
        assert_eq!(booking("2024-05-01", "2024-05-04").nights(), 3);
        assert_eq!(booking("2024-02-28", "2024-03-01").nights(), 2);
        assert_eq!(booking("2024-05-04", "2024-05-01").nights(), 0);
    }
}
