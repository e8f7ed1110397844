use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoomCategory {
    Single,
    Double,
    Family,
    Apartment,
}

impl RoomCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            RoomCategory::Single => "Einzelzimmer",
            RoomCategory::Double => "Doppelzimmer",
            RoomCategory::Family => "Familienzimmer",
            RoomCategory::Apartment => "Ferienwohnung",
        }
    }
}

/// Номер (комната)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub id: String,
    pub number: String,
    pub category: RoomCategory,
    pub beds: u32,
    pub price_per_night: f64,
    /// Оснащение, вложенная структура в браузере данных
    pub amenities: Vec<String>,
}
