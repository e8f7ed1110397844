use serde::{Deserialize, Serialize};

/// Строка отчёта о загрузке номеров
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OccupancyReportRow {
    pub room_number: String,
    pub category: String,
    pub bookings: u32,
    pub nights: i64,
    pub revenue: f64,
}

/// Денежная сумма в немецком формате: `1234,50`
pub fn format_money(value: f64) -> String {
    format!("{:.2}", value).replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money_uses_decimal_comma() {
        assert_eq!(format_money(1234.5), "1234,50");
        assert_eq!(format_money(177.0), "177,00");
        assert_eq!(format_money(0.0), "0,00");
    }
}
