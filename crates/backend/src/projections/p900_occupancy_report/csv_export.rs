use anyhow::Result;
use contracts::projections::p900_occupancy_report::dto::{format_money, OccupancyReportRow};

const HEADERS: [&str; 5] = ["Zimmer", "Kategorie", "Buchungen", "Nächte", "Umsatz"];

/// CSV отчёта: разделитель `;`, UTF-8 BOM для Excel
pub fn to_csv(rows: &[OccupancyReportRow]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(HEADERS)?;
    for row in rows {
        writer.write_record([
            row.room_number.clone(),
            row.category.clone(),
            row.bookings.to_string(),
            row.nights.to_string(),
            format_money(row.revenue),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e))?;
    let body = String::from_utf8(bytes)?;
    Ok(format!("\u{FEFF}{}", body))
}
