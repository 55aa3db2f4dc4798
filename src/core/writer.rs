use crate::domain::model::TodoRecord;
use crate::utils::error::{Result, ServiceError};
use chrono::NaiveDate;
use serde_json::Value;
use std::io;

pub const CSV_HEADER: [&str; 4] = ["id", "userId", "title", "completed"];

/// `{YYYY_MM_DD}_{id}.csv`, using the clock date at write time.
pub fn file_name(date: NaiveDate, id: &Value) -> String {
    format!("{}_{}.csv", date.format("%Y_%m_%d"), render_value(id))
}

/// Renders the two-row CSV: the fixed header, then the four field values in
/// header order. The csv crate's default quoting covers commas and quotes
/// inside `title`.
pub fn render_csv(record: &TodoRecord) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    writer.write_record([
        render_value(&record.id),
        render_value(&record.user_id),
        render_value(&record.title),
        render_value(&record.completed),
    ])?;
    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| ServiceError::Io(io::Error::new(io::ErrorKind::Other, e.to_string())))
}

/// JSON strings render bare (no surrounding quotes); every other value uses
/// its JSON text form, so booleans come out as lowercase `true` / `false`.
/// Consumers depend on this rendering.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
