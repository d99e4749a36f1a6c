//! Google Sheets adapter for the `TabularStore` port.
//!
//! Talks to the configured sheet through the `google-sheets4` values API;
//! like the Drive adapter it blocks on an owned tokio runtime.

use google_sheets4::api::{ClearValuesRequest, Scope, ValueRange};
use google_sheets4::hyper::client::HttpConnector;
use google_sheets4::hyper_rustls::HttpsConnector;
use google_sheets4::{hyper, hyper_rustls, oauth2, Sheets};
use serde_json::Value;
use tokio::runtime::Runtime;

use crate::application::TabularStore;
use crate::domain::{AppError, Cell, DriveConfig, Result, SpreadsheetConfig};

/// Generous column bound for whole-sheet clears.
const LAST_COLUMN: &str = "ZZ";

/// Blocking Sheets client bound to one spreadsheet tab.
pub struct SheetsStore {
    hub: Sheets<HttpsConnector<HttpConnector>>,
    rt: Runtime,
    spreadsheet_id: String,
    sheet: String,
}

impl SheetsStore {
    /// Authenticate with the configured service-account key and bind to the
    /// configured sheet.
    ///
    /// # Errors
    /// Returns error if the key file cannot be read or the authenticator
    /// cannot be built.
    pub fn connect(spreadsheet: &SpreadsheetConfig, drive: &DriveConfig) -> Result<Self> {
        let rt = Runtime::new().map_err(|e| AppError::io("Failed to start async runtime", e))?;
        let hub = rt.block_on(build_hub(drive))?;

        Ok(Self {
            hub,
            rt,
            spreadsheet_id: spreadsheet.id.clone(),
            sheet: spreadsheet.sheet.clone(),
        })
    }

    fn update(&self, range: String, values: Vec<Vec<Value>>) -> Result<()> {
        let body = ValueRange {
            range: Some(range.clone()),
            values: Some(values),
            ..Default::default()
        };

        self.rt
            .block_on(
                self.hub
                    .spreadsheets()
                    .values_update(body, &self.spreadsheet_id, &range)
                    .value_input_option("RAW")
                    .add_scope(Scope::Spreadsheet)
                    .doit(),
            )
            .map_err(AppError::sheet)?;

        Ok(())
    }
}

async fn build_hub(config: &DriveConfig) -> Result<Sheets<HttpsConnector<HttpConnector>>> {
    let key = oauth2::read_service_account_key(&config.credentials)
        .await
        .map_err(|e| {
            AppError::io(
                format!(
                    "Failed to read service account key: {}",
                    config.credentials.display()
                ),
                e,
            )
        })?;

    let mut builder = oauth2::ServiceAccountAuthenticator::builder(key);
    if let Some(subject) = &config.impersonate {
        builder = builder.subject(subject.as_str());
    }
    let auth = builder
        .build()
        .await
        .map_err(|e| AppError::auth("Failed to build Sheets authenticator", e))?;

    let client = hyper::Client::builder().build(
        hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()
            .https_or_http()
            .enable_http1()
            .build(),
    );

    Ok(Sheets::new(client, auth))
}

impl TabularStore for SheetsStore {
    fn clear_data_rows(&self) -> Result<()> {
        let range = format!("'{}'!A2:{LAST_COLUMN}", self.sheet);

        self.rt
            .block_on(
                self.hub
                    .spreadsheets()
                    .values_clear(ClearValuesRequest::default(), &self.spreadsheet_id, &range)
                    .add_scope(Scope::Spreadsheet)
                    .doit(),
            )
            .map_err(AppError::sheet)?;

        tracing::debug!(sheet = %self.sheet, "cleared data rows");
        Ok(())
    }

    fn write_rows(&self, start_row: u32, rows: &[Vec<Cell>]) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }

        let range = format!("'{}'!A{start_row}", self.sheet);
        let values = rows
            .iter()
            .map(|row| row.iter().map(cell_to_value).collect())
            .collect();

        self.update(range, values)
    }

    fn read_all(&self) -> Result<Vec<Vec<Cell>>> {
        let range = format!("'{}'", self.sheet);

        let (_, value_range) = self
            .rt
            .block_on(
                self.hub
                    .spreadsheets()
                    .values_get(&self.spreadsheet_id, &range)
                    .value_render_option("UNFORMATTED_VALUE")
                    .add_scope(Scope::Spreadsheet)
                    .doit(),
            )
            .map_err(AppError::sheet)?;

        Ok(value_range
            .values
            .unwrap_or_default()
            .into_iter()
            .map(|row| row.into_iter().map(value_to_cell).collect())
            .collect())
    }

    fn write_column(&self, start_row: u32, column: usize, values: &[Vec<Cell>]) -> Result<()> {
        if values.is_empty() {
            return Ok(());
        }

        let letter = column_letter(column);
        let end_row = start_row + values.len() as u32 - 1;
        let range = format!("'{}'!{letter}{start_row}:{letter}{end_row}", self.sheet);
        let cells = values
            .iter()
            .map(|row| row.iter().map(cell_to_value).collect())
            .collect();

        self.update(range, cells)
    }
}

/// A1 letter for a 0-based column index: 0 -> A, 25 -> Z, 26 -> AA.
fn column_letter(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index;
    loop {
        letters.push(b'A' + (n % 26) as u8);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

fn cell_to_value(cell: &Cell) -> Value {
    match cell {
        Cell::Empty => Value::String(String::new()),
        Cell::Bool(b) => Value::Bool(*b),
        Cell::Number(n) => serde_json::Number::from_f64(*n)
            .map_or_else(|| Value::String(n.to_string()), Value::Number),
        Cell::Text(s) => Value::String(s.clone()),
    }
}

fn value_to_cell(value: Value) -> Cell {
    match value {
        Value::Null => Cell::Empty,
        Value::Bool(b) => Cell::Bool(b),
        Value::Number(n) => Cell::Number(n.as_f64().unwrap_or_default()),
        Value::String(s) if s.is_empty() => Cell::Empty,
        Value::String(s) => Cell::Text(s),
        other => Cell::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letter() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(6), "G");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(27), "AB");
        assert_eq!(column_letter(51), "AZ");
        assert_eq!(column_letter(52), "BA");
    }

    #[test]
    fn test_value_cell_round_trip() {
        assert_eq!(value_to_cell(Value::Bool(true)), Cell::Bool(true));
        assert_eq!(value_to_cell(Value::String(String::new())), Cell::Empty);
        assert_eq!(
            value_to_cell(Value::String("x".into())),
            Cell::Text("x".into())
        );
        assert_eq!(cell_to_value(&Cell::Empty), Value::String(String::new()));
        assert_eq!(cell_to_value(&Cell::Bool(false)), Value::Bool(false));
    }
}
