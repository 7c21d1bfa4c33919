// src/fetch/mod.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use csv::ReaderBuilder;
use reqwest::Client;
use std::io::Cursor;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;
use url::Url;

/// A fully-materialized worksheet, exactly as the provider returned it.
#[derive(Debug, Default, Clone)]
pub struct RawTable {
    /// Every row of the worksheet in sheet order. Row 0 is the header row;
    /// the remaining rows are cell strings positionally aligned to it.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Anything that can hand back a worksheet as a `RawTable`.
///
/// The production implementation talks to Google Sheets; tests substitute a
/// canned one. Retries, if any, belong behind this trait — callers never retry.
#[async_trait]
pub trait SheetSource {
    async fn get_table(&self, sheet_id: &str, worksheet: &str) -> Result<RawTable>;
}

const MAX_RETRIES: usize = 3;
const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Fetches public worksheets through the Sheets CSV export endpoint.
pub struct SheetsCsvClient {
    client: Client,
}

impl SheetsCsvClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Default for SheetsCsvClient {
    fn default() -> Self {
        Self::new(Client::new())
    }
}

#[async_trait]
impl SheetSource for SheetsCsvClient {
    async fn get_table(&self, sheet_id: &str, worksheet: &str) -> Result<RawTable> {
        let url = export_url(sheet_id, worksheet)?;
        let mut attempt = 0;

        // retry loop
        let body = loop {
            attempt += 1;

            let resp = self.client.get(url.clone()).send().await;
            match resp {
                Ok(resp) if resp.status().is_success() => match resp.text().await {
                    Ok(text) => break text,
                    Err(_) if attempt < MAX_RETRIES => {
                        sleep(RETRY_DELAY).await;
                        continue;
                    }
                    Err(e) => return Err(e.into()),
                },
                Err(_) if attempt < MAX_RETRIES => {
                    sleep(RETRY_DELAY).await;
                    continue;
                }
                Ok(resp) => return Err(anyhow::anyhow!("HTTP error: {}", resp.status())),
                Err(e) => return Err(e.into()),
            }
        };

        let table = parse_csv_table(&body)
            .with_context(|| format!("failed to parse CSV for worksheet {}", worksheet))?;
        debug!(sheet_id, worksheet, rows = table.rows.len(), "fetched worksheet");
        Ok(table)
    }
}

/// CSV export URL for one worksheet of a spreadsheet.
fn export_url(sheet_id: &str, worksheet: &str) -> Result<Url> {
    let base = format!("https://docs.google.com/spreadsheets/d/{}/gviz/tq", sheet_id);
    let mut url = Url::parse(&base).with_context(|| format!("bad sheet id: {}", sheet_id))?;
    url.query_pairs_mut()
        .append_pair("tqx", "out:csv")
        .append_pair("sheet", worksheet);
    Ok(url)
}

/// Parse a CSV body into a `RawTable`, keeping every row in order.
///
/// `flexible` so short rows (trailing blank cells the export dropped) still
/// come through; the assembly layer decides what to do with them.
pub fn parse_csv_table(body: &str) -> Result<RawTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(Cursor::new(body));

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("CSV parse error at record {}", idx))?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }
    Ok(RawTable { rows })
}
