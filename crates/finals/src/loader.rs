use shared::domain::{FinalsRecord, Year};
use tracing::{debug, info, warn};
use url::Url;

use crate::{error::LoadError, normalize::Dataset, source::TableSource, table::RawTable};

pub const FINALS_URL: &str = "https://en.wikipedia.org/wiki/List_of_FIFA_World_Cup_finals";

/// Position of the finals table among all tables on the page.
pub const FINALS_TABLE_INDEX: usize = 3;

pub const FINALS_COLUMNS: [&str; 8] = [
    "Year",
    "Winner",
    "Score",
    "Runner-Up",
    "Venue",
    "Location",
    "Attendance",
    "Ref",
];

const YEAR: usize = 0;
const WINNER: usize = 1;
const RUNNER_UP: usize = 3;

/// The finals table with its columns renamed to [`FINALS_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalsTable {
    source_headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl FinalsTable {
    /// Headers as the page labelled them, before renaming.
    pub fn source_headers(&self) -> &[String] {
        &self.source_headers
    }

    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &str> + '_> {
        let index = FINALS_COLUMNS.iter().position(|c| *c == name)?;
        Some(self.rows.iter().map(move |row| row[index].as_str()))
    }

    /// Keeps Year, Winner and Runner-Up. Finals that have not been played yet are dropped.
    pub fn project(&self) -> Result<Vec<FinalsRecord>, LoadError> {
        let mut records: Vec<FinalsRecord> = Vec::with_capacity(self.rows.len());
        for (index, row) in self.rows.iter().enumerate() {
            let winner = row[WINNER].trim();
            let runner_up = row[RUNNER_UP].trim();
            if winner.is_empty() && runner_up.is_empty() {
                debug!(row = index, year = %row[YEAR], "skipping undecided final");
                continue;
            }

            let year = parse_year(&row[YEAR]).ok_or_else(|| LoadError::InvalidYear {
                row: index,
                value: row[YEAR].clone(),
            })?;
            if records.iter().any(|r| r.year == year) {
                return Err(LoadError::DuplicateYear(year));
            }

            records.push(FinalsRecord {
                year,
                winner: winner.to_string(),
                runner_up: runner_up.to_string(),
            });
        }
        Ok(records)
    }
}

/// Renames the columns positionally; the table must have exactly as many columns as names.
pub fn assign_columns(raw: RawTable) -> Result<FinalsTable, LoadError> {
    let found = raw.width();
    if found != FINALS_COLUMNS.len() {
        return Err(LoadError::ColumnCount {
            expected: FINALS_COLUMNS.len(),
            found,
        });
    }
    let mut rows = raw.rows;
    for row in &mut rows {
        row.resize(FINALS_COLUMNS.len(), String::new());
    }
    Ok(FinalsTable {
        source_headers: raw.headers,
        rows,
    })
}

fn parse_year(value: &str) -> Option<Year> {
    let digits: String = value
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok().map(Year)
}

pub async fn load_dataset(source: &dyn TableSource) -> Result<Dataset, LoadError> {
    let url = Url::parse(FINALS_URL).map_err(|source| LoadError::InvalidUrl {
        url: FINALS_URL.to_string(),
        source,
    })?;
    load_dataset_from(source, &url).await
}

pub async fn load_dataset_from(source: &dyn TableSource, url: &Url) -> Result<Dataset, LoadError> {
    let mut tables = source.fetch_tables(url).await?;
    let found = tables.len();
    if found <= FINALS_TABLE_INDEX {
        return Err(LoadError::MissingTable {
            index: FINALS_TABLE_INDEX,
            found,
        });
    }
    let raw = tables.swap_remove(FINALS_TABLE_INDEX);
    debug!(headers = ?raw.headers, rows = raw.rows.len(), "selected finals table");

    let table = assign_columns(raw)?;
    if table.source_headers().is_empty() {
        warn!("finals table has no header row; columns assigned by position only");
    }

    let records = table.project()?;
    if records.is_empty() {
        return Err(LoadError::EmptyDataset);
    }

    let dataset = Dataset::new(records);
    info!(
        editions = dataset.records().len(),
        winners = dataset.winning_countries().len(),
        "finals dataset ready"
    );
    Ok(dataset)
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
