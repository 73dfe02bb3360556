use shared::domain::{FinalsRecord, Year};

/// Historical names folded into their current name so wins are counted once per country.
/// Exact, whole-value matches only.
pub const NAME_RULES: &[(&str, &str)] = &[("West Germany", "Germany")];

pub fn normalize_name(name: &str) -> &str {
    NAME_RULES
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
        .unwrap_or(name)
}

pub fn normalize_records(records: Vec<FinalsRecord>) -> Vec<FinalsRecord> {
    records
        .into_iter()
        .map(|record| FinalsRecord {
            year: record.year,
            winner: normalize_name(&record.winner).to_string(),
            runner_up: normalize_name(&record.runner_up).to_string(),
        })
        .collect()
}

/// Distinct non-empty winners, in the order they first appear.
pub fn winning_countries(records: &[FinalsRecord]) -> Vec<String> {
    let mut countries: Vec<String> = Vec::new();
    for record in records {
        let winner = &record.winner;
        if winner.trim().is_empty() || countries.contains(winner) {
            continue;
        }
        countries.push(winner.clone());
    }
    countries
}

/// The cleaned finals table and what the dashboard derives from it. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<FinalsRecord>,
    winning_countries: Vec<String>,
    years: Vec<Year>,
}

impl Dataset {
    pub fn new(records: Vec<FinalsRecord>) -> Self {
        let records = normalize_records(records);
        let winning_countries = winning_countries(&records);
        let mut years: Vec<Year> = Vec::with_capacity(records.len());
        for record in &records {
            if !years.contains(&record.year) {
                years.push(record.year);
            }
        }
        Self {
            records,
            winning_countries,
            years,
        }
    }

    pub fn records(&self) -> &[FinalsRecord] {
        &self.records
    }

    pub fn winning_countries(&self) -> &[String] {
        &self.winning_countries
    }

    /// Distinct years in table order.
    pub fn years(&self) -> &[Year] {
        &self.years
    }

    pub fn wins_for(&self, country: &str) -> usize {
        self.records
            .iter()
            .filter(|record| record.winner == country)
            .count()
    }

    pub fn record_for(&self, year: Year) -> Option<&FinalsRecord> {
        self.records.iter().find(|record| record.year == year)
    }

    pub fn default_country(&self) -> Option<&str> {
        self.winning_countries.first().map(String::as_str)
    }

    /// Year of the first row, which is not necessarily the earliest one.
    pub fn default_year(&self) -> Option<Year> {
        self.records.first().map(|record| record.year)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
