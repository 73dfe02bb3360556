//! The dashboard's three reactive handlers and the page layout they fill.
//!
//! Every handler is a pure function of the shared [`Dataset`] and its one input,
//! so the server only has to route an input change to the matching function.

use std::sync::Arc;

use finals::Dataset;
use shared::{
    domain::{FinalsRecord, Role, Year},
    error::ApiError,
    protocol::{ChoroplethFigure, MapRow, WinsResponse, YearResultResponse},
};

pub mod figure;
pub mod layout;
pub mod region;

pub use figure::{choropleth_figure, figure_title};
pub use layout::{dashboard_layout, Binding, DashboardLayout, Dropdown, OutputKind, BINDINGS};
pub use region::{CountryNames, RegionLookup};

#[derive(Clone)]
pub struct DashboardContext {
    pub dataset: Arc<Dataset>,
    pub regions: Arc<dyn RegionLookup>,
}

impl DashboardContext {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
            regions: Arc::new(CountryNames),
        }
    }

    pub fn with_regions(mut self, regions: impl RegionLookup + 'static) -> Self {
        self.regions = Arc::new(regions);
        self
    }
}

pub fn display_wins(ctx: &DashboardContext, country: &str) -> WinsResponse {
    let wins = ctx.dataset.wins_for(country);
    WinsResponse {
        country: country.to_string(),
        wins,
        text: format!("{country} has won the World Cup {wins} times."),
    }
}

pub fn display_result(ctx: &DashboardContext, year: Year) -> Result<YearResultResponse, ApiError> {
    let record = final_for(ctx, year)?;
    Ok(YearResultResponse {
        year,
        winner: record.winner.clone(),
        runner_up: record.runner_up.clone(),
        text: format!(
            "In {year}, the Winner was {} and the Runner-Up was {}.",
            record.winner, record.runner_up
        ),
    })
}

pub fn update_choropleth(ctx: &DashboardContext, year: Year) -> Result<ChoroplethFigure, ApiError> {
    let record = final_for(ctx, year)?;
    let rows = map_rows(record);
    Ok(choropleth_figure(year, &rows, ctx.regions.as_ref()))
}

/// The two-row table the map is drawn from: winner first, runner-up second.
pub fn map_rows(record: &FinalsRecord) -> [MapRow; 2] {
    [
        (record.winner.as_str(), Role::Winner),
        (record.runner_up.as_str(), Role::RunnerUp),
    ]
    .map(|(country, role)| MapRow {
        country: country.to_string(),
        role,
        value: role.value(),
    })
}

pub fn unknown_year(year: Year) -> ApiError {
    ApiError::not_found(format!("No World Cup final recorded for {year}."))
}

fn final_for(ctx: &DashboardContext, year: Year) -> Result<&FinalsRecord, ApiError> {
    ctx.dataset.record_for(year).ok_or_else(|| unknown_year(year))
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
