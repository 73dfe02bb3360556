use serde::Serialize;
use shared::protocol::{ChoroplethFigure, DropdownOption};

use crate::{display_result, display_wins, update_choropleth, DashboardContext};

pub const PAGE_TITLE: &str = "FIFA World Cup Winners and Runner-Ups";
pub const WINNERS_HEADING: &str = "Countries that have won the World Cup:";

pub const COUNTRY_DROPDOWN: &str = "country-dropdown";
pub const YEAR_DROPDOWN: &str = "year-dropdown";
pub const COUNTRY_WINS: &str = "country-wins";
pub const YEAR_RESULT: &str = "year-result";
pub const CHOROPLETH_MAP: &str = "choropleth-map";

pub const COUNTRY_WINS_ROUTE: &str = "/_callbacks/country-wins";
pub const YEAR_RESULT_ROUTE: &str = "/_callbacks/year-result";
pub const CHOROPLETH_MAP_ROUTE: &str = "/_callbacks/choropleth-map";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    Text,
    Figure,
}

/// One input→output wiring: when `input` changes, `route?param=value` recomputes `output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Binding {
    pub input: &'static str,
    pub param: &'static str,
    pub output: &'static str,
    pub route: &'static str,
    pub kind: OutputKind,
}

pub const BINDINGS: [Binding; 3] = [
    Binding {
        input: COUNTRY_DROPDOWN,
        param: "country",
        output: COUNTRY_WINS,
        route: COUNTRY_WINS_ROUTE,
        kind: OutputKind::Text,
    },
    Binding {
        input: YEAR_DROPDOWN,
        param: "year",
        output: YEAR_RESULT,
        route: YEAR_RESULT_ROUTE,
        kind: OutputKind::Text,
    },
    Binding {
        input: YEAR_DROPDOWN,
        param: "year",
        output: CHOROPLETH_MAP,
        route: CHOROPLETH_MAP_ROUTE,
        kind: OutputKind::Figure,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    pub id: &'static str,
    pub label: &'static str,
    pub options: Vec<DropdownOption>,
    pub value: Option<String>,
}

/// Everything the page shows on first load, outputs already computed for the default inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardLayout {
    pub title: &'static str,
    pub country: Dropdown,
    pub country_wins: String,
    pub year: Dropdown,
    pub year_result: String,
    pub figure: Option<ChoroplethFigure>,
    pub winners_heading: &'static str,
    pub winners: Vec<String>,
}

pub fn dashboard_layout(ctx: &DashboardContext) -> DashboardLayout {
    let dataset = &ctx.dataset;
    let default_country = dataset.default_country();
    let default_year = dataset.default_year();

    let country = Dropdown {
        id: COUNTRY_DROPDOWN,
        label: "Select a Country:",
        options: dataset
            .winning_countries()
            .iter()
            .map(DropdownOption::new)
            .collect(),
        value: default_country.map(str::to_string),
    };
    let year = Dropdown {
        id: YEAR_DROPDOWN,
        label: "Select a Year:",
        options: dataset.years().iter().map(DropdownOption::new).collect(),
        value: default_year.map(|y| y.to_string()),
    };

    let country_wins = default_country
        .map(|c| display_wins(ctx, c).text)
        .unwrap_or_default();
    let (year_result, figure) = match default_year {
        Some(y) => (
            display_result(ctx, y).map_or_else(|e| e.message, |r| r.text),
            update_choropleth(ctx, y).ok(),
        ),
        None => (String::new(), None),
    };

    DashboardLayout {
        title: PAGE_TITLE,
        country,
        country_wins,
        year,
        year_result,
        figure,
        winners_heading: WINNERS_HEADING,
        winners: dataset.winning_countries().to_vec(),
    }
}
