use serde::{Deserialize, Serialize};

use crate::domain::{Role, Year};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

impl DropdownOption {
    pub fn new(value: impl ToString) -> Self {
        let value = value.to_string();
        Self {
            label: value.clone(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinsResponse {
    pub country: String,
    pub wins: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearResultResponse {
    pub year: Year,
    pub winner: String,
    pub runner_up: String,
    pub text: String,
}

/// One row of the two-row table behind the map: a country and the role it played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapRow {
    pub country: String,
    pub role: Role,
    pub value: u8,
}

/// Plotly figure JSON, consumed as-is by `Plotly.react` on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoroplethFigure {
    pub data: Vec<ChoroplethTrace>,
    pub layout: FigureLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoroplethTrace {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub locations: Vec<String>,
    pub locationmode: String,
    pub z: Vec<u8>,
    pub hovertext: Vec<String>,
    pub customdata: Vec<Vec<String>>,
    pub hovertemplate: String,
    pub coloraxis: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureLayout {
    pub title: Title,
    pub coloraxis: ColorAxis,
    pub geo: Geo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorAxis {
    pub colorscale: Vec<(f64, String)>,
    pub cmin: f64,
    pub cmax: f64,
    pub colorbar: ColorBar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorBar {
    pub title: Title,
    pub tickvals: Vec<u8>,
    pub ticktext: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geo {
    pub showframe: bool,
    pub showcoastlines: bool,
}
