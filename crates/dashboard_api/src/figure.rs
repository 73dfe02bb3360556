use shared::{
    domain::{Role, Year},
    protocol::{ChoroplethFigure, ChoroplethTrace, ColorAxis, ColorBar, FigureLayout, Geo, MapRow, Title},
};
use tracing::debug;

use crate::region::RegionLookup;

pub const ROLE_AXIS_TITLE: &str = "World Cup Role";
const COLOR_SCALE: [&str; 2] = ["blue", "red"];
const HOVER_TEMPLATE: &str = "<b>%{hovertext}</b><br><br>Country=%{location}<br>\
    Role=%{customdata[0]}<br>World Cup Role=%{z}<extra></extra>";

pub fn figure_title(year: Year) -> String {
    format!("World Cup Winner and Runner-Up in {year}")
}

pub fn choropleth_figure(year: Year, rows: &[MapRow], regions: &dyn RegionLookup) -> ChoroplethFigure {
    let mut locations = Vec::with_capacity(rows.len());
    let mut z = Vec::with_capacity(rows.len());
    let mut hovertext = Vec::with_capacity(rows.len());
    let mut customdata = Vec::with_capacity(rows.len());

    for row in rows {
        let Some(location) = regions.resolve(&row.country) else {
            debug!(country = %row.country, %year, "no map region for country");
            continue;
        };
        locations.push(location);
        z.push(row.value);
        hovertext.push(row.country.clone());
        customdata.push(vec![row.role.label().to_string()]);
    }

    let last = (COLOR_SCALE.len() - 1) as f64;
    ChoroplethFigure {
        data: vec![ChoroplethTrace {
            kind: "choropleth".into(),
            name: String::new(),
            locations,
            locationmode: regions.location_mode().to_string(),
            z,
            hovertext,
            customdata,
            hovertemplate: HOVER_TEMPLATE.into(),
            coloraxis: "coloraxis".into(),
        }],
        layout: FigureLayout {
            title: Title::new(figure_title(year)),
            coloraxis: ColorAxis {
                colorscale: COLOR_SCALE
                    .iter()
                    .enumerate()
                    .map(|(i, color)| (i as f64 / last, color.to_string()))
                    .collect(),
                cmin: f64::from(Role::Winner.value()),
                cmax: f64::from(Role::RunnerUp.value()),
                colorbar: ColorBar {
                    title: Title::new(ROLE_AXIS_TITLE),
                    tickvals: Role::ALL.iter().map(|role| role.value()).collect(),
                    ticktext: Role::ALL.iter().map(|role| role.label().to_string()).collect(),
                },
            },
            geo: Geo {
                showframe: false,
                showcoastlines: true,
            },
        },
    }
}
