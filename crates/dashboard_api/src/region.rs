/// Maps a country name from the finals table to a map location understood by the renderer.
pub trait RegionLookup: Send + Sync {
    /// How the renderer should interpret the resolved locations.
    fn location_mode(&self) -> &str;

    /// `None` leaves the country off the map.
    fn resolve(&self, country: &str) -> Option<String>;
}

/// Hands names to plotly unchanged and lets its "country names" matching decide.
/// Names plotly does not know (Czechoslovakia, for one) simply stay uncoloured.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountryNames;

impl RegionLookup for CountryNames {
    fn location_mode(&self) -> &str {
        "country names"
    }

    fn resolve(&self, country: &str) -> Option<String> {
        let country = country.trim();
        (!country.is_empty()).then(|| country.to_string())
    }
}
