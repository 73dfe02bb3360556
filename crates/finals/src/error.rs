use shared::domain::Year;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid source url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("expected at least {} tables on the page, found {found}", .index + 1)]
    MissingTable { index: usize, found: usize },
    #[error("expected {expected} columns in the finals table, found {found}")]
    ColumnCount { expected: usize, found: usize },
    #[error("row {row}: cannot read a year from '{value}'")]
    InvalidYear { row: usize, value: String },
    #[error("year {0} appears more than once in the finals table")]
    DuplicateYear(Year),
    #[error("finals table contains no decided editions")]
    EmptyDataset,
}
