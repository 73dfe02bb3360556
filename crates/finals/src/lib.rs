//! Loading and cleaning of the FIFA World Cup finals table.
//!
//! The pipeline runs once at startup: fetch the page, pick the finals table,
//! name its columns, project to year/winner/runner-up and normalize country
//! names. The result is an immutable [`Dataset`].

pub mod error;
pub mod loader;
pub mod normalize;
pub mod source;
pub mod table;

pub use error::LoadError;
pub use loader::{
    assign_columns, load_dataset, load_dataset_from, FinalsTable, FINALS_COLUMNS,
    FINALS_TABLE_INDEX, FINALS_URL,
};
pub use normalize::{normalize_name, normalize_records, winning_countries, Dataset, NAME_RULES};
pub use source::{HtmlTableSource, HttpTableSource, TableSource};
pub use table::{parse_tables, RawTable};
