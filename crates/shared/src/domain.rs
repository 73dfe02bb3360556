use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! key_newtype {
    ($name:ident, $inner:ty) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

key_newtype!(Year, i32);

/// One tournament edition after projection: who won the final and who lost it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalsRecord {
    pub year: Year,
    pub winner: String,
    pub runner_up: String,
}

impl FinalsRecord {
    pub fn new(year: i32, winner: impl Into<String>, runner_up: impl Into<String>) -> Self {
        Self {
            year: Year(year),
            winner: winner.into(),
            runner_up: runner_up.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Winner")]
    Winner,
    #[serde(rename = "Runner-Up")]
    RunnerUp,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Winner, Role::RunnerUp];

    pub fn label(self) -> &'static str {
        match self {
            Role::Winner => "Winner",
            Role::RunnerUp => "Runner-Up",
        }
    }

    /// Categorical value plotted on the map.
    pub fn value(self) -> u8 {
        match self {
            Role::Winner => 1,
            Role::RunnerUp => 2,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
