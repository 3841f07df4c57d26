use std::fmt;
use std::str::FromStr;

use crate::ParseNameError;

/// Record attribute that can be used as a list filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    /// Multi-valued, comma separated
    Genre,
    Platform,
    Status,
}

impl FilterField {
    pub const ALL: [FilterField; 3] = [FilterField::Genre, FilterField::Platform, FilterField::Status];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Genre => "genre",
            FilterField::Platform => "platform",
            FilterField::Status => "status",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterField {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "genre" => Ok(FilterField::Genre),
            "platform" => Ok(FilterField::Platform),
            "status" => Ok(FilterField::Status),
            _ => Err(ParseNameError {
                kind: "filter field",
                value: s.to_string(),
                expected: "genre, platform, status",
            }),
        }
    }
}
