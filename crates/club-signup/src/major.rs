//! Major codes submitted by the join form.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Major {
    FineArts,
    Healthcare,
    Stem,
    DataAnalytics,
    ComputerScience,
    NotSpecified,
}

impl Major {
    /// Map a form code (`fa`, `hc`, `stem`, `da`, `cs`). Missing or unknown
    /// codes are [`Major::NotSpecified`].
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("fa") => Self::FineArts,
            Some("hc") => Self::Healthcare,
            Some("stem") => Self::Stem,
            Some("da") => Self::DataAnalytics,
            Some("cs") => Self::ComputerScience,
            _ => Self::NotSpecified,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FineArts => "Fine Arts",
            Self::Healthcare => "Healthcare",
            Self::Stem => "STEM",
            Self::DataAnalytics => "Data Analytics",
            Self::ComputerScience => "Computer Science",
            Self::NotSpecified => "Not specified",
        }
    }
}

impl fmt::Display for Major {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
