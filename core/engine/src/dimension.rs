//! FILENAME: core/engine/src/dimension.rs
//! PURPOSE: The closed set of filterable columns and numeric measures.
//! CONTEXT: Columns are addressed by enum, never by free-form string. Names
//! arriving from source files, configs or UI events are parsed once at the
//! boundary and rejected there if unknown.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column both source tables are joined on.
pub const JOIN_KEY: &str = "Order ID";

// ============================================================================
// DIMENSION
// ============================================================================

/// A categorical column that charts group by and clicks filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "Sub-Category", alias = "Sub Category")]
    SubCategory,
    Category,
    State,
    City,
    #[serde(alias = "Customer Name")]
    CustomerName,
    PaymentMode,
}

impl Dimension {
    pub const COUNT: usize = 6;

    pub const ALL: [Dimension; Dimension::COUNT] = [
        Dimension::SubCategory,
        Dimension::Category,
        Dimension::State,
        Dimension::City,
        Dimension::CustomerName,
        Dimension::PaymentMode,
    ];

    /// Position of this dimension in per-record storage.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical column header.
    pub fn column_name(self) -> &'static str {
        match self {
            Dimension::SubCategory => "Sub-Category",
            Dimension::Category => "Category",
            Dimension::State => "State",
            Dimension::City => "City",
            Dimension::CustomerName => "CustomerName",
            Dimension::PaymentMode => "PaymentMode",
        }
    }

    /// Header spellings found in raw exports.
    fn aliases(self) -> &'static [&'static str] {
        match self {
            Dimension::SubCategory => &["Sub Category"],
            Dimension::CustomerName => &["Customer Name"],
            _ => &[],
        }
    }

    /// Resolves a header (canonical or alias) to a dimension.
    pub fn from_column_name(name: &str) -> Option<Dimension> {
        let name = name.trim();
        Dimension::ALL
            .into_iter()
            .find(|d| d.column_name() == name || d.aliases().contains(&name))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Returned when a string names no known dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDimension(pub String);

impl fmt::Display for UnknownDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown dimension '{}'", self.0)
    }
}

impl std::error::Error for UnknownDimension {}

impl FromStr for Dimension {
    type Err = UnknownDimension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::from_column_name(s).ok_or_else(|| UnknownDimension(s.to_string()))
    }
}

// ============================================================================
// MEASURE
// ============================================================================

/// A numeric column that charts sum and KPIs total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Measure {
    Amount,
    Profit,
    Quantity,
}

impl Measure {
    pub const COUNT: usize = 3;

    pub const ALL: [Measure; Measure::COUNT] = [Measure::Amount, Measure::Profit, Measure::Quantity];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn column_name(self) -> &'static str {
        match self {
            Measure::Amount => "Amount",
            Measure::Profit => "Profit",
            Measure::Quantity => "Quantity",
        }
    }

    pub fn from_column_name(name: &str) -> Option<Measure> {
        let name = name.trim();
        Measure::ALL.into_iter().find(|m| m.column_name() == name)
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMeasure(pub String);

impl fmt::Display for UnknownMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown measure '{}'", self.0)
    }
}

impl std::error::Error for UnknownMeasure {}

impl FromStr for Measure {
    type Err = UnknownMeasure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Measure::from_column_name(s).ok_or_else(|| UnknownMeasure(s.to_string()))
    }
}
