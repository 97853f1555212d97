//! Project cost estimate: area times unit price.

use serde::{Deserialize, Serialize};

use showroom_core::{DomainError, DomainResult, ValueObject};

use crate::numeric::{fmt_amount, strip_digit_separators};
use crate::product::UnitPrice;

/// Area to cover, in square feet. Negative values are accepted.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareFootage(f64);

impl SquareFootage {
    pub fn new(sqft: f64) -> Self {
        Self(sqft)
    }

    /// Parse user text, ignoring surrounding whitespace. Digit groups may be
    /// separated with `_`.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        strip_digit_separators(raw.trim())
            .and_then(|text| text.parse::<f64>().ok())
            .map(Self)
            .ok_or_else(|| DomainError::invalid_input(raw))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl ValueObject for SquareFootage {}

/// Estimated project cost. Rounded only when displayed.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub fn estimate(area: SquareFootage, price: UnitPrice) -> Self {
        Self(area.value() * price.per_sqft())
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

impl ValueObject for Cost {}

impl core::fmt::Display for Cost {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("$")?;
        fmt_amount(self.0, f)
    }
}
