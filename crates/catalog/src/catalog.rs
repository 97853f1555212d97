//! The in-memory catalog: an ordered list of products addressed by position.

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

use showroom_core::{DomainError, DomainResult, ValueObject};

use crate::estimate::{Cost, SquareFootage};
use crate::numeric::strip_digit_separators;
use crate::product::{Colors, Product, UnitPrice};

/// A 1-based catalog position as typed by the user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(i64);

impl Selection {
    pub fn new(number: i64) -> Self {
        Self(number)
    }

    /// Parse user text as a signed integer, ignoring surrounding whitespace.
    ///
    /// Integers beyond `i64` saturate instead of failing: they are still
    /// numbers, so the range check in [`Selection::resolve`] rejects them.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let text = strip_digit_separators(raw.trim())
            .ok_or_else(|| DomainError::invalid_input(raw))?;
        match text.parse::<i64>() {
            Ok(number) => Ok(Self(number)),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => Ok(Self(i64::MAX)),
                IntErrorKind::NegOverflow => Ok(Self(i64::MIN)),
                _ => Err(DomainError::invalid_input(raw)),
            },
        }
    }

    pub fn number(self) -> i64 {
        self.0
    }

    /// Map to a 0-based index within `[0, len)`.
    pub fn resolve(self, len: usize) -> DomainResult<usize> {
        self.0
            .checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
            .filter(|&index| index < len)
            .ok_or_else(|| DomainError::invalid_option(self.0, len))
    }
}

impl ValueObject for Selection {}

/// Ordered product list. Insertion order defines the menu numbering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The catalog every session starts with.
    pub fn seeded() -> Self {
        Self {
            products: vec![
                Product::new(
                    "Hardwood",
                    UnitPrice::new(5.50),
                    Colors::new(["Oak", "Walnut", "Maple"]),
                ),
                Product::new(
                    "Carpet",
                    UnitPrice::new(2.25),
                    Colors::new(["Beige", "Gray", "Blue"]),
                ),
                Product::new(
                    "Tile",
                    UnitPrice::new(4.00),
                    Colors::new(["White", "Black", "Marble"]),
                ),
            ],
        }
    }

    /// Append at the end. Returns the 1-based number the product is listed under.
    pub fn add(&mut self, product: Product) -> usize {
        self.products.push(product);
        self.products.len()
    }

    pub fn get(&self, selection: Selection) -> DomainResult<&Product> {
        let index = selection.resolve(self.products.len())?;
        Ok(&self.products[index])
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Numbered listing, header first. An empty catalog lists only the header.
    pub fn listing(&self) -> Listing<'_> {
        Listing { catalog: self }
    }

    /// Estimate the cost of covering `area` with the selected product.
    pub fn estimate(&self, selection: Selection, area: SquareFootage) -> DomainResult<Cost> {
        if self.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }
        let product = self.get(selection)?;
        Ok(Cost::estimate(area, product.unit_price()))
    }
}

/// Display adapter for [`Catalog::listing`].
pub struct Listing<'a> {
    catalog: &'a Catalog,
}

impl core::fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f)?;
        writeln!(f, "Flooring Options:")?;
        for (number, product) in self.catalog.iter().enumerate() {
            writeln!(f, "{}. {product}", number + 1)?;
        }
        Ok(())
    }
}
