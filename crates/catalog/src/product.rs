use serde::{Deserialize, Serialize};

use showroom_core::{DomainError, DomainResult, ValueObject};

use crate::numeric::{fmt_amount, strip_digit_separators};

/// Price per square foot.
///
/// Only used as a multiplier; any value that parses as a float is accepted,
/// negative ones included.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitPrice(f64);

impl UnitPrice {
    pub fn new(per_sqft: f64) -> Self {
        Self(per_sqft)
    }

    /// Parse user text, ignoring surrounding whitespace. Digit groups may be
    /// separated with `_`.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        strip_digit_separators(raw.trim())
            .and_then(|text| text.parse::<f64>().ok())
            .map(Self)
            .ok_or_else(|| DomainError::invalid_price(raw))
    }

    pub fn per_sqft(self) -> f64 {
        self.0
    }
}

impl ValueObject for UnitPrice {}

impl core::fmt::Display for UnitPrice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("$")?;
        fmt_amount(self.0, f)?;
        f.write_str("/sqft")
    }
}

/// Ordered color variants of a product. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Colors(Vec<String>);

impl Colors {
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(colors.into_iter().map(Into::into).collect())
    }

    /// Parse a comma separated list. Each element is trimmed and elements that
    /// end up empty are dropped, so `" , ,"` yields no colors at all.
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ValueObject for Colors {}

impl core::fmt::Display for Colors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.0.is_empty() {
            return f.write_str("N/A");
        }
        f.write_str(&self.0.join(", "))
    }
}

/// A flooring product as shown in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    unit_price: UnitPrice,
    colors: Colors,
}

impl Product {
    /// The name is stored exactly as given; blank names are allowed.
    pub fn new(name: impl Into<String>, unit_price: UnitPrice, colors: Colors) -> Self {
        Self {
            name: name.into(),
            unit_price,
            colors,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> UnitPrice {
        self.unit_price
    }

    pub fn colors(&self) -> &Colors {
        &self.colors
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - {} - Colors: {}", self.name, self.unit_price, self.colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_renders_as_listing_row() {
        let product = Product::new(
            "Hardwood",
            UnitPrice::new(5.5),
            Colors::new(["Oak", "Walnut", "Maple"]),
        );
        assert_eq!(
            product.to_string(),
            "Hardwood - $5.50/sqft - Colors: Oak, Walnut, Maple"
        );
    }

    #[test]
    fn product_without_colors_renders_na() {
        let product = Product::new("Cork", UnitPrice::new(3.0), Colors::default());
        assert_eq!(product.to_string(), "Cork - $3.00/sqft - Colors: N/A");
    }

    #[test]
    fn name_is_kept_verbatim() {
        let product = Product::new("  Slate ", UnitPrice::new(1.0), Colors::default());
        assert_eq!(product.name(), "  Slate ");
    }

    #[test]
    fn unit_price_parses_with_surrounding_whitespace() {
        let price = UnitPrice::parse(" 3.00 ").unwrap();
        assert_eq!(price.per_sqft(), 3.0);
    }

    #[test]
    fn unit_price_accepts_negative_values() {
        let price = UnitPrice::parse("-2.5").unwrap();
        assert_eq!(price.per_sqft(), -2.5);
    }

    #[test]
    fn unit_price_rejects_non_numeric_text() {
        let err = UnitPrice::parse("abc").unwrap_err();
        assert_eq!(err, DomainError::InvalidPrice("abc".to_string()));
    }

    #[test]
    fn unit_price_accepts_digit_group_separators() {
        assert_eq!(UnitPrice::parse("1_000.5").unwrap().per_sqft(), 1000.5);
        assert!(UnitPrice::parse("1__000").is_err());
    }

    #[test]
    fn nan_price_renders_lowercase() {
        let product = Product::new("X", UnitPrice::parse("nan").unwrap(), Colors::default());
        assert_eq!(product.to_string(), "X - $nan/sqft - Colors: N/A");
    }

    #[test]
    fn unit_price_rejects_empty_text() {
        assert!(UnitPrice::parse("").is_err());
    }

    #[test]
    fn colors_are_trimmed_and_empties_dropped() {
        let colors = Colors::parse("Red, Green ,, ,Blue");
        assert_eq!(colors.as_slice(), ["Red", "Green", "Blue"]);
    }

    #[test]
    fn blank_color_list_is_empty() {
        assert!(Colors::parse("").is_empty());
        assert!(Colors::parse(" , ,").is_empty());
    }

    #[test]
    fn product_serializes_with_plain_fields() {
        let product = Product::new("Vinyl", UnitPrice::new(3.0), Colors::new(["Red"]));
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Vinyl", "unit_price": 3.0, "colors": ["Red"] })
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: parsed colors are never blank and never padded.
            #[test]
            fn parsed_colors_are_trimmed_and_non_empty(raw in "[A-Za-z ,]{0,60}") {
                let colors = Colors::parse(&raw);
                for color in colors.as_slice() {
                    prop_assert!(!color.is_empty());
                    prop_assert_eq!(color.trim(), color.as_str());
                }
            }

            /// Property: joining parsed colors and parsing again is stable.
            #[test]
            fn rendered_colors_parse_back_to_themselves(
                names in proptest::collection::vec("[A-Za-z]{1,10}", 1..6)
            ) {
                let colors = Colors::new(names.clone());
                let reparsed = Colors::parse(&colors.to_string());
                prop_assert_eq!(reparsed.as_slice(), names.as_slice());
            }
        }
    }
}
