//! The four extraction categories and their fixed presentation order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ExtractError;

/// A single extraction target.
///
/// Variant order is the canonical iteration order. `Ord` is derived from it, so any
/// ordered collection keyed by `Category` presents results as
/// `phone, credit_card, hashtag, currency`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Phone,
    CreditCard,
    Hashtag,
    Currency,
}

impl Category {
    /// All categories, in the fixed iteration order.
    pub const ALL: [Category; 4] = [
        Category::Phone,
        Category::CreditCard,
        Category::Hashtag,
        Category::Currency,
    ];

    /// The snake_case identifier used as the result key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Phone => "phone",
            Category::CreditCard => "credit_card",
            Category::Hashtag => "hashtag",
            Category::Currency => "currency",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "phone" => Ok(Category::Phone),
            "credit_card" => Ok(Category::CreditCard),
            "hashtag" => Ok(Category::Hashtag),
            "currency" => Ok(Category::Currency),
            other => Err(ExtractError::UnknownCategory(other.to_string())),
        }
    }
}
