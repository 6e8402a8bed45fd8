use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod validation;

/// Upper bound on the number of category tags per product.
pub const MAX_CATEGORY_TAGS: usize = 6;
pub const PRODUCT_NAME_MAX_LEN: usize = 255;

/// Id type wrapper helps ensure we don't mix up ids for different records.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::str::FromStr for ProductId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A single inventory record.
///
/// Scalar fields are optional; the edit form renders absent fields as
/// empty strings and only writes them back once they parse. `image` is
/// either a URL or a `data:` URL produced by the image capture
/// pipeline. `category` is an ordered list of free-text tags, capped at
/// [`MAX_CATEGORY_TAGS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub image: Option<String>,
    pub name: String,
    pub description: Option<String>,
    /// Price in dollars.
    pub value: Option<Decimal>,
    /// Measurements in centimeters.
    pub height: Option<Decimal>,
    pub width: Option<Decimal>,
    pub length: Option<Decimal>,
    /// Weight in kilograms.
    pub weight: Option<Decimal>,
    /// Numeric barcode, stored as its digit string.
    pub code: Option<String>,
    pub acquisition: Option<Date>,
    pub category: Vec<String>,
}
