//! The all-string working copy of a product that backs the form
//! inputs, plus its projection to and from the typed record.
//!
//! Inputs hold strings; the record is typed. Seeding renders absent
//! record fields as empty strings, and a submit only turns back into a
//! record after the whole schema passes.

use jiff::civil::Date;
use payloads::{
    Product, ProductId,
    validation::{
        parse_date, parse_decimal, parse_text, validate_acquisition,
        validate_barcode, validate_name, validate_number,
    },
};
use rust_decimal::Decimal;

/// The scalar form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
    Value,
    Height,
    Width,
    Length,
    Weight,
    Code,
    Acquisition,
}

impl Field {
    /// The html `name`/`id` the input is bound by.
    pub fn html_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Value => "value",
            Self::Height => "height",
            Self::Width => "width",
            Self::Length => "length",
            Self::Weight => "weight",
            Self::Code => "code",
            Self::Acquisition => "acquisition",
        }
    }
}

/// Working copy of the scalar fields, exactly as the inputs hold them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFormValues {
    pub name: String,
    pub description: String,
    pub value: String,
    pub height: String,
    pub width: String,
    pub length: String,
    pub weight: String,
    pub code: String,
    pub acquisition: String,
}

impl ProductFormValues {
    /// Seed the form from a resolved record. `None` (no record matched
    /// the route id) seeds blank defaults; that is tolerated, not an
    /// error.
    pub fn from_product(product: Option<&Product>) -> Self {
        let Some(p) = product else {
            return Self::default();
        };
        let decimal = |d: Option<Decimal>| {
            d.map(|d| d.to_string()).unwrap_or_default()
        };
        Self {
            name: p.name.clone(),
            description: p.description.clone().unwrap_or_default(),
            value: decimal(p.value),
            height: decimal(p.height),
            width: decimal(p.width),
            length: decimal(p.length),
            weight: decimal(p.weight),
            code: p.code.clone().unwrap_or_default(),
            acquisition: p
                .acquisition
                .map(|d| d.to_string())
                .unwrap_or_default(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::Value => &self.value,
            Field::Height => &self.height,
            Field::Width => &self.width,
            Field::Length => &self.length,
            Field::Weight => &self.weight,
            Field::Code => &self.code,
            Field::Acquisition => &self.acquisition,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Description => &mut self.description,
            Field::Value => &mut self.value,
            Field::Height => &mut self.height,
            Field::Width => &mut self.width,
            Field::Length => &mut self.length,
            Field::Weight => &mut self.weight,
            Field::Code => &mut self.code,
            Field::Acquisition => &mut self.acquisition,
        };
        *slot = value;
    }

    /// Run the whole schema over the current values. `today` bounds the
    /// acquisition date.
    pub fn validate(
        &self,
        today: Date,
    ) -> Result<ValidatedProduct, FormErrors> {
        let errors = FormErrors {
            name: validate_name(&self.name).error_message(),
            value: validate_number(&self.value, true).error_message(),
            height: validate_number(&self.height, false).error_message(),
            width: validate_number(&self.width, false).error_message(),
            length: validate_number(&self.length, false).error_message(),
            weight: validate_number(&self.weight, false).error_message(),
            code: validate_barcode(&self.code).error_message(),
            acquisition: validate_acquisition(&self.acquisition, today)
                .error_message(),
        };
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ValidatedProduct {
            name: self.name.trim().to_string(),
            description: parse_text(&self.description),
            value: parse_decimal(&self.value),
            height: parse_decimal(&self.height),
            width: parse_decimal(&self.width),
            length: parse_decimal(&self.length),
            weight: parse_decimal(&self.weight),
            code: parse_text(&self.code),
            acquisition: parse_date(&self.acquisition),
        })
    }
}

/// Inline error message per field, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    name: Option<&'static str>,
    value: Option<&'static str>,
    height: Option<&'static str>,
    width: Option<&'static str>,
    length: Option<&'static str>,
    weight: Option<&'static str>,
    code: Option<&'static str>,
    acquisition: Option<&'static str>,
}

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Description => None,
            Field::Value => self.value,
            Field::Height => self.height,
            Field::Width => self.width,
            Field::Length => self.length,
            Field::Weight => self.weight,
            Field::Code => self.code,
            Field::Acquisition => self.acquisition,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.value.is_none()
            && self.height.is_none()
            && self.width.is_none()
            && self.length.is_none()
            && self.weight.is_none()
            && self.code.is_none()
            && self.acquisition.is_none()
    }
}

/// Scalar fields after a successful validation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProduct {
    pub name: String,
    pub description: Option<String>,
    pub value: Option<Decimal>,
    pub height: Option<Decimal>,
    pub width: Option<Decimal>,
    pub length: Option<Decimal>,
    pub weight: Option<Decimal>,
    pub code: Option<String>,
    pub acquisition: Option<Date>,
}

impl ValidatedProduct {
    /// Assemble the full replacement record. `id` is the resolved
    /// record's own id; `image` and `category` come from the view's
    /// local editable state.
    pub fn into_product(
        self,
        id: ProductId,
        image: Option<String>,
        category: Vec<String>,
    ) -> Product {
        Product {
            id,
            image,
            name: self.name,
            description: self.description,
            value: self.value,
            height: self.height,
            width: self.width,
            length: self.length,
            weight: self.weight,
            code: self.code,
            acquisition: self.acquisition,
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn sample_product() -> Product {
        Product {
            id: ProductId::new(),
            image: Some("https://example.com/drill.png".to_string()),
            name: "Drill press".to_string(),
            description: Some("Bench-top, 12 speed".to_string()),
            value: Some(Decimal::new(24999, 2)),
            height: Some(Decimal::new(84, 0)),
            width: None,
            length: None,
            weight: Some(Decimal::new(305, 1)),
            code: Some("7891000100103".to_string()),
            acquisition: Some(date(2023, 11, 2)),
            category: vec!["tools".to_string(), "workshop".to_string()],
        }
    }

    #[test]
    fn test_seeding_from_resolved_record() {
        let product = sample_product();
        let values = ProductFormValues::from_product(Some(&product));

        assert_eq!(values.name, "Drill press");
        assert_eq!(values.description, "Bench-top, 12 speed");
        assert_eq!(values.value, "249.99");
        assert_eq!(values.height, "84");
        // Absent fields render as empty strings.
        assert_eq!(values.width, "");
        assert_eq!(values.length, "");
        assert_eq!(values.weight, "30.5");
        assert_eq!(values.code, "7891000100103");
        assert_eq!(values.acquisition, "2023-11-02");
    }

    #[test]
    fn test_seeding_without_a_match_is_blank() {
        let values = ProductFormValues::from_product(None);
        assert_eq!(values, ProductFormValues::default());
    }

    #[test]
    fn test_required_fields_block_validation() {
        let today = date(2024, 6, 15);
        let values = ProductFormValues::default();

        let errors = values.validate(today).unwrap_err();
        assert!(errors.get(Field::Name).is_some());
        assert!(errors.get(Field::Value).is_some());
        assert!(errors.get(Field::Height).is_none());
    }

    #[test]
    fn test_bad_optional_fields_block_validation() {
        let today = date(2024, 6, 15);
        let mut values = ProductFormValues::default();
        values.name = "Ladder".to_string();
        values.value = "15".to_string();
        values.weight = "heavy".to_string();
        values.acquisition = "2030-01-01".to_string();

        let errors = values.validate(today).unwrap_err();
        assert!(errors.get(Field::Weight).is_some());
        assert!(errors.get(Field::Acquisition).is_some());
        assert!(errors.get(Field::Name).is_none());
    }

    #[test]
    fn test_round_trip_produces_full_replacement_record() {
        let today = date(2024, 6, 15);
        let product = sample_product();
        let id = product.id;

        let values = ProductFormValues::from_product(Some(&product));
        let validated = values.validate(today).unwrap();
        let rebuilt = validated.into_product(
            id,
            product.image.clone(),
            product.category.clone(),
        );

        assert_eq!(rebuilt, product);
    }

    #[test]
    fn test_submit_payload_uses_local_image_and_tags() {
        let today = date(2024, 6, 15);
        let mut values = ProductFormValues::default();
        values.name = "Ladder".to_string();
        values.value = "15.00".to_string();

        let id = ProductId::new();
        let validated = values.validate(today).unwrap();
        let product = validated.into_product(
            id,
            Some("data:image/png;base64,AAAA".to_string()),
            vec!["garage".to_string()],
        );

        assert_eq!(product.id, id);
        assert_eq!(
            product.image.as_deref(),
            Some("data:image/png;base64,AAAA")
        );
        assert_eq!(product.category, vec!["garage".to_string()]);
        assert_eq!(product.value, Some(Decimal::new(1500, 2)));
        assert_eq!(product.description, None);
    }

    #[test]
    fn test_set_get_by_field() {
        let mut values = ProductFormValues::default();
        values.set(Field::Width, "12".to_string());
        assert_eq!(values.get(Field::Width), "12");
        assert_eq!(values.get(Field::Height), "");
    }
}
