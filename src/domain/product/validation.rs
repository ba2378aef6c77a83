//! Product request schemas

use serde_json::{Number, Value};
use thiserror::Error;

use crate::domain::payload::{present, required};
use crate::domain::DomainError;

/// Errors raised while reading a product request body
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProductValidationError {
    #[error("Please provide all the required parameters..")]
    MissingParameters,

    #[error("Price and quantity must be valid numbers..")]
    NonNumeric,

    #[error("Name and image must be text..")]
    NonText,
}

/// Validated body of `POST /product`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: Number,
    pub quantity: Number,
    pub image: String,
}

impl CreateProductRequest {
    /// Presence of all four fields is checked before any type check, so a
    /// body missing `image` with a string price reports the missing field.
    /// `0` counts as missing just like an absent key.
    pub fn from_payload(payload: &Value) -> Result<Self, ProductValidationError> {
        let (Some(name), Some(price), Some(quantity), Some(image)) = (
            required(payload, "name"),
            required(payload, "price"),
            required(payload, "quantity"),
            required(payload, "image"),
        ) else {
            return Err(ProductValidationError::MissingParameters);
        };

        let (Value::Number(price), Value::Number(quantity)) = (price, quantity) else {
            return Err(ProductValidationError::NonNumeric);
        };

        let (Some(name), Some(image)) = (name.as_str(), image.as_str()) else {
            return Err(ProductValidationError::NonText);
        };

        Ok(Self {
            name: name.to_string(),
            price: price.clone(),
            quantity: quantity.clone(),
            image: image.to_string(),
        })
    }
}

/// Validated body of `PUT /product/{id}`; every field is optional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<Number>,
    pub quantity: Option<Number>,
    pub image: Option<String>,
}

impl UpdateProductRequest {
    /// Fields that are supplied must carry the same types `create` demands.
    /// Anything else in the body, `id` included, is ignored.
    pub fn from_payload(payload: &Value) -> Result<Self, ProductValidationError> {
        Ok(Self {
            name: optional_text(payload, "name")?,
            price: optional_number(payload, "price")?,
            quantity: optional_number(payload, "quantity")?,
            image: optional_text(payload, "image")?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.quantity.is_none() && self.image.is_none()
    }
}

fn optional_number(payload: &Value, name: &str) -> Result<Option<Number>, ProductValidationError> {
    match present(payload, name) {
        None => Ok(None),
        Some(Value::Number(n)) => Ok(Some(n.clone())),
        Some(_) => Err(ProductValidationError::NonNumeric),
    }
}

fn optional_text(payload: &Value, name: &str) -> Result<Option<String>, ProductValidationError> {
    match present(payload, name) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ProductValidationError::NonText),
    }
}

impl From<ProductValidationError> for DomainError {
    fn from(err: ProductValidationError) -> Self {
        DomainError::validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_body() -> Value {
        json!({
            "name": "Lamp",
            "price": 25.0,
            "quantity": 4,
            "image": "lamp.jpg"
        })
    }

    #[test]
    fn test_create_valid() {
        let request = CreateProductRequest::from_payload(&full_body()).unwrap();
        assert_eq!(request.name, "Lamp");
        assert_eq!(request.price, Number::from_f64(25.0).unwrap());
        assert_eq!(request.quantity, Number::from(4));
        assert_eq!(request.image, "lamp.jpg");
    }

    #[test]
    fn test_create_missing_field() {
        let mut body = full_body();
        body.as_object_mut().unwrap().remove("image");

        assert_eq!(
            CreateProductRequest::from_payload(&body),
            Err(ProductValidationError::MissingParameters)
        );
    }

    #[test]
    fn test_create_empty_name_is_missing() {
        let mut body = full_body();
        body["name"] = json!("");

        assert_eq!(
            CreateProductRequest::from_payload(&body),
            Err(ProductValidationError::MissingParameters)
        );
    }

    #[test]
    fn test_create_non_numeric_price() {
        let mut body = full_body();
        body["price"] = json!("free");

        assert_eq!(
            CreateProductRequest::from_payload(&body),
            Err(ProductValidationError::NonNumeric)
        );
    }

    #[test]
    fn test_create_zero_quantity_is_missing() {
        let mut body = full_body();
        body["quantity"] = json!(0);

        assert_eq!(
            CreateProductRequest::from_payload(&body),
            Err(ProductValidationError::MissingParameters)
        );
    }

    #[test]
    fn test_create_false_price_is_missing() {
        let mut body = full_body();
        body["price"] = json!(false);

        assert_eq!(
            CreateProductRequest::from_payload(&body),
            Err(ProductValidationError::MissingParameters)
        );
    }

    #[test]
    fn test_create_keeps_number_representation() {
        let request = CreateProductRequest::from_payload(&full_body()).unwrap();
        assert_eq!(serde_json::to_string(&request.quantity).unwrap(), "4");
        assert_eq!(serde_json::to_string(&request.price).unwrap(), "25.0");
    }

    #[test]
    fn test_create_messages_differ() {
        assert_ne!(
            ProductValidationError::MissingParameters.to_string(),
            ProductValidationError::NonNumeric.to_string()
        );
    }

    #[test]
    fn test_update_partial() {
        let request = UpdateProductRequest::from_payload(&json!({"quantity": 10})).unwrap();
        assert_eq!(request.quantity, Some(Number::from(10)));
        assert!(request.name.is_none());
        assert!(!request.is_empty());
    }

    #[test]
    fn test_update_accepts_zero_quantity() {
        let request = UpdateProductRequest::from_payload(&json!({"quantity": 0})).unwrap();
        assert_eq!(request.quantity, Some(Number::from(0)));
    }

    #[test]
    fn test_update_ignores_unknown_fields() {
        let request =
            UpdateProductRequest::from_payload(&json!({"id": "other", "colour": "red"})).unwrap();
        assert!(request.is_empty());
    }

    #[test]
    fn test_update_rejects_non_numeric_price() {
        assert_eq!(
            UpdateProductRequest::from_payload(&json!({"price": "cheap"})),
            Err(ProductValidationError::NonNumeric)
        );
    }

    #[test]
    fn test_update_rejects_non_text_name() {
        assert_eq!(
            UpdateProductRequest::from_payload(&json!({"name": 7})),
            Err(ProductValidationError::NonText)
        );
    }

    #[test]
    fn test_update_blank_fields_are_absent() {
        let request =
            UpdateProductRequest::from_payload(&json!({"name": "", "price": null})).unwrap();
        assert!(request.is_empty());
    }
}
