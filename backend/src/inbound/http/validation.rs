//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every failure becomes an `invalid_request` domain error whose details name
//! the offending `field` and a machine-readable `code`.

use serde_json::json;

use crate::domain::{Category, Error, RecipeName, Servings};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidName,
    InvalidServings,
    InvalidCategory,
    NameMismatch,
    InvalidJson,
    InvalidQuery,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidName => "invalid_name",
            ErrorCode::InvalidServings => "invalid_servings",
            ErrorCode::InvalidCategory => "invalid_category",
            ErrorCode::NameMismatch => "name_mismatch",
            ErrorCode::InvalidJson => "invalid_json",
            ErrorCode::InvalidQuery => "invalid_query",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn parse_name(value: String, field: FieldName) -> Result<RecipeName, Error> {
    RecipeName::new(value.as_str()).map_err(|_| {
        let field = field.as_str();
        ValidationError::new(field, format!("{field} must not be blank"))
            .with_value(ErrorCode::InvalidName, value)
    })
}

pub(crate) fn parse_servings(value: i64, field: FieldName) -> Result<Servings, Error> {
    u32::try_from(value)
        .ok()
        .and_then(|count| Servings::new(count).ok())
        .ok_or_else(|| {
            let field = field.as_str();
            ValidationError::new(
                field,
                format!("{field} must be an integer between 1 and {}", Servings::MAX),
            )
            .with_value(ErrorCode::InvalidServings, value.to_string())
        })
}

/// Parse servings supplied as text, e.g. from a query string.
pub(crate) fn parse_servings_text(value: &str, field: FieldName) -> Result<Servings, Error> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| {
            let name = field.as_str();
            ValidationError::new(name, format!("{name} must be a positive integer"))
                .with_value(ErrorCode::InvalidServings, value)
        })
        .and_then(|count| parse_servings(count, field))
}

pub(crate) fn parse_category(value: String, field: FieldName) -> Result<Category, Error> {
    value.parse::<Category>().map_err(|_| {
        let field = field.as_str();
        ValidationError::new(field, format!("{field} must be VEG or NON_VEG"))
            .with_value(ErrorCode::InvalidCategory, value)
    })
}

pub(crate) fn name_mismatch_error(field: FieldName, path_name: &str, body_name: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must match the recipe addressed by the path"))
        .with_details(json!({
            "field": field,
            "value": body_name,
            "expected": path_name,
            "code": ErrorCode::NameMismatch.as_str(),
        }))
}

pub(crate) fn invalid_json_error(reason: impl Into<String>) -> Error {
    ValidationError::new("body", reason).with_code(ErrorCode::InvalidJson)
}

pub(crate) fn invalid_query_error(reason: impl Into<String>) -> Error {
    ValidationError::new("query", reason).with_code(ErrorCode::InvalidQuery)
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub(crate) fn parse_comma_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainCode;
    use rstest::rstest;

    const FIELD: FieldName = FieldName::new("servings");

    fn detail_code(error: &Error) -> Option<&str> {
        error
            .details()
            .and_then(|details| details.get("code"))
            .and_then(|code| code.as_str())
    }

    #[rstest]
    fn missing_field_names_the_field() {
        let error = missing_field_error(FieldName::new("category"));

        assert_eq!(error.code(), DomainCode::InvalidRequest);
        assert_eq!(error.message(), "missing required field: category");
        assert_eq!(
            error.details(),
            Some(&json!({"field": "category", "code": "missing_field"}))
        );
    }

    #[rstest]
    #[case(0)]
    #[case(-3)]
    #[case(i64::from(Servings::MAX) + 1)]
    #[case(3_000_000_000)]
    #[case(i64::from(u32::MAX) + 1)]
    fn servings_outside_range_are_rejected(#[case] value: i64) {
        let error = parse_servings(value, FIELD).expect_err("invalid servings");

        assert_eq!(detail_code(&error), Some("invalid_servings"));
    }

    #[rstest]
    fn largest_storable_servings_are_accepted() {
        let servings = parse_servings(i64::from(Servings::MAX), FIELD).expect("within range");

        assert_eq!(servings.get(), Servings::MAX);
    }

    #[rstest]
    #[case("4", 4)]
    #[case(" 2 ", 2)]
    fn servings_text_parses(#[case] raw: &str, #[case] expected: u32) {
        let servings = parse_servings_text(raw, FIELD).expect("valid servings");

        assert_eq!(servings.get(), expected);
    }

    #[rstest]
    #[case("four")]
    #[case("0")]
    #[case("")]
    fn servings_text_rejects_garbage(#[case] raw: &str) {
        let error = parse_servings_text(raw, FIELD).expect_err("invalid servings");

        assert_eq!(detail_code(&error), Some("invalid_servings"));
    }

    #[rstest]
    #[case("VEG", Category::Veg)]
    #[case("NON_VEG", Category::NonVeg)]
    fn category_parses_wire_form(#[case] raw: &str, #[case] expected: Category) {
        let category =
            parse_category(raw.to_owned(), FieldName::new("category")).expect("known category");

        assert_eq!(category, expected);
    }

    #[rstest]
    #[case("veg")]
    #[case("VEGAN")]
    fn unknown_category_is_rejected(#[case] raw: &str) {
        let error = parse_category(raw.to_owned(), FieldName::new("category"))
            .expect_err("unknown category");

        assert_eq!(detail_code(&error), Some("invalid_category"));
    }

    #[rstest]
    fn blank_name_is_rejected() {
        let error = parse_name("   ".to_owned(), FieldName::new("name")).expect_err("blank name");

        assert_eq!(detail_code(&error), Some("invalid_name"));
    }

    #[rstest]
    #[case(None, &[])]
    #[case(Some(""), &[])]
    #[case(Some("Salmon"), &["Salmon"])]
    #[case(Some("Salmon, Tomato,,"), &["Salmon", "Tomato"])]
    fn comma_lists_split_and_trim(#[case] raw: Option<&str>, #[case] expected: &[&str]) {
        assert_eq!(parse_comma_list(raw), expected);
    }
}
