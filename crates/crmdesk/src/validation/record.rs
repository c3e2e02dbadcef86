//! Whole-record validation.

use thiserror::Error;
use tracing::trace;

use super::rules::{is_valid_email, is_valid_phone_number};
use crate::customer::{CustomerUpdate, Field, NewCustomer};

/// Why a piece of user input was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was left empty.
    #[error("{0} must be provided")]
    MissingField(Field),

    /// The e-mail address does not have the `local@domain.tld` shape.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The phone number is empty or contains non-digits.
    #[error("invalid phone number '{0}': digits only")]
    InvalidPhone(String),
}

impl ValidationError {
    /// The field that caused the rejection.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::MissingField(field) => *field,
            Self::InvalidEmail(_) => Field::Email,
            Self::InvalidPhone(_) => Field::Phone,
        }
    }
}

/// Check a single field value.
fn check_field(field: Field, value: &str) -> Result<(), ValidationError> {
    match field {
        Field::Name if value.trim().is_empty() => Err(ValidationError::MissingField(field)),
        Field::Email if value.is_empty() => Err(ValidationError::MissingField(field)),
        Field::Email if !is_valid_email(value) => {
            Err(ValidationError::InvalidEmail(value.to_string()))
        }
        Field::Phone if !is_valid_phone_number(value) => {
            Err(ValidationError::InvalidPhone(value.to_string()))
        }
        _ => Ok(()),
    }
}

/// Validate the input for a new record.
///
/// Name and e-mail are required, the e-mail must be well formed and the
/// phone number must be digits only. Address and company accept any text.
///
/// # Errors
///
/// Returns the first rule the input breaks, checked in column order.
pub fn validate_new_customer(input: &NewCustomer) -> Result<(), ValidationError> {
    for field in Field::ALL {
        let value = match field {
            Field::Name => &input.name,
            Field::Email => &input.email,
            Field::Phone => &input.phone,
            Field::Address => &input.address,
            Field::Company => &input.company,
        };
        check_field(field, value)?;
    }
    trace!(name = %input.name, "New customer passed validation");
    Ok(())
}

/// Validate the fields an update sets. Fields left as `None` are not checked.
///
/// # Errors
///
/// Returns the first rule a provided value breaks.
pub fn validate_update(update: &CustomerUpdate) -> Result<(), ValidationError> {
    update
        .fields()
        .try_for_each(|(field, value)| check_field(field, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_new_customer() {
        let input = NewCustomer::new("Alice", "a@x.com", "555");
        assert!(validate_new_customer(&input).is_ok());
    }

    #[test]
    fn test_optional_fields_accept_anything() {
        let input = NewCustomer::new("Alice", "a@x.com", "555")
            .with_address("Flat 2, \"The Old Mill\"\nSomewhere")
            .with_company("");
        assert!(validate_new_customer(&input).is_ok());
    }

    #[test]
    fn test_missing_name() {
        let input = NewCustomer::new("", "a@x.com", "555");
        assert_eq!(
            validate_new_customer(&input),
            Err(ValidationError::MissingField(Field::Name))
        );

        let input = NewCustomer::new("   ", "a@x.com", "555");
        assert_eq!(
            validate_new_customer(&input),
            Err(ValidationError::MissingField(Field::Name))
        );
    }

    #[test]
    fn test_missing_email() {
        let input = NewCustomer::new("Alice", "", "555");
        assert_eq!(
            validate_new_customer(&input),
            Err(ValidationError::MissingField(Field::Email))
        );
    }

    #[test]
    fn test_invalid_email() {
        let input = NewCustomer::new("Alice", "bad-email", "555");
        let err = validate_new_customer(&input).unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail("bad-email".to_string()));
        assert_eq!(err.field(), Field::Email);
    }

    #[test]
    fn test_empty_phone_rejected_on_add() {
        let input = NewCustomer::new("Alice", "a@x.com", "");
        let err = validate_new_customer(&input).unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone(String::new()));
        assert_eq!(err.field(), Field::Phone);
    }

    #[test]
    fn test_name_checked_before_email() {
        let input = NewCustomer::new("", "bad", "x");
        assert_eq!(
            validate_new_customer(&input),
            Err(ValidationError::MissingField(Field::Name))
        );
    }

    #[test]
    fn test_update_checks_only_provided_fields() {
        assert!(validate_update(&CustomerUpdate::default()).is_ok());

        let update = CustomerUpdate {
            company: Some(String::new()),
            address: Some(String::new()),
            ..CustomerUpdate::default()
        };
        assert!(validate_update(&update).is_ok());
    }

    #[test]
    fn test_update_rejects_bad_values() {
        let update = CustomerUpdate {
            phone: Some("12a45".to_string()),
            ..CustomerUpdate::default()
        };
        assert_eq!(
            validate_update(&update),
            Err(ValidationError::InvalidPhone("12a45".to_string()))
        );

        let update = CustomerUpdate {
            name: Some(String::new()),
            ..CustomerUpdate::default()
        };
        assert_eq!(
            validate_update(&update),
            Err(ValidationError::MissingField(Field::Name))
        );
    }

    #[test]
    fn test_error_display_names_field() {
        let err = ValidationError::MissingField(Field::Email);
        assert_eq!(err.to_string(), "Email must be provided");

        let err = ValidationError::InvalidPhone("abc".to_string());
        assert!(err.to_string().contains("abc"));
    }
}
