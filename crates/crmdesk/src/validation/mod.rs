//! Input validation for customer records.
//!
//! Two layers are provided:
//!
//! - **Format rules**: pure checks over a single piece of text
//!   ([`is_valid_email`], [`is_valid_phone_number`]).
//!
//! - **Record checks**: apply the rules to a whole [`NewCustomer`] or
//!   [`CustomerUpdate`] and report the first offending field.
//!
//! # Example
//!
//! ```
//! use crmdesk::customer::NewCustomer;
//! use crmdesk::validation::{is_valid_email, validate_new_customer};
//!
//! assert!(is_valid_email("a@b.co"));
//!
//! let input = NewCustomer::new("Alice", "not-an-email", "555");
//! match validate_new_customer(&input) {
//!     Ok(()) => println!("ok to store"),
//!     Err(reason) => println!("rejected: {reason}"),
//! }
//! ```
//!
//! [`NewCustomer`]: crate::customer::NewCustomer
//! [`CustomerUpdate`]: crate::customer::CustomerUpdate

mod record;
mod rules;

pub use record::{validate_new_customer, validate_update, ValidationError};
pub use rules::{is_valid_email, is_valid_phone_number, EMAIL_PATTERN};
