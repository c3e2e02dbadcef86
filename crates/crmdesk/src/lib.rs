//! `crmdesk` - Customer records kept in a flat CSV file
//!
//! This library provides the customer store, input validation and the
//! dashboard metrics behind the `crmdesk` command-line tool.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod customer;
pub mod error;
pub mod logging;
pub mod storage;
pub mod validation;

pub use config::Config;
pub use customer::{Customer, CustomerUpdate, Field, NewCustomer};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use storage::{CustomerStore, DashboardMetrics};
pub use validation::{is_valid_email, is_valid_phone_number, ValidationError};
