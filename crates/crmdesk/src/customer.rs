//! Core customer types for crmdesk.
//!
//! This module defines the fixed-shape customer record as it is stored in
//! the customer file, plus the input types used to create and edit records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A user-editable column of the customer table.
///
/// `ID` and `Date Added` are assigned by the store and are not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Customer name.
    Name,
    /// Contact e-mail address.
    Email,
    /// Phone number, digits only.
    Phone,
    /// Postal address.
    Address,
    /// Company the customer works for.
    Company,
}

impl Field {
    /// All editable fields, in column order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Address,
        Field::Company,
    ];

    /// The column name used in the customer file header.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone Number",
            Self::Address => "Address",
            Self::Company => "Company",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

/// One row of the customer table.
///
/// Field names are mapped onto the column names of the customer file, so a
/// `Customer` serializes straight to (and from) one CSV record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Identifier assigned at creation as the row count plus one.
    ///
    /// Not unique once rows have been deleted and re-added.
    #[serde(rename = "ID")]
    pub id: u64,

    /// Customer name.
    #[serde(rename = "Name")]
    pub name: String,

    /// Contact e-mail address.
    #[serde(rename = "Email")]
    pub email: String,

    /// Phone number.
    #[serde(rename = "Phone Number")]
    pub phone: String,

    /// Postal address (may be empty).
    #[serde(rename = "Address")]
    pub address: String,

    /// Company (may be empty).
    #[serde(rename = "Company")]
    pub company: String,

    /// Day the record was created.
    #[serde(rename = "Date Added")]
    pub date_added: NaiveDate,
}

impl Customer {
    /// Build a stored record from user input.
    #[must_use]
    pub fn from_new(id: u64, new: NewCustomer, date_added: NaiveDate) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            address: new.address,
            company: new.company,
            date_added,
        }
    }

    /// Get the value of an editable field.
    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Address => &self.address,
            Field::Company => &self.company,
        }
    }

    /// Overwrite every field that is set in `update`.
    pub fn apply(&mut self, update: CustomerUpdate) {
        let CustomerUpdate {
            name,
            email,
            phone,
            address,
            company,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(phone) = phone {
            self.phone = phone;
        }
        if let Some(address) = address {
            self.address = address;
        }
        if let Some(company) = company {
            self.company = company;
        }
    }
}

/// The user-supplied part of a new customer record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    /// Customer name.
    pub name: String,
    /// Contact e-mail address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// Company.
    #[serde(default)]
    pub company: String,
}

impl NewCustomer {
    /// Create a new customer input with the required fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            ..Self::default()
        }
    }

    /// Set the address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the company.
    #[must_use]
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }
}

/// A partial edit of an existing record. `None` leaves a cell untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerUpdate {
    /// New name.
    pub name: Option<String>,
    /// New e-mail address.
    pub email: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New address.
    pub address: Option<String>,
    /// New company.
    pub company: Option<String>,
}

impl CustomerUpdate {
    /// Check whether the update changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }

    /// Iterate over the fields this update sets, with their new values.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> {
        [
            (Field::Name, self.name.as_deref()),
            (Field::Email, self.email.as_deref()),
            (Field::Phone, self.phone.as_deref()),
            (Field::Address, self.address.as_deref()),
            (Field::Company, self.company.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
    }
}
