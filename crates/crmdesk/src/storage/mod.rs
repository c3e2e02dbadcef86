//! Storage layer for crmdesk.
//!
//! This module provides the customer store: the in-memory customer table and
//! the CSV file that backs it. Every mutation rewrites the whole file.

pub mod format;

use std::path::{Path, PathBuf};

use chrono::{Days, Local, NaiveDate};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::customer::{Customer, CustomerUpdate, Field, NewCustomer};
use crate::error::{Error, Result};
use crate::validation::{validate_new_customer, validate_update};

/// Default length of the "recent additions" window in days.
pub const DEFAULT_RECENT_WINDOW_DAYS: u32 = 7;

/// Owner of the customer table and its backing file.
///
/// Rows are addressed by their 0-based position in the table. Positions are
/// always contiguous: deleting a row shifts every later row down by one.
/// Callers get read-only views and go through the store's methods for every
/// change.
#[derive(Debug)]
pub struct CustomerStore {
    /// Path to the customer file.
    path: PathBuf,
    /// The customer table, in row order.
    customers: Vec<Customer>,
    /// Length of the "recent additions" window in days.
    recent_window_days: u32,
}

impl CustomerStore {
    /// Load the customer file at `path`, creating it if it does not exist.
    ///
    /// A missing file is created (along with its parent directories)
    /// containing only the header row, and the store starts out empty.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file exists but cannot be read or
    /// parsed, or if a new file cannot be created.
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let customers = if path.exists() {
            debug!("Loading customer file at {}", path.display());
            format::read_customers(&path)?
        } else {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                        path: parent.to_path_buf(),
                        source,
                    })?;
                }
            }
            info!("Creating customer file at {}", path.display());
            format::save_customers(&path, &[])?;
            Vec::new()
        };

        info!(
            rows = customers.len(),
            "Customer file loaded from {}",
            path.display()
        );
        Ok(Self {
            path,
            customers,
            recent_window_days: DEFAULT_RECENT_WINDOW_DAYS,
        })
    }

    /// Use a different "recent additions" window for [`Self::metrics`].
    #[must_use]
    pub fn with_recent_window(mut self, days: u32) -> Self {
        self.recent_window_days = days;
        self
    }

    /// Get the path to the customer file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read-only view of the table in row order.
    #[must_use]
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Get the customer at a row position.
    #[must_use]
    pub fn get(&self, row: usize) -> Option<&Customer> {
        self.customers.get(row)
    }

    /// Number of rows in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Check whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Add a customer dated today and persist the table.
    ///
    /// See [`Self::add_dated`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for rejected input, or a storage error
    /// if the file cannot be written.
    pub fn add(&mut self, input: NewCustomer) -> Result<&Customer> {
        self.add_dated(input, today())
    }

    /// Add a customer with an explicit `Date Added` and persist the table.
    ///
    /// The input is validated first; a rejected input leaves both the table
    /// and the file untouched. The new row gets `ID` = current row count + 1.
    /// Duplicate names or e-mails are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for rejected input, or a storage error
    /// if the file cannot be written.
    pub fn add_dated(&mut self, input: NewCustomer, date_added: NaiveDate) -> Result<&Customer> {
        if let Err(reason) = validate_new_customer(&input) {
            warn!(%reason, "Rejected new customer");
            return Err(reason.into());
        }

        let id = u64::try_from(self.customers.len() + 1).unwrap_or(u64::MAX);
        self.customers
            .push(Customer::from_new(id, input, date_added));

        if let Err(e) = self.save() {
            self.customers.pop();
            return Err(e);
        }

        let row = self.customers.len() - 1;
        info!(id, row, "Added customer");
        Ok(&self.customers[row])
    }

    /// Overwrite the fields set in `update` at a row position and persist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowOutOfRange`] for a bad position,
    /// [`Error::Validation`] if a provided value is rejected (the row is left
    /// unchanged), or a storage error if the file cannot be written.
    pub fn update(&mut self, row: usize, update: CustomerUpdate) -> Result<&Customer> {
        let len = self.customers.len();
        if row >= len {
            return Err(Error::row_out_of_range(row, len));
        }
        if let Err(reason) = validate_update(&update) {
            warn!(row, %reason, "Rejected customer update");
            return Err(reason.into());
        }

        let previous = self.customers[row].clone();
        self.customers[row].apply(update);

        if let Err(e) = self.save() {
            self.customers[row] = previous;
            return Err(e);
        }

        info!(row, id = self.customers[row].id, "Updated customer");
        Ok(&self.customers[row])
    }

    /// Remove the row at a position and persist the table.
    ///
    /// Returns the removed customer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowOutOfRange`] for a bad position, or a storage
    /// error if the file cannot be written.
    pub fn delete(&mut self, row: usize) -> Result<Customer> {
        let len = self.customers.len();
        if row >= len {
            return Err(Error::row_out_of_range(row, len));
        }

        let removed = self.customers.remove(row);
        if let Err(e) = self.save() {
            self.customers.insert(row, removed);
            return Err(e);
        }

        info!(row, id = removed.id, "Deleted customer");
        Ok(removed)
    }

    /// Rewrite the customer file from the in-memory table.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        format::save_customers(&self.path, &self.customers)?;
        debug!(rows = self.customers.len(), "Saved customer file");
        Ok(())
    }

    /// Find rows whose `field` contains `query`, ignoring case.
    ///
    /// Returns row positions together with the matching customers, in row
    /// order. An empty query matches every row.
    #[must_use]
    pub fn search(&self, field: Field, query: &str) -> Vec<(usize, &Customer)> {
        let needle = query.to_lowercase();
        self.customers
            .iter()
            .enumerate()
            .filter(|(_, c)| c.field(field).to_lowercase().contains(&needle))
            .collect()
    }

    /// Dashboard metrics as of today.
    #[must_use]
    pub fn metrics(&self) -> DashboardMetrics {
        self.metrics_as_of(today())
    }

    /// Dashboard metrics as of `today`.
    ///
    /// A row is recent when its `Date Added` is on or after
    /// `today - window`; the boundary day counts.
    #[must_use]
    pub fn metrics_as_of(&self, today: NaiveDate) -> DashboardMetrics {
        let cutoff = today
            .checked_sub_days(Days::new(u64::from(self.recent_window_days)))
            .unwrap_or(NaiveDate::MIN);

        let recent = self
            .customers
            .iter()
            .filter(|c| c.date_added >= cutoff)
            .count();

        DashboardMetrics {
            total: self.customers.len(),
            recent,
            window_days: self.recent_window_days,
        }
    }
}

/// Summary numbers shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardMetrics {
    /// Total number of customers.
    pub total: usize,
    /// Customers added within the recent window.
    pub recent: usize,
    /// Length of the recent window in days.
    pub window_days: u32,
}

/// Current local calendar date.
fn today() -> NaiveDate {
    Local::now().date_naive()
}
