//! Text and JSON rendering of customer rows and metrics.

use serde::Serialize;

use crate::customer::Customer;
use crate::error::Result;
use crate::storage::DashboardMetrics;

use super::OutputFormat;

/// Table column headings, in display order.
const TABLE_HEADINGS: [&str; 8] = [
    "Row", "ID", "Name", "Email", "Phone", "Address", "Company", "Added",
];

/// A customer together with its current row position.
#[derive(Debug, Serialize)]
struct RowView<'a> {
    row: usize,
    #[serde(flatten)]
    customer: &'a Customer,
}

/// Render rows in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn rows(rows: &[(usize, &Customer)], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(plain(rows)),
        OutputFormat::Table => Ok(table(rows)),
        OutputFormat::Json => {
            let views: Vec<_> = rows
                .iter()
                .map(|&(row, customer)| RowView { row, customer })
                .collect();
            Ok(serde_json::to_string_pretty(&views)?)
        }
    }
}

/// Render a single customer as labelled lines, or JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn detail(row: usize, customer: &Customer, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&RowView { row, customer })?);
    }

    Ok([
        format!("Row:          {row}"),
        format!("ID:           {}", customer.id),
        format!("Name:         {}", customer.name),
        format!("Email:        {}", customer.email),
        format!("Phone Number: {}", customer.phone),
        format!("Address:      {}", customer.address),
        format!("Company:      {}", customer.company),
        format!("Date Added:   {}", customer.date_added),
    ]
    .join("\n"))
}

/// Render the dashboard metrics, or JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn dashboard(metrics: &DashboardMetrics, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(metrics)?);
    }
    Ok(format!(
        "Total Customers: {}\nRecent Additions ({} days): {}",
        metrics.total, metrics.window_days, metrics.recent
    ))
}

fn plain(rows: &[(usize, &Customer)]) -> String {
    rows.iter()
        .map(|(row, c)| {
            format!(
                "[{row}] #{} {} <{}> {} | {} | {} | added {}",
                c.id,
                c.name,
                c.email,
                c.phone,
                c.company,
                single_line(&c.address),
                c.date_added
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn table(rows: &[(usize, &Customer)]) -> String {
    let cells: Vec<[String; 8]> = rows
        .iter()
        .map(|(row, c)| {
            [
                row.to_string(),
                c.id.to_string(),
                c.name.clone(),
                c.email.clone(),
                c.phone.clone(),
                single_line(&c.address),
                c.company.clone(),
                c.date_added.to_string(),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADINGS.map(|h| h.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |line: &[String]| {
        line.iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let headings = TABLE_HEADINGS.map(String::from);
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    std::iter::once(format_line(&headings[..]))
        .chain(std::iter::once(format_line(&separator[..])))
        .chain(cells.iter().map(|line| format_line(&line[..])))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapse embedded line breaks so a cell stays on one line.
fn single_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
