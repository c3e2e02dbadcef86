//! End-to-end scenarios against the public store API.

use chrono::{Days, Local, NaiveDate};
use tempfile::TempDir;

use crmdesk::{CustomerStore, CustomerUpdate, Field, NewCustomer};

const HEADER: &str = "ID,Name,Email,Phone Number,Address,Company,Date Added\n";

fn open(dir: &TempDir) -> CustomerStore {
    CustomerStore::load_or_create(dir.path().join("customers.csv")).unwrap()
}

#[test]
fn test_add_then_delete_leaves_header_only() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);

    let added = store
        .add(NewCustomer::new("Alice", "a@x.com", "555"))
        .unwrap()
        .clone();
    assert_eq!(store.len(), 1);
    assert_eq!(added.id, 1);
    assert_eq!(added.date_added, Local::now().date_naive());

    store.delete(0).unwrap();
    assert!(store.is_empty());
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), HEADER);
}

#[test]
fn test_reload_matches_table_after_adds_and_deletes() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);

    let day = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
    let inputs = [
        NewCustomer::new("Alice", "a@x.com", "555").with_company("Acme, Inc."),
        NewCustomer::new("Bob", "bob@example.org", "0123").with_address("Line 1\nLine 2"),
        NewCustomer::new("Carol \"CJ\" Jones", "cj@jones.net", "99"),
        NewCustomer::new("Dave", "dave@d.io", "42"),
    ];
    for input in inputs {
        store.add_dated(input, day).unwrap();
    }
    store.delete(1).unwrap();
    store.delete(2).unwrap();
    store
        .add_dated(NewCustomer::new("Erin", "erin@e.com", "7"), day)
        .unwrap();

    let reloaded = open(&dir);
    assert_eq!(reloaded.customers(), store.customers());
    assert_eq!(reloaded.len(), 3);
}

#[test]
fn test_positions_stay_contiguous_after_deletes() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    for i in 0..6 {
        store
            .add(NewCustomer::new(format!("C{i}"), "c@x.com", "1"))
            .unwrap();
    }

    store.delete(5).unwrap();
    store.delete(0).unwrap();
    store.delete(2).unwrap();

    let reloaded = open(&dir);
    let names: Vec<_> = reloaded
        .customers()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["C1", "C2", "C4"]);
    for row in 0..reloaded.len() {
        assert!(reloaded.get(row).is_some());
    }
    assert!(reloaded.get(reloaded.len()).is_none());
}

#[test]
fn test_update_is_durable() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    store
        .add(NewCustomer::new("Alice", "a@x.com", "555"))
        .unwrap();

    store
        .update(
            0,
            CustomerUpdate {
                company: Some("Globex".to_string()),
                ..CustomerUpdate::default()
            },
        )
        .unwrap();

    let reloaded = open(&dir);
    assert_eq!(reloaded.customers()[0].company, "Globex");
}

#[test]
fn test_rejected_input_is_reported_and_ignored() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);

    let err = store
        .add(NewCustomer::new("", "a@x.com", "555"))
        .unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("Name"));

    let err = store
        .add(NewCustomer::new("Alice", "a@x.com", "12a45"))
        .unwrap_err();
    assert!(err.is_validation());

    assert!(open(&dir).is_empty());
}

#[test]
fn test_dashboard_counts_last_seven_days() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    let today = Local::now().date_naive();

    for days_ago in [0, 3, 7, 8, 30] {
        let date = today.checked_sub_days(Days::new(days_ago)).unwrap();
        store
            .add_dated(NewCustomer::new("X", "x@x.com", "1"), date)
            .unwrap();
    }

    let metrics = store.metrics();
    assert_eq!(metrics.total, 5);
    assert_eq!(metrics.recent, 3);
}

#[test]
fn test_search_reports_current_row_positions() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    store
        .add(NewCustomer::new("Alice", "a@x.com", "1").with_company("Acme"))
        .unwrap();
    store
        .add(NewCustomer::new("Bob", "b@x.com", "2").with_company("Initech"))
        .unwrap();
    store
        .add(NewCustomer::new("Carol", "c@x.com", "3").with_company("acme labs"))
        .unwrap();
    store.delete(0).unwrap();

    let hits: Vec<_> = store
        .search(Field::Company, "ACME")
        .into_iter()
        .map(|(row, c)| (row, c.name.clone()))
        .collect();
    assert_eq!(hits, vec![(1, "Carol".to_string())]);
}

#[test]
fn test_existing_file_from_another_tool_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("customers.csv");
    std::fs::write(
        &path,
        format!(
            "{HEADER}1,Alice,a@x.com,555,\"12 High St, Leeds\",Acme,2024-01-02\n\
             2,Bob,b@y.org,777,,,2024-01-03\n"
        ),
    )
    .unwrap();

    let store = CustomerStore::load_or_create(&path).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.customers()[0].address, "12 High St, Leeds");
    assert_eq!(store.customers()[1].company, "");
}
