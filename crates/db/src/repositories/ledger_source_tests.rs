//! Tests for the `SeaORM` ledger source, against a mock connection.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use finrecon_core::ledger::{ExpenseCategory, PayrollStatus, Period};
use finrecon_core::reports::LedgerSource;
use finrecon_shared::types::VariantId;
use rust_decimal_macros::dec;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, Transaction};
use uuid::Uuid;

use super::LedgerSourceRepository;
use crate::entities::{expenses, inventory, inventory_transactions, payroll, sales_orders};

fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn january() -> Period {
    Period::new(ts(2024, 1, 1), ts(2024, 2, 1)).unwrap()
}

#[tokio::test]
async fn test_sales_orders_are_mapped() {
    let id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![sales_orders::Model {
            id,
            total_amount: Some(dec!(120.50)),
            subtotal: None,
            created_at: ts(2024, 1, 15),
        }]])
        .into_connection();
    let repo = LedgerSourceRepository::new(db);

    let orders = repo.sales_orders(january()).await.unwrap();

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id.into_inner(), id);
    assert_eq!(orders[0].total_amount, Some(dec!(120.50)));
    assert_eq!(orders[0].subtotal, None);
}

#[tokio::test]
async fn test_expense_defaults() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            expenses::Model {
                id: Uuid::new_v4(),
                amount: Some(dec!(40)),
                category: None,
                is_manufacturing_cost: None,
                expense_date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            },
            expenses::Model {
                id: Uuid::new_v4(),
                amount: None,
                category: Some("Raw Materials".to_string()),
                is_manufacturing_cost: Some(true),
                expense_date: NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
            },
        ]])
        .into_connection();
    let repo = LedgerSourceRepository::new(db);

    let rows = repo.expenses(january()).await.unwrap();

    assert_eq!(rows[0].category.label(), "Uncategorized");
    assert!(!rows[0].is_manufacturing_cost);
    assert_eq!(rows[1].category, ExpenseCategory::RawMaterials);
    assert!(rows[1].is_manufacturing_cost);
    assert_eq!(rows[1].amount, None);
}

#[tokio::test]
async fn test_pending_payroll_status_is_parsed() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![payroll::Model {
            id: Uuid::new_v4(),
            employee_id: None,
            net_salary: Some(dec!(3000)),
            status: "pending".to_string(),
            paid_at: None,
        }]])
        .into_connection();
    let repo = LedgerSourceRepository::new(db);

    let rows = repo.pending_payroll().await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, PayrollStatus::Pending);
}

#[tokio::test]
async fn test_inventory_widens_quantities() {
    let variant = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![inventory::Model {
            id: Uuid::new_v4(),
            variant_id: variant,
            location_id: None,
            quantity: Some(-4),
            unit_cost: Some(dec!(2.5)),
        }]])
        .into_connection();
    let repo = LedgerSourceRepository::new(db);

    let items = repo.inventory_items().await.unwrap();

    assert_eq!(items[0].variant_id, VariantId::from_uuid(variant));
    assert_eq!(items[0].quantity, Some(-4));
}

#[tokio::test]
async fn test_stock_events_without_cutoff_filter() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![inventory_transactions::Model {
            id: Uuid::new_v4(),
            variant_id: Uuid::new_v4(),
            quantity_change: 20,
            transaction_type: Some("restock".to_string()),
            created_at: ts(2024, 1, 5),
        }]])
        .into_connection();
    let repo = LedgerSourceRepository::new(db);

    let events = repo
        .stock_events_after(DateTime::<Utc>::MIN_UTC)
        .await
        .unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].quantity_change, 20);
    assert_eq!(
        repo.into_connection().into_transaction_log(),
        vec![Transaction::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"SELECT "inventory_transactions"."id", "inventory_transactions"."variant_id", "inventory_transactions"."quantity_change", "inventory_transactions"."transaction_type", "inventory_transactions"."created_at" FROM "inventory_transactions""#,
            []
        )]
    );
}

#[tokio::test]
async fn test_database_error_names_the_ledger() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("connection reset".to_string())])
        .into_connection();
    let repo = LedgerSourceRepository::new(db);

    let err = repo.machines().await.unwrap_err();

    assert_eq!(err.ledger, "machines");
    assert!(err.message.contains("connection reset"));
}

#[tokio::test]
async fn test_sales_orders_filter_is_half_open() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<sales_orders::Model>::new()])
        .into_connection();
    let repo = LedgerSourceRepository::new(db);

    repo.sales_orders(january()).await.unwrap();

    assert_eq!(
        repo.into_connection().into_transaction_log(),
        vec![Transaction::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"SELECT "sales_orders"."id", "sales_orders"."total_amount", "sales_orders"."subtotal", "sales_orders"."created_at" FROM "sales_orders" WHERE "sales_orders"."created_at" >= $1 AND "sales_orders"."created_at" < $2"#,
            [ts(2024, 1, 1).into(), ts(2024, 2, 1).into()]
        )]
    );
}

#[tokio::test]
async fn test_open_start_sends_only_upper_bound() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<sales_orders::Model>::new()])
        .into_connection();
    let repo = LedgerSourceRepository::new(db);
    let all_time = Period::new(DateTime::<Utc>::MIN_UTC, ts(2024, 2, 1)).unwrap();

    repo.sales_orders(all_time).await.unwrap();

    assert_eq!(
        repo.into_connection().into_transaction_log(),
        vec![Transaction::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"SELECT "sales_orders"."id", "sales_orders"."total_amount", "sales_orders"."subtotal", "sales_orders"."created_at" FROM "sales_orders" WHERE "sales_orders"."created_at" < $1"#,
            [ts(2024, 2, 1).into()]
        )]
    );
}

#[tokio::test]
async fn test_expense_filter_includes_last_calendar_day() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<expenses::Model>::new()])
        .into_connection();
    let repo = LedgerSourceRepository::new(db);
    let to = Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap();
    let period = Period::new(ts(2024, 1, 1), to).unwrap();

    repo.expenses(period).await.unwrap();

    assert_eq!(
        repo.into_connection().into_transaction_log(),
        vec![Transaction::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"SELECT "expenses"."id", "expenses"."amount", "expenses"."category", "expenses"."is_manufacturing_cost", "expenses"."expense_date" FROM "expenses" WHERE "expenses"."expense_date" >= $1 AND "expenses"."expense_date" <= $2"#,
            [
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().into(),
                NaiveDate::from_ymd_opt(2024, 1, 31).unwrap().into(),
            ]
        )]
    );
}

#[tokio::test]
async fn test_paid_payroll_filters_status_and_paid_at() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<payroll::Model>::new()])
        .into_connection();
    let repo = LedgerSourceRepository::new(db);

    repo.paid_payroll(january()).await.unwrap();

    assert_eq!(
        repo.into_connection().into_transaction_log(),
        vec![Transaction::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"SELECT "payroll"."id", "payroll"."employee_id", "payroll"."net_salary", "payroll"."status", "payroll"."paid_at" FROM "payroll" WHERE "payroll"."status" = $1 AND "payroll"."paid_at" >= $2 AND "payroll"."paid_at" < $3"#,
            ["paid".into(), ts(2024, 1, 1).into(), ts(2024, 2, 1).into()]
        )]
    );
}
