use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

/// Path for a throwaway store file, unique per test
pub fn test_store_path(test_id: &str) -> String {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "clientfolio-{}-{}.db",
        test_id,
        std::process::id()
    ));
    path.to_string_lossy().to_string()
}

/// Creates an empty store file mirroring the external platform's schema
/// and returns a writable connection for seeding it.
pub fn create_store(db_path: &str) -> SqliteConnection {
    let _ = std::fs::remove_file(db_path);

    let mut conn = SqliteConnection::establish(db_path).expect("Failed to open test store");
    conn.batch_execute(
        "
        CREATE TABLE customers (
            customer_id TEXT PRIMARY KEY NOT NULL,
            full_name TEXT NOT NULL
        );
        CREATE TABLE accounts (
            account_id TEXT PRIMARY KEY NOT NULL,
            client_id TEXT NOT NULL,
            acct_open_date DATE NOT NULL
        );
        CREATE TABLE holdings (
            account_id TEXT NOT NULL,
            ticker TEXT NOT NULL,
            quantity DOUBLE NOT NULL,
            PRIMARY KEY (account_id, ticker)
        );
        CREATE TABLE securities (
            ticker TEXT PRIMARY KEY NOT NULL,
            security_name TEXT NOT NULL,
            major_asset_class TEXT NOT NULL,
            minor_asset_class TEXT NOT NULL
        );
        CREATE TABLE daily_prices (
            ticker TEXT NOT NULL,
            date DATE NOT NULL,
            price_type TEXT NOT NULL,
            value DOUBLE NOT NULL,
            PRIMARY KEY (ticker, date, price_type)
        );
    ",
    )
    .expect("Failed to create test store schema");

    conn
}

/// Removes the store file once a test is done with it
pub fn delete_store(db_path: &str) {
    let _ = std::fs::remove_file(db_path);
}
