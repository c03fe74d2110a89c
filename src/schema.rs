// Table layout of the external analytics store. The store is owned by the
// upstream data platform and consumed read-only; this file is maintained by
// hand against its published schema.

diesel::table! {
    accounts (account_id) {
        account_id -> Text,
        client_id -> Text,
        acct_open_date -> Date,
    }
}

diesel::table! {
    customers (customer_id) {
        customer_id -> Text,
        full_name -> Text,
    }
}

diesel::table! {
    holdings (account_id, ticker) {
        account_id -> Text,
        ticker -> Text,
        quantity -> Double,
    }
}

diesel::table! {
    securities (ticker) {
        ticker -> Text,
        security_name -> Text,
        major_asset_class -> Text,
        minor_asset_class -> Text,
    }
}

diesel::table! {
    daily_prices (ticker, date, price_type) {
        ticker -> Text,
        date -> Date,
        price_type -> Text,
        value -> Double,
    }
}

diesel::joinable!(accounts -> customers (client_id));
diesel::joinable!(holdings -> accounts (account_id));
diesel::joinable!(holdings -> securities (ticker));
diesel::joinable!(daily_prices -> securities (ticker));

diesel::allow_tables_to_appear_in_same_query!(
    accounts,
    customers,
    daily_prices,
    holdings,
    securities,
);
