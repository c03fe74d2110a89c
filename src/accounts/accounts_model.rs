use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Domain model representing an investment account held by a customer
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_id: String,
    pub client_id: String,
    pub acct_open_date: NaiveDate,
}

/// Database model for accounts
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::accounts)]
#[diesel(primary_key(account_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountDB {
    pub account_id: String,
    pub client_id: String,
    pub acct_open_date: NaiveDate,
}

impl From<AccountDB> for Account {
    fn from(db: AccountDB) -> Self {
        Self {
            account_id: db.account_id,
            client_id: db.client_id,
            acct_open_date: db.acct_open_date,
        }
    }
}
