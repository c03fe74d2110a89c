use diesel::prelude::*;
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing one security position within an account
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub account_id: String,
    pub ticker: String,
    pub quantity: Decimal,
}

/// Database model for holdings
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::holdings)]
#[diesel(primary_key(account_id, ticker))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HoldingDB {
    pub account_id: String,
    pub ticker: String,
    pub quantity: f64,
}

impl From<HoldingDB> for Holding {
    fn from(db: HoldingDB) -> Self {
        Self {
            account_id: db.account_id,
            ticker: db.ticker,
            quantity: Decimal::from_f64(db.quantity).unwrap_or_default(),
        }
    }
}
