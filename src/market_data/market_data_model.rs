use chrono::NaiveDate;
use diesel::prelude::*;
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing one daily price observation
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DailyPrice {
    pub ticker: String,
    pub date: NaiveDate,
    pub price_type: String,
    pub value: Decimal,
}

/// Database model for daily prices
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::daily_prices)]
#[diesel(primary_key(ticker, date, price_type))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DailyPriceDB {
    pub ticker: String,
    pub date: NaiveDate,
    pub price_type: String,
    pub value: f64,
}

impl From<DailyPriceDB> for DailyPrice {
    fn from(db: DailyPriceDB) -> Self {
        Self {
            ticker: db.ticker,
            date: db.date,
            price_type: db.price_type,
            value: Decimal::from_f64(db.value).unwrap_or_default(),
        }
    }
}
