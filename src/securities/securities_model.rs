use std::fmt;

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::securities_constants::{
    ASSET_CLASS_ALTERNATIVES, ASSET_CLASS_COMMODITIES, ASSET_CLASS_EQUITY,
    ASSET_CLASS_FIXED_INCOME,
};

/// The four canonical major asset classes reported by the correlation
/// cross-table, in fixed presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    Equity,
    Commodities,
    FixedIncome,
    Alternatives,
}

impl AssetClass {
    /// Presentation order of the cross-table rows and columns
    pub const ALL: [AssetClass; 4] = [
        AssetClass::Equity,
        AssetClass::Commodities,
        AssetClass::FixedIncome,
        AssetClass::Alternatives,
    ];

    /// The canonical label used in normalized security-master rows
    pub fn label(&self) -> &'static str {
        match self {
            AssetClass::Equity => ASSET_CLASS_EQUITY,
            AssetClass::Commodities => ASSET_CLASS_COMMODITIES,
            AssetClass::FixedIncome => ASSET_CLASS_FIXED_INCOME,
            AssetClass::Alternatives => ASSET_CLASS_ALTERNATIVES,
        }
    }

    /// Maps a normalized label back to its class; non-canonical labels
    /// belong to no class.
    pub fn from_label(label: &str) -> Option<AssetClass> {
        AssetClass::ALL.iter().copied().find(|c| c.label() == label)
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Domain model representing a security-master entry
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Security {
    pub ticker: String,
    pub security_name: String,
    /// Raw label as recorded upstream; normalize before grouping
    pub major_asset_class: String,
    pub minor_asset_class: String,
}

/// Database model for securities
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::securities)]
#[diesel(primary_key(ticker))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SecurityDB {
    pub ticker: String,
    pub security_name: String,
    pub major_asset_class: String,
    pub minor_asset_class: String,
}

impl From<SecurityDB> for Security {
    fn from(db: SecurityDB) -> Self {
        Self {
            ticker: db.ticker,
            security_name: db.security_name,
            major_asset_class: db.major_asset_class,
            minor_asset_class: db.minor_asset_class,
        }
    }
}
