use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Domain model representing a customer of the advisory platform
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: String,
    pub full_name: String,
}

/// Database model for customers
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::customers)]
#[diesel(primary_key(customer_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CustomerDB {
    pub customer_id: String,
    pub full_name: String,
}

impl From<CustomerDB> for Customer {
    fn from(db: CustomerDB) -> Self {
        Self {
            customer_id: db.customer_id,
            full_name: db.full_name,
        }
    }
}
