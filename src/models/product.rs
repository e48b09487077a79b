use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub inventory: i64,
    pub price: f64,
}

/// The fields of a partial update. `None` leaves the column untouched;
/// an explicit JSON `null` is the same as leaving the field out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub inventory: Option<i64>,
    pub price: Option<f64>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.inventory.is_none() && self.price.is_none()
    }
}

/// Criteria of a filtered lookup, read from the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub inventory: Option<i64>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}
