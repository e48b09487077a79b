//! SQL composition for filtered lookups and partial updates.
//!
//! Both statements are assembled from explicit structures of optional
//! fields; values are always bound, never spliced into the SQL text.

use crate::models::{ProductChanges, ProductFilter};
use sqlx::{QueryBuilder, Sqlite};

pub const SELECT_PRODUCTS: &str = "SELECT id, name, inventory, price FROM products";
pub const SELECT_ALL_PRODUCTS: &str = "SELECT id, name, inventory, price FROM products ORDER BY id";
pub const SELECT_PRODUCT_BY_ID: &str = "SELECT id, name, inventory, price FROM products WHERE id = ?";

/// A value bound to a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Integer(i64),
    Real(f64),
}

/// One conjunct of a filtered lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Case-sensitive substring match on `name`.
    NameContains(String),
    InventoryEquals(i64),
    PriceAtLeast(f64),
    PriceAtMost(f64),
}

impl ProductChanges {
    /// `(column, value)` pairs for the fields present, in column order.
    pub fn assignments(&self) -> Vec<(&'static str, SqlValue)> {
        let mut assignments = Vec::new();

        if let Some(name) = &self.name {
            assignments.push(("name", SqlValue::Text(name.clone())));
        }
        if let Some(inventory) = self.inventory {
            assignments.push(("inventory", SqlValue::Integer(inventory)));
        }
        if let Some(price) = self.price {
            assignments.push(("price", SqlValue::Real(price)));
        }

        assignments
    }
}

impl ProductFilter {
    /// The conditions this filter contributes.
    ///
    /// A criterion counts as provided only when it is truthy: an empty name,
    /// an inventory of `0` and a price bound of `0.0` are all ignored.
    pub fn conditions(&self) -> Vec<Condition> {
        let mut conditions = Vec::new();

        if let Some(name) = self.name.as_deref().filter(|name| !name.is_empty()) {
            conditions.push(Condition::NameContains(name.to_owned()));
        }
        if let Some(inventory) = self.inventory.filter(|&inventory| inventory != 0) {
            conditions.push(Condition::InventoryEquals(inventory));
        }
        if let Some(price_min) = self.price_min.filter(|&price| price != 0.0) {
            conditions.push(Condition::PriceAtLeast(price_min));
        }
        if let Some(price_max) = self.price_max.filter(|&price| price != 0.0) {
            conditions.push(Condition::PriceAtMost(price_max));
        }

        conditions
    }
}

/// `SELECT ... WHERE 1 = 1 [AND ...]` for the given filter.
pub fn filtered_select(filter: &ProductFilter) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::new(SELECT_PRODUCTS);
    builder.push(" WHERE 1 = 1");

    for condition in filter.conditions() {
        match condition {
            Condition::NameContains(name) => {
                builder.push(" AND instr(name, ").push_bind(name).push(") > 0");
            }
            Condition::InventoryEquals(inventory) => {
                builder.push(" AND inventory = ").push_bind(inventory);
            }
            Condition::PriceAtLeast(price) => {
                builder.push(" AND price >= ").push_bind(price);
            }
            Condition::PriceAtMost(price) => {
                builder.push(" AND price <= ").push_bind(price);
            }
        }
    }

    builder.push(" ORDER BY id");
    builder
}

/// `UPDATE products SET ... WHERE id = ?` naming exactly the present fields,
/// or `None` when there is nothing to set.
pub fn update_statement(id: i64, changes: &ProductChanges) -> Option<QueryBuilder<'static, Sqlite>> {
    let assignments = changes.assignments();
    if assignments.is_empty() {
        return None;
    }

    let mut builder = QueryBuilder::new("UPDATE products SET ");
    {
        let mut set = builder.separated(", ");
        for (column, value) in assignments {
            set.push(column);
            set.push_unseparated(" = ");
            match value {
                SqlValue::Text(text) => set.push_bind_unseparated(text),
                SqlValue::Integer(integer) => set.push_bind_unseparated(integer),
                SqlValue::Real(real) => set.push_bind_unseparated(real),
            };
        }
    }
    builder.push(" WHERE id = ").push_bind(id);

    Some(builder)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_filter_selects_everything() {
        let builder = filtered_select(&ProductFilter::default());
        assert_eq!(
            builder.sql(),
            "SELECT id, name, inventory, price FROM products WHERE 1 = 1 ORDER BY id"
        );
    }

    #[test]
    fn filter_appends_one_condition_per_criterion() {
        let filter = ProductFilter {
            name: Some("Wid".to_owned()),
            inventory: Some(5),
            price_min: Some(10.0),
            price_max: Some(20.0),
        };

        assert_eq!(
            filtered_select(&filter).sql(),
            "SELECT id, name, inventory, price FROM products WHERE 1 = 1 \
             AND instr(name, ?) > 0 AND inventory = ? AND price >= ? AND price <= ? ORDER BY id"
        );
    }

    #[test]
    fn falsy_criteria_are_ignored() {
        let filter = ProductFilter {
            name: Some(String::new()),
            inventory: Some(0),
            price_min: Some(0.0),
            price_max: Some(15.5),
        };

        assert_eq!(filter.conditions(), vec![Condition::PriceAtMost(15.5)]);
    }

    #[test]
    fn update_sets_only_present_fields() {
        let changes = ProductChanges {
            price: Some(12.5),
            ..Default::default()
        };
        assert_eq!(changes.assignments(), vec![("price", SqlValue::Real(12.5))]);

        let builder = update_statement(7, &changes).unwrap();
        assert_eq!(builder.sql(), "UPDATE products SET price = ? WHERE id = ?");
    }

    #[test]
    fn update_keeps_zero_inventory() {
        let changes = ProductChanges {
            name: Some("Gadget".to_owned()),
            inventory: Some(0),
            price: None,
        };

        let builder = update_statement(1, &changes).unwrap();
        assert_eq!(
            builder.sql(),
            "UPDATE products SET name = ?, inventory = ? WHERE id = ?"
        );
    }

    #[test]
    fn empty_update_builds_nothing() {
        assert!(update_statement(1, &ProductChanges::default()).is_none());
    }
}
