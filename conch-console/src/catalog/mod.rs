//! 目录表格状态
//!
//! The table owns the authoritative rows from the last fetch plus the
//! view settings (sort, search) and the single edit slot. Sorting and
//! filtering never mutate the rows; deletes remove exactly one row
//! locally and everything else changes through a fresh fetch.

mod edit;
mod view;

pub use edit::{EditBuffer, EditField, EditSession};
pub use view::{SortConfig, SortDirection, SortKey, visible_rows};

use shared::Product;

/// Catalog table state
#[derive(Debug, Clone, Default)]
pub struct CatalogTable {
    products: Vec<Product>,
    pub sort: SortConfig,
    pub search_query: String,
    pub edit: EditSession,
}

impl CatalogTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Authoritative rows as fetched, unsorted and unfiltered
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Replace the authoritative rows. View settings and the edit slot
    /// are left alone; a stale edit id simply matches no row anymore.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Rows as currently displayed
    pub fn visible_rows(&self) -> Vec<Product> {
        view::visible_rows(&self.products, self.sort, &self.search_query)
    }

    /// Header click on a sortable column
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort.toggle(key);
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Find a row by id
    pub fn product(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.product_id == product_id)
    }

    /// Drop the rows with this id. The edit slot is not touched.
    pub fn remove_product(&mut self, product_id: &str) {
        self.products.retain(|p| p.product_id != product_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str) -> Product {
        Product {
            product_id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn table() -> CatalogTable {
        let mut table = CatalogTable::new();
        table.set_products(vec![
            product("100001", "Tote Bag"),
            product("100002", "Beanie"),
            product("100003", "Tumbler"),
        ]);
        table
    }

    #[test]
    fn test_visible_rows_respect_sort_and_query() {
        let mut table = table();
        table.toggle_sort(SortKey::Name);
        table.set_search_query("b");

        let rows = table.visible_rows();
        let names: Vec<&str> = rows.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Beanie", "Tote Bag"]);

        // the authoritative rows stayed in fetch order
        assert_eq!(table.products()[0].name, "Tote Bag");
    }

    #[test]
    fn test_remove_product_drops_only_that_row() {
        let mut table = table();
        table.remove_product("100002");

        assert_eq!(table.products().len(), 2);
        assert!(table.product("100002").is_none());
        assert!(table.product("100001").is_some());
    }

    #[test]
    fn test_remove_product_keeps_edit_slot() {
        let mut table = table();
        let row = table.product("100001").cloned().unwrap();
        table.edit.switch_or_cancel(Some(&row));

        // deleting a different row leaves the edit slot alone
        table.remove_product("100003");
        assert_eq!(table.edit.editing_id(), Some("100001"));

        // even deleting the edited row leaves the slot in place; the id
        // now matches no row and the next save reports the mismatch
        table.remove_product("100001");
        assert_eq!(table.edit.editing_id(), Some("100001"));
        assert!(table.product("100001").is_none());
    }

    #[test]
    fn test_set_products_keeps_edit_slot() {
        let mut table = table();
        let row = table.product("100002").cloned().unwrap();
        table.edit.switch_or_cancel(Some(&row));

        table.set_products(vec![product("200000", "Scarf")]);
        assert_eq!(table.edit.editing_id(), Some("100002"));
    }
}
