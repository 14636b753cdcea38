//! 排序与过滤
//!
//! Pure view derivation over the product list. The authoritative rows
//! are never reordered in place; every render derives a fresh view.

use shared::Product;

/// Sortable columns of the catalog table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Category,
    Price,
    InStock,
    Sold,
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Current sort setting. No key means fetch order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortConfig {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortConfig {
    /// Apply a header click: clicking the key already sorted ascending
    /// flips it to descending, anything else selects the key ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == Some(key) && self.direction == SortDirection::Ascending {
            self.direction = SortDirection::Descending;
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Derive the rows to display: sort first, then filter.
///
/// The sort is stable, so rows comparing equal keep their fetch order.
/// Numeric columns compare numerically, text columns lexically. The
/// query matches case-insensitively against product id and name; an
/// empty query keeps every row.
pub fn visible_rows(products: &[Product], sort: SortConfig, query: &str) -> Vec<Product> {
    let mut rows: Vec<Product> = products.to_vec();

    if let Some(key) = sort.key {
        rows.sort_by(|a, b| {
            let ord = match key {
                SortKey::Name => a.name.cmp(&b.name),
                SortKey::Category => a.category.cmp(&b.category),
                SortKey::Price => a.price.total_cmp(&b.price),
                SortKey::InStock => a.in_stock_value.cmp(&b.in_stock_value),
                SortKey::Sold => a.sold_stock_value.cmp(&b.sold_stock_value),
            };
            match sort.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }

    if query.is_empty() {
        return rows;
    }

    let needle = query.to_lowercase();
    rows.retain(|p| {
        p.product_id.to_lowercase().contains(&needle) || p.name.to_lowercase().contains(&needle)
    });

    rows
}
