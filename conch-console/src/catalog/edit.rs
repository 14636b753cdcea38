//! 行内编辑会话
//!
//! At most one row is in edit at a time. Entering edit on another row
//! drops the previous buffer without confirmation; the authoritative
//! rows only change through a save round-trip.

use shared::Product;
use shared::catalog::StockUpdateRequest;

/// Fields a seller can change on an existing row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Category,
    Price,
    InStock,
    Sold,
    Description,
}

/// Raw input text for one row under edit.
///
/// Every field is kept as entered, including the numeric ones; parsing
/// happens once at save time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditBuffer {
    pub name: String,
    pub category: String,
    pub price: String,
    pub in_stock_value: String,
    pub sold_stock_value: String,
    pub description: String,
}

impl EditBuffer {
    /// Seed the buffer from the row's current values
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            in_stock_value: product.in_stock_value.to_string(),
            sold_stock_value: product.sold_stock_value.to_string(),
            description: product.description.clone(),
        }
    }

    /// Overwrite one field with raw input text
    pub fn set(&mut self, field: EditField, value: impl Into<String>) {
        let value = value.into();
        match field {
            EditField::Name => self.name = value,
            EditField::Category => self.category = value,
            EditField::Price => self.price = value,
            EditField::InStock => self.in_stock_value = value,
            EditField::Sold => self.sold_stock_value = value,
            EditField::Description => self.description = value,
        }
    }

    /// Build the update request for this row. Numeric fields that fail
    /// to parse fall back to zero rather than blocking the save.
    pub fn to_update(&self, product_id: &str) -> StockUpdateRequest {
        StockUpdateRequest {
            product_id: product_id.to_string(),
            name: self.name.clone(),
            category: self.category.clone(),
            price: self.price.trim().parse().unwrap_or(0.0),
            in_stock_value: self.in_stock_value.trim().parse().unwrap_or(0),
            sold_stock_value: self.sold_stock_value.trim().parse().unwrap_or(0),
            description: self.description.clone(),
        }
    }
}

/// The table's single edit slot
#[derive(Debug, Clone, Default)]
pub enum EditSession {
    /// No row is in edit
    #[default]
    Viewing,
    /// One row is in edit; `buffer` holds the uncommitted input
    Editing {
        product_id: String,
        buffer: EditBuffer,
    },
}

impl EditSession {
    /// Move the slot to another row, or back to viewing when `target`
    /// is None. A previous buffer is dropped silently either way.
    pub fn switch_or_cancel(&mut self, target: Option<&Product>) {
        *self = match target {
            Some(product) => EditSession::Editing {
                product_id: product.product_id.clone(),
                buffer: EditBuffer::from_product(product),
            },
            None => EditSession::Viewing,
        };
    }

    /// Overwrite a buffered field; a no-op while viewing
    pub fn set_field(&mut self, field: EditField, value: impl Into<String>) {
        if let EditSession::Editing { buffer, .. } = self {
            buffer.set(field, value);
        }
    }

    /// Id of the row in edit, if any
    pub fn editing_id(&self) -> Option<&str> {
        match self {
            EditSession::Editing { product_id, .. } => Some(product_id),
            EditSession::Viewing => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing { .. })
    }
}
