//! 新商品草稿
//!
//! Form state for the create-product dialog. The draft outlives the
//! dialog: closing it or a failed submit keeps everything typed, and
//! only a successful submit clears the form.

use shared::Product;
use shared::util::generate_product_id;
use std::path::PathBuf;

/// Draft of a product under creation.
///
/// Numeric fields hold raw input text and are parsed once at submit.
#[derive(Debug, Clone, Default)]
pub struct DraftForm {
    pub product_id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: String,
    pub in_stock_value: String,
    pub sold_stock_value: String,
    pub rating: String,
    /// Selected image files, in selection order
    pub images: Vec<PathBuf>,
    /// Whether the create dialog is showing
    pub dialog_open: bool,
}

impl DraftForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_dialog(&mut self) {
        self.dialog_open = true;
    }

    /// Hide the dialog. The draft itself is kept for the next open.
    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    /// Fill the id slot with a fresh six digit id. Repeated calls
    /// overwrite; collisions with existing rows are not checked here.
    pub fn generate_id(&mut self) {
        self.product_id = generate_product_id();
    }

    /// Replace the image selection
    pub fn set_images(&mut self, images: Vec<PathBuf>) {
        self.images = images;
    }

    /// Assemble the product to submit. `img` is the already-encoded
    /// image string. Unparseable numbers fall back to zero.
    pub fn to_product(&self, img: String) -> Product {
        Product {
            product_id: self.product_id.clone(),
            name: self.name.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            price: self.price.trim().parse().unwrap_or(0.0),
            in_stock_value: self.in_stock_value.trim().parse().unwrap_or(0),
            sold_stock_value: self.sold_stock_value.trim().parse().unwrap_or(0),
            rating: self.rating.trim().parse().unwrap_or(0.0),
            img,
        }
    }

    /// Reset every field and close the dialog
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
