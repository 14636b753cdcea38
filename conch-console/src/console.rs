//! 控制台编排
//!
//! Owns the HTTP client, the session guard, the catalog table, and the
//! draft form, and drives every operation end to end. Single-owner
//! design: operations take `&mut self`, so state never needs a lock.
//! UI-facing side effects travel through the event queue.

use crate::catalog::{CatalogTable, EditField, EditSession, SortKey};
use crate::config::ConsoleConfig;
use crate::draft::DraftForm;
use crate::error::{ConsoleError, ConsoleResult};
use crate::events::{ConsoleEvent, EventQueue, Notice};
use crate::ingest;
use crate::session::{GuardState, SessionGuard};
use conch_client::CatalogClient;
use shared::Product;
use tokio_util::sync::CancellationToken;

/// Seller catalog console
pub struct CatalogConsole {
    client: CatalogClient,
    guard: SessionGuard,
    table: CatalogTable,
    draft: DraftForm,
    events: EventQueue,
    cancel: CancellationToken,
}

impl CatalogConsole {
    /// Build a console from configuration
    pub fn new(config: &ConsoleConfig) -> Self {
        let cancel = CancellationToken::new();
        let client = config
            .client_config()
            .build_client()
            .with_cancellation(cancel.clone());

        Self {
            client,
            guard: SessionGuard::new(config.seller_id.clone()),
            table: CatalogTable::new(),
            draft: DraftForm::new(),
            events: EventQueue::default(),
            cancel,
        }
    }

    /// Build a console around an existing client. The client is re-wired
    /// onto this console's cancellation token.
    pub fn with_client(client: CatalogClient, seller_id: Option<String>) -> Self {
        let cancel = CancellationToken::new();

        Self {
            client: client.with_cancellation(cancel.clone()),
            guard: SessionGuard::new(seller_id),
            table: CatalogTable::new(),
            draft: DraftForm::new(),
            events: EventQueue::default(),
            cancel,
        }
    }

    // ========== Session ==========

    /// Run the session check. On anything but an affirmative answer the
    /// console queues a redirect and catalog access stays blocked.
    pub async fn verify(&mut self) -> ConsoleResult<GuardState> {
        match self.guard.verify(&self.client).await {
            Ok(GuardState::Verified) => Ok(GuardState::Verified),
            Ok(state) => {
                self.events.push(ConsoleEvent::RedirectToLogin);
                Ok(state)
            }
            Err(e) => {
                tracing::error!("session verification failed: {}", e);
                self.events.push(ConsoleEvent::RedirectToLogin);
                Err(e.into())
            }
        }
    }

    /// Verify, then load the catalog when the session stands
    pub async fn start(&mut self) -> ConsoleResult<GuardState> {
        let state = self.verify().await?;
        if state == GuardState::Verified {
            self.load().await?;
        }
        Ok(state)
    }

    /// End the seller session and queue the redirect to login
    pub async fn logout(&mut self) -> ConsoleResult<()> {
        let Some(seller_id) = self.guard.seller_id().map(str::to_string) else {
            self.events.push(ConsoleEvent::RedirectToLogin);
            return Ok(());
        };

        match self.client.logout(&seller_id).await {
            Ok(()) => {
                tracing::info!(seller_id = %seller_id, "seller logged out");
                self.events.push(ConsoleEvent::RedirectToLogin);
                Ok(())
            }
            Err(e) => {
                tracing::error!("logout failed: {}", e);
                Err(e.into())
            }
        }
    }

    // ========== Catalog ==========

    /// Fetch the catalog and replace the table rows. Requires a verified
    /// session.
    pub async fn load(&mut self) -> ConsoleResult<()> {
        if !self.guard.is_verified() {
            return Err(ConsoleError::NotVerified);
        }

        let products = self.client.fetch_products().await?;
        tracing::debug!(count = products.len(), "catalog loaded");
        self.table.set_products(products);
        Ok(())
    }

    /// Delete a row. Success removes exactly that row locally, without a
    /// re-fetch; rejection and transport failure leave the table alone.
    /// Every outcome surfaces a notice.
    pub async fn delete(&mut self, product_id: &str) -> ConsoleResult<()> {
        match self.client.delete_product(product_id).await {
            Ok(response) if response.success => {
                self.table.remove_product(product_id);
                self.events
                    .push(ConsoleEvent::Notice(Notice::info("Product deleted")));
                Ok(())
            }
            Ok(response) => {
                let reason = response.error.unwrap_or_else(|| "unknown".to_string());
                tracing::warn!(product_id = %product_id, "delete rejected: {}", reason);
                self.events.push(ConsoleEvent::Notice(Notice::error(
                    "Could not delete the product",
                )));
                Ok(())
            }
            Err(e) => {
                tracing::error!(product_id = %product_id, "delete failed: {}", e);
                self.events.push(ConsoleEvent::Notice(Notice::error(
                    "Could not delete the product",
                )));
                Err(e.into())
            }
        }
    }

    // ========== Editing ==========

    /// Enter edit on a row. A previous edit is discarded silently.
    pub fn start_edit(&mut self, product_id: &str) {
        match self.table.product(product_id).cloned() {
            Some(product) => self.table.edit.switch_or_cancel(Some(&product)),
            None => tracing::warn!(product_id = %product_id, "edit requested for unknown row"),
        }
    }

    /// Leave edit without saving; the buffer is dropped
    pub fn cancel_edit(&mut self) {
        self.table.edit.switch_or_cancel(None);
    }

    /// Overwrite one buffered field with raw input text
    pub fn edit_field(&mut self, field: EditField, value: impl Into<String>) {
        self.table.edit.set_field(field, value);
    }

    /// Persist the current edit buffer.
    ///
    /// On success the slot clears and the whole catalog is re-fetched;
    /// the local rows are never patched in place. On failure the buffer
    /// stays, so nothing typed is lost. A no-op while viewing.
    pub async fn save_edit(&mut self) -> ConsoleResult<()> {
        let EditSession::Editing { product_id, buffer } = &self.table.edit else {
            return Ok(());
        };

        let update = buffer.to_update(product_id);

        if let Err(e) = self.client.update_product(&update).await {
            tracing::error!(product_id = %update.product_id, "update failed: {}", e);
            return Err(e.into());
        }

        self.table.edit.switch_or_cancel(None);
        self.load().await
    }

    // ========== Draft ==========

    pub fn draft(&self) -> &DraftForm {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftForm {
        &mut self.draft
    }

    /// Submit the draft: encode the selected images, then create the
    /// product. Success clears the draft, closes the dialog, and queues
    /// a reload request; any failure keeps the draft untouched.
    pub async fn submit_draft(&mut self) -> ConsoleResult<()> {
        let img = match ingest::ingest_images(&self.draft.images).await {
            Ok(img) => img,
            Err(e) => {
                tracing::error!("image ingest failed: {}", e);
                return Err(e.into());
            }
        };

        let product = self.draft.to_product(img);

        if let Err(e) = self.client.create_product(&product).await {
            tracing::error!(product_id = %product.product_id, "create failed: {}", e);
            return Err(e.into());
        }

        tracing::info!(product_id = %product.product_id, "product created");
        self.draft.clear();
        self.events.push(ConsoleEvent::ReloadRequested);
        Ok(())
    }

    // ========== View ==========

    pub fn table(&self) -> &CatalogTable {
        &self.table
    }

    pub fn guard_state(&self) -> GuardState {
        self.guard.state()
    }

    pub fn seller_id(&self) -> Option<&str> {
        self.guard.seller_id()
    }

    /// Rows as currently displayed
    pub fn visible_rows(&self) -> Vec<Product> {
        self.table.visible_rows()
    }

    /// Header click on a sortable column
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.table.toggle_sort(key);
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.table.set_search_query(query);
    }

    /// Take all pending UI events, oldest first
    pub fn drain_events(&mut self) -> Vec<ConsoleEvent> {
        self.events.drain()
    }

    /// Cancel in-flight and future network calls. File reads already
    /// running are left to finish.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}
