use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

use stockbook_catalog::{Product, ProductDraft};
use stockbook_core::ProductId;

use crate::confirm::DeleteConfirmer;
use crate::event::{CatalogEvent, Subscriber};
use crate::form::{FormController, FormOutcome};
use crate::store::ProductStore;

/// Read-only view of the full session state.
///
/// The view layer re-reads a snapshot after each change notification instead
/// of holding references into the session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Filtered subset currently shown in the table.
    pub displayed: Vec<Product>,
    /// Full catalog in insertion order.
    pub products: Vec<Product>,
    pub draft: ProductDraft,
    pub editing: Option<ProductId>,
    pub pending_delete: Option<ProductId>,
    pub query: String,
}

/// The catalog editor's state container.
///
/// Owns the product store, form controller, deletion confirmer and current
/// search query; exposes the handlers the view collaborator wires to user
/// events. Created at application start and dropped on teardown — there is no
/// ambient global state. Every handler is synchronous and takes `&mut self`,
/// so no two mutations can interleave.
#[derive(Default)]
pub struct EditorSession {
    store: ProductStore,
    form: FormController,
    confirmer: DeleteConfirmer,
    query: String,
    subscribers: Vec<Box<dyn Subscriber>>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from pre-existing records (the id sequence continues past them).
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            store: ProductStore::with_products(products),
            ..Self::default()
        }
    }

    /// Register a change subscriber.
    ///
    /// Subscribers are notified in registration order after every committed
    /// mutation.
    pub fn subscribe(&mut self, subscriber: Box<dyn Subscriber>) {
        self.subscribers.push(subscriber);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            displayed: self.store.displayed().to_vec(),
            products: self.store.products().to_vec(),
            draft: self.form.draft().clone(),
            editing: self.form.editing(),
            pending_delete: self.confirmer.pending(),
            query: self.query.clone(),
        }
    }

    pub fn products(&self) -> &[Product] {
        self.store.products()
    }

    pub fn displayed(&self) -> &[Product] {
        self.store.displayed()
    }

    pub fn draft(&self) -> &ProductDraft {
        self.form.draft()
    }

    pub fn editing(&self) -> Option<ProductId> {
        self.form.editing()
    }

    pub fn pending_delete(&self) -> Option<ProductId> {
        self.confirmer.pending()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    // -- search ----------------------------------------------------------

    /// Keystroke in the search input: store the query, recompute the filter.
    pub fn search_changed(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.store.apply_filter(&self.query);
    }

    // -- form ------------------------------------------------------------

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.form.set_name(value);
    }

    pub fn set_category(&mut self, value: impl Into<String>) {
        self.form.set_category(value);
    }

    pub fn set_price(&mut self, value: impl Into<String>) {
        self.form.set_price(value);
    }

    pub fn set_stock(&mut self, value: impl Into<String>) {
        self.form.set_stock(value);
    }

    /// Load a record into the form and mark it as the editing target.
    ///
    /// Returns `false` when the id is no longer in the catalog.
    pub fn begin_edit(&mut self, id: ProductId) -> bool {
        match self.store.get(id) {
            Some(product) => {
                let product = product.clone();
                self.form.begin_edit(&product);
                true
            }
            None => {
                debug!(%id, "edit requested for unknown product");
                false
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        self.form.cancel_edit();
    }

    /// Submit the form: update when an editing target is set, insert
    /// otherwise.
    ///
    /// Invalid submissions are non-fatal: the handler returns `false` with all
    /// state unchanged (the rejection is already logged at the form layer).
    pub fn submit_form(&mut self) -> bool {
        let outcome = match self.form.submit() {
            Ok(outcome) => outcome,
            Err(_) => return false,
        };

        let event = match outcome {
            FormOutcome::Insert(submission) => {
                let id = self.store.insert(submission);
                info!(%id, "product added");
                CatalogEvent::ProductAdded { id, occurred_at: Utc::now() }
            }
            FormOutcome::Update(id, submission) => match self.store.update(id, submission) {
                Ok(()) => {
                    info!(%id, "product updated");
                    CatalogEvent::ProductUpdated { id, occurred_at: Utc::now() }
                }
                Err(err) => {
                    // The editing target vanished between begin_edit and
                    // submit (deleted from under the open form).
                    warn!(%id, %err, "update commit dropped");
                    return false;
                }
            },
        };

        self.notify(&event);
        true
    }

    // -- deletion --------------------------------------------------------

    /// Trash button on a row: arm the confirmation dialog.
    pub fn request_delete(&mut self, id: ProductId) {
        self.confirmer.request(id);
    }

    /// Confirm button in the dialog: issue the delete commit.
    ///
    /// No-op when nothing is pending.
    pub fn confirm_delete(&mut self) -> bool {
        let Some(id) = self.confirmer.confirm() else {
            return false;
        };

        match self.store.remove(id) {
            Ok(removed) => {
                info!(%id, name = %removed.name, "product removed");
                let event = CatalogEvent::ProductRemoved { id, occurred_at: Utc::now() };
                self.notify(&event);
                true
            }
            Err(err) => {
                warn!(%id, %err, "delete commit dropped");
                false
            }
        }
    }

    /// Cancel button in the dialog: disarm, nothing else.
    pub fn cancel_delete(&mut self) {
        self.confirmer.cancel();
    }

    fn notify(&mut self, event: &CatalogEvent) {
        for subscriber in &mut self.subscribers {
            subscriber.on_change(event);
        }
    }
}

impl core::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EditorSession")
            .field("store", &self.store)
            .field("form", &self.form)
            .field("confirmer", &self.confirmer)
            .field("query", &self.query)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
