use tracing::warn;

use stockbook_catalog::{Product, ProductDraft, Submission};
use stockbook_core::{DomainResult, ProductId};

/// Commit produced by a successful form submission.
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    /// No editing target was set: append a new record.
    Insert(Submission),
    /// An editing target was set: replace the matching record.
    Update(ProductId, Submission),
}

/// Controlled-input state for the create/edit form.
///
/// Holds the four text fields plus the optional editing target. The draft is
/// only ever reset by a successful submission or an explicit cancel; a
/// rejected submission leaves it untouched for correction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormController {
    draft: ProductDraft,
    editing: Option<ProductId>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn editing(&self) -> Option<ProductId> {
        self.editing
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.draft.name = value.into();
    }

    pub fn set_category(&mut self, value: impl Into<String>) {
        self.draft.category = value.into();
    }

    pub fn set_price(&mut self, value: impl Into<String>) {
        self.draft.price = value.into();
    }

    pub fn set_stock(&mut self, value: impl Into<String>) {
        self.draft.stock = value.into();
    }

    /// Load a record into the draft and mark it as the editing target.
    pub fn begin_edit(&mut self, product: &Product) {
        self.editing = Some(product.id);
        self.draft = ProductDraft::from_product(product);
    }

    /// Drop the editing target and reset the draft.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.draft.clear();
    }

    /// Validate the draft and turn it into a commit.
    ///
    /// On failure nothing changes; the rejected field values go to the
    /// developer channel only. On success the draft and editing target are
    /// reset and the commit is handed back to the caller.
    pub fn submit(&mut self) -> DomainResult<FormOutcome> {
        let submission = match self.draft.validate() {
            Ok(submission) => submission,
            Err(err) => {
                warn!(
                    name = %self.draft.name,
                    price = %self.draft.price,
                    category = %self.draft.category,
                    stock = %self.draft.stock,
                    %err,
                    "submission rejected"
                );
                return Err(err);
            }
        };

        let outcome = match self.editing.take() {
            Some(id) => FormOutcome::Update(id, submission),
            None => FormOutcome::Insert(submission),
        };
        self.draft.clear();
        Ok(outcome)
    }
}
