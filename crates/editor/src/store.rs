use stockbook_catalog::{Product, Submission};
use stockbook_core::{DomainError, DomainResult, IdSequence, ProductId};

use crate::search;

/// Authoritative and displayed product lists.
///
/// The authoritative list is the full catalog in insertion order. The
/// displayed list is the subset currently shown in the table. Any commit
/// (insert or update) resynchronizes both views to the full resulting
/// contents, so an active search filter does not survive a commit. Removal is
/// different: it takes the record out of both views independently, leaving the
/// rest of a filtered view in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductStore {
    products: Vec<Product>,
    displayed: Vec<Product>,
    ids: IdSequence,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store over pre-existing records.
    ///
    /// The id sequence continues past the largest seeded id.
    pub fn with_products(products: Vec<Product>) -> Self {
        let mut ids = IdSequence::new();
        for product in &products {
            ids.bump_past(product.id);
        }
        let displayed = products.clone();
        Self { products, displayed, ids }
    }

    /// The full catalog, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The currently displayed subset.
    pub fn displayed(&self) -> &[Product] {
        &self.displayed
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Append a new record built from a validated submission.
    pub fn insert(&mut self, submission: Submission) -> ProductId {
        let id = self.ids.next_id();
        self.products.push(Product {
            id,
            name: submission.name,
            price: submission.price,
            category: submission.category,
            stock: submission.stock,
        });
        self.sync_views();
        id
    }

    /// Replace the record matching `id` in place.
    ///
    /// Every other record is untouched and order is preserved.
    pub fn update(&mut self, id: ProductId, submission: Submission) -> DomainResult<()> {
        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DomainError::NotFound)?;
        slot.name = submission.name;
        slot.price = submission.price;
        slot.category = submission.category;
        slot.stock = submission.stock;
        self.sync_views();
        Ok(())
    }

    /// Remove the record matching `id` from both views.
    pub fn remove(&mut self, id: ProductId) -> DomainResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(DomainError::NotFound)?;
        let removed = self.products.remove(index);
        self.displayed.retain(|p| p.id != id);
        Ok(removed)
    }

    /// Recompute the displayed list from the authoritative list.
    pub fn apply_filter(&mut self, query: &str) {
        self.displayed = search::filter(&self.products, query);
    }

    fn sync_views(&mut self) {
        self.displayed = self.products.clone();
    }
}
