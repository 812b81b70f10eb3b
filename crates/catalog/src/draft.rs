use serde::{Deserialize, Serialize};

use stockbook_core::{DomainError, DomainResult};

use crate::category::Category;
use crate::product::Product;

/// Transient form input mirroring a [`Product`]'s fields as text.
///
/// Drafts are never persisted. Validation is read-only: a rejected draft is
/// left exactly as the user typed it so it can be corrected in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: String,
    pub stock: String,
}

impl ProductDraft {
    /// Copy a committed record back into editable text fields.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.label().to_string(),
            price: product.price.clone(),
            stock: product.stock.to_string(),
        }
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Validate and parse the draft into a committable [`Submission`].
    ///
    /// Name, price and category must be non-blank, the category must be one of
    /// the fixed set, and the stock text must parse as a finite number. Price
    /// is accepted as-is beyond the blank check.
    pub fn validate(&self) -> DomainResult<Submission> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name must not be blank"));
        }
        if self.price.trim().is_empty() {
            return Err(DomainError::validation("price must not be blank"));
        }
        if self.category.trim().is_empty() {
            return Err(DomainError::validation("category must be selected"));
        }

        let category: Category = self.category.parse()?;

        let stock: f64 = self
            .stock
            .trim()
            .parse()
            .map_err(|_| DomainError::validation(format!("stock is not a number: {:?}", self.stock)))?;
        if !stock.is_finite() {
            return Err(DomainError::validation(format!("stock is not a number: {:?}", self.stock)));
        }

        Ok(Submission {
            name: self.name.clone(),
            category,
            price: self.price.clone(),
            stock,
        })
    }
}

/// A validated, parsed draft ready to be committed to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub name: String,
    pub category: Category,
    pub price: String,
    pub stock: f64,
}
