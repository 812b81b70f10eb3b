use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockbook_core::ProductId;

/// A committed change to the catalog.
///
/// Events are immutable facts handed to subscribers after the store has
/// already been mutated. They identify what changed; subscribers re-read the
/// session snapshot for the resulting state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogEvent {
    ProductAdded {
        id: ProductId,
        occurred_at: DateTime<Utc>,
    },
    ProductUpdated {
        id: ProductId,
        occurred_at: DateTime<Utc>,
    },
    ProductRemoved {
        id: ProductId,
        occurred_at: DateTime<Utc>,
    },
}

impl CatalogEvent {
    /// Stable event name identifier.
    pub fn event_type(&self) -> &'static str {
        match self {
            CatalogEvent::ProductAdded { .. } => "catalog.product.added",
            CatalogEvent::ProductUpdated { .. } => "catalog.product.updated",
            CatalogEvent::ProductRemoved { .. } => "catalog.product.removed",
        }
    }

    pub fn product_id(&self) -> ProductId {
        match self {
            CatalogEvent::ProductAdded { id, .. }
            | CatalogEvent::ProductUpdated { id, .. }
            | CatalogEvent::ProductRemoved { id, .. } => *id,
        }
    }

    /// When the change was committed.
    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CatalogEvent::ProductAdded { occurred_at, .. }
            | CatalogEvent::ProductUpdated { occurred_at, .. }
            | CatalogEvent::ProductRemoved { occurred_at, .. } => *occurred_at,
        }
    }
}

/// Receives change notifications from an editor session.
///
/// Notification happens synchronously, after the mutation is committed and
/// before the handler returns, so a subscriber always observes the post-commit
/// snapshot.
pub trait Subscriber {
    fn on_change(&mut self, event: &CatalogEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_types_are_stable_names() {
        let at = Utc::now();
        let id = ProductId::new(1);
        assert_eq!(
            CatalogEvent::ProductAdded { id, occurred_at: at }.event_type(),
            "catalog.product.added"
        );
        assert_eq!(
            CatalogEvent::ProductUpdated { id, occurred_at: at }.event_type(),
            "catalog.product.updated"
        );
        assert_eq!(
            CatalogEvent::ProductRemoved { id, occurred_at: at }.event_type(),
            "catalog.product.removed"
        );
    }

    #[test]
    fn accessors_reach_through_every_variant() {
        let at = Utc::now();
        let event = CatalogEvent::ProductRemoved { id: ProductId::new(9), occurred_at: at };
        assert_eq!(event.product_id(), ProductId::new(9));
        assert_eq!(event.occurred_at(), at);
    }
}
