//! `stockbook-editor` — the catalog state manager.
//!
//! Owns every piece of view state the catalog editor needs: the product store
//! (authoritative and displayed lists), the form controller, and the deletion
//! confirmer, wired together behind [`EditorSession`]. Everything here is
//! single-threaded and synchronous by construction: each handler runs to
//! completion on the caller's thread before the view re-reads the snapshot.

pub mod confirm;
pub mod event;
pub mod form;
pub mod search;
pub mod session;
pub mod store;

pub use confirm::{ConfirmerState, DeleteConfirmer};
pub use event::{CatalogEvent, Subscriber};
pub use form::{FormController, FormOutcome};
pub use session::{EditorSession, Snapshot};
pub use store::ProductStore;
