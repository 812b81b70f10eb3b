use stockbook_core::ProductId;

/// Deletion confirmation state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ConfirmerState {
    /// No deletion pending.
    #[default]
    Idle,
    /// A deletion awaits confirmation.
    Pending(ProductId),
}

/// Two-step gate in front of the destructive commit.
///
/// `request` arms the gate for one id, `confirm` disarms it and yields the id
/// so the caller can issue the delete commit, `cancel` disarms it with no
/// side effect. At most one id is ever pending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeleteConfirmer {
    state: ConfirmerState,
}

impl DeleteConfirmer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConfirmerState {
        self.state
    }

    pub fn pending(&self) -> Option<ProductId> {
        match self.state {
            ConfirmerState::Pending(id) => Some(id),
            ConfirmerState::Idle => None,
        }
    }

    /// Arm the confirmer for `id`.
    ///
    /// A request while already pending replaces the pending id (the dialog was
    /// reopened on another row).
    pub fn request(&mut self, id: ProductId) {
        self.state = ConfirmerState::Pending(id);
    }

    /// Disarm and yield the pending id. No-op when idle.
    pub fn confirm(&mut self) -> Option<ProductId> {
        match core::mem::take(&mut self.state) {
            ConfirmerState::Pending(id) => Some(id),
            ConfirmerState::Idle => None,
        }
    }

    /// Disarm without any side effect.
    pub fn cancel(&mut self) {
        self.state = ConfirmerState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let confirmer = DeleteConfirmer::new();
        assert_eq!(confirmer.state(), ConfirmerState::Idle);
        assert_eq!(confirmer.pending(), None);
    }

    #[test]
    fn request_then_confirm_yields_the_id_and_returns_to_idle() {
        let mut confirmer = DeleteConfirmer::new();
        confirmer.request(ProductId::new(5));
        assert_eq!(confirmer.pending(), Some(ProductId::new(5)));

        assert_eq!(confirmer.confirm(), Some(ProductId::new(5)));
        assert_eq!(confirmer.state(), ConfirmerState::Idle);
    }

    #[test]
    fn request_then_cancel_has_no_side_effect() {
        let mut confirmer = DeleteConfirmer::new();
        confirmer.request(ProductId::new(5));
        confirmer.cancel();
        assert_eq!(confirmer.state(), ConfirmerState::Idle);
        assert_eq!(confirmer.confirm(), None);
    }

    #[test]
    fn confirm_while_idle_is_a_no_op() {
        let mut confirmer = DeleteConfirmer::new();
        assert_eq!(confirmer.confirm(), None);
        assert_eq!(confirmer.state(), ConfirmerState::Idle);
    }

    #[test]
    fn a_second_request_replaces_the_pending_id() {
        let mut confirmer = DeleteConfirmer::new();
        confirmer.request(ProductId::new(1));
        confirmer.request(ProductId::new(2));
        assert_eq!(confirmer.confirm(), Some(ProductId::new(2)));
    }
}
