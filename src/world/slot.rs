/// Lifecycle state of an entry in the world's storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Live,
    /// Removal was requested. The entry is destroyed by the next cleanup.
    PendingRemoval,
}

#[derive(Debug, Clone)]
pub(crate) struct Slot<T> {
    pub value: T,
    pub state: SlotState,
}

impl<T> Slot<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            state: SlotState::Live,
        }
    }

    pub fn is_live(&self) -> bool {
        self.state == SlotState::Live
    }

    /// Returns `true` if this call changed the state.
    pub fn mark_pending(&mut self) -> bool {
        let was_live = self.is_live();
        self.state = SlotState::PendingRemoval;
        was_live
    }

    pub fn live(&self) -> Option<&T> {
        self.is_live().then_some(&self.value)
    }

    pub fn live_mut(&mut self) -> Option<&mut T> {
        if self.is_live() {
            Some(&mut self.value)
        } else {
            None
        }
    }
}
