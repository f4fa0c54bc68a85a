use crate::core::{
    Puppy,
    PuppyDraft,
    PuppyId,
};

// Collected while drawing a frame and applied once drawing is done, so widgets
// never need a mutable borrow of the store.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    // Store
    DeletePuppy(PuppyId),
    SavePuppy(Puppy),
    AddPuppy(PuppyDraft),

    // Settings
    ToggleTheme,
}

#[derive(Debug, Default)]
pub struct ActionQueue(Vec<UiAction>);

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: UiAction) {
        self.0.push(action);
    }

    /// Hands over everything queued so far, oldest first.
    pub fn take_all(&mut self) -> Vec<UiAction> {
        std::mem::take(&mut self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_all_keeps_order_and_empties() {
        let mut queue = ActionQueue::new();
        queue.push(UiAction::DeletePuppy(PuppyId::new("p1")));
        queue.push(UiAction::ToggleTheme);

        assert_eq!(
            queue.take_all(),
            vec![UiAction::DeletePuppy(PuppyId::new("p1")), UiAction::ToggleTheme]
        );
        assert!(queue.is_empty());
        assert!(queue.take_all().is_empty());
    }
}
