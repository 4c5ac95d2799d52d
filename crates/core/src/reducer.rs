//! Reducer trait for state that evolves through discrete actions.

/// State that evolves by applying actions, one at a time.
///
/// `apply` must be pure and deterministic: no IO, no clocks, no panics. Any
/// side effect (persisting a token, logging) belongs to the owner that decides
/// which action to dispatch.
pub trait Reducer {
    type Action: Clone + core::fmt::Debug;

    /// Evolve in-memory state from a single action.
    fn apply(&mut self, action: &Self::Action);

    /// Apply a sequence of actions in order and return the resulting state.
    fn replay<'a, I>(mut self, actions: I) -> Self
    where
        Self: Sized,
        Self::Action: 'a,
        I: IntoIterator<Item = &'a Self::Action>,
    {
        for action in actions {
            self.apply(action);
        }
        self
    }
}
