#[cfg(test)]
use mockall::automock;

/// Read-only accessor for the viewer's current public identifier,
/// backed by the external identity store.
#[cfg_attr(test, automock)]
pub trait IdentityProvider: Send + Sync {
    /// The current public identifier, or `None` when nobody is signed in.
    fn current_identity(&self) -> Option<String>;
}
