// Lifecycle hooks run by the create operations before a record is persisted

pub mod event_creation_guard;
pub mod tag_locks;

pub use event_creation_guard::*;
pub use tag_locks::*;
