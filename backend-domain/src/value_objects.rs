// Domain value objects
pub mod identifiers;
pub mod lookup_key;
pub mod reference_kind;

pub use identifiers::*;
pub use lookup_key::*;
pub use reference_kind::*;
