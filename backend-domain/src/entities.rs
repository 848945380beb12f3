// Domain entities

pub mod asset;
pub mod config;
pub mod event;
pub mod reader;
pub mod tag;

pub use asset::*;
pub use config::*;
pub use event::*;
pub use reader::*;
pub use tag::*;
