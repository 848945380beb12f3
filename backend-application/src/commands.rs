pub mod asset_commands;
pub mod event_commands;
pub mod reader_commands;
pub mod tag_commands;
