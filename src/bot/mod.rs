/// Command definitions
pub mod commands;
/// Update schema and handlers
pub mod handlers;
