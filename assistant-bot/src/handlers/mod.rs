//! Update handlers. Command, text and photo handlers are reached through
//! [`crate::dispatch::DispatchTable`]; [`LoggingHandler`] wraps every update in the chain.

mod admin;
mod logging;
mod photo;
mod start;
mod stats;
mod text;

pub use admin::AdminHandler;
pub use logging::LoggingHandler;
pub use photo::PhotoHandler;
pub use start::StartHandler;
pub use stats::StatsHandler;
pub use text::TextHandler;
