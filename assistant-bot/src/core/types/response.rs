//! Handler chain result type.

/// Handler result for the chain. `Reply(text)` carries the reply body so later handlers can use
/// it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing was replied to the sender.
    Stop,
    /// Not for this handler; try next.
    Ignore,
    /// Stop the chain; `text` was sent to the sender.
    Reply(String),
}
