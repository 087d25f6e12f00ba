pub mod entry;
pub mod summary;

pub use entry::{LogEntry, Message, Usage};
pub use summary::SessionSummary;
