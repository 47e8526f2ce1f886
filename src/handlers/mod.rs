//! Event handlers for status and balance updates

pub mod console;
pub mod composite;
pub mod plain_text;

// Re-export for convenience
pub use console::ConsoleEventHandler;
pub use composite::CompositeEventHandler;
pub use plain_text::PlainTextEventHandler;
