pub mod entry;
pub mod error;
pub mod target;

pub use entry::JournalEntry;
pub use error::SpillError;
pub use target::ReflectionTarget;
