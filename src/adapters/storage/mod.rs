//! Storage Adapters
//!
//! Implementations of the AttemptStore port.
//!
//! ## Available Adapters
//!
//! - **FileAttemptStore** - Stores attempts as JSON files on disk
//! - **InMemoryAttemptStore** - Stores attempts in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileAttemptStore, InMemoryAttemptStore};
//!
//! // Production: file-based storage
//! let store = FileAttemptStore::new("./data/attempts");
//!
//! // Testing: in-memory storage
//! let store = InMemoryAttemptStore::new();
//! ```

mod file_attempt_store;
mod in_memory_attempt_store;

pub use file_attempt_store::FileAttemptStore;
pub use in_memory_attempt_store::InMemoryAttemptStore;
