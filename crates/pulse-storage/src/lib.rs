//! Persistence primitives for journal sessions: slot backends, atomic file I/O and paths

mod backend;
mod io;
mod paths;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use io::{atomic_write, read_optional};
pub use paths::Paths;
