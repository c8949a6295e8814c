//! Save snapshots, their encodings, and durable per-profile storage.

pub mod codec;
pub mod manager;
pub mod snapshot;

pub use manager::SaveManager;
pub use snapshot::{Role, SaveSnapshot};
