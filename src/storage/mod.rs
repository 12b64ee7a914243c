//! Storage abstractions for snapshot persistence.
//!
//! Each run replaces the whole snapshot; nothing is merged or appended.
//!
//! ```text
//! kyuko_info.json
//! {
//!   "updated_at": "2025-12-01 07:00:00",
//!   "data": {
//!     "12-01": ["12月1日(月)", "第1講時 数学 休講"]
//!   }
//! }
//! ```

pub mod local;

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Snapshot;

// Re-export for convenience
pub use local::LocalStorage;

/// Trait for snapshot storage backends.
#[async_trait]
pub trait SnapshotStorage: Send + Sync {
    /// Overwrite the stored snapshot, returning where it was written.
    async fn save(&self, snapshot: &Snapshot) -> Result<PathBuf>;

    /// Load the stored snapshot, `None` if there is none yet.
    async fn load(&self) -> Result<Option<Snapshot>>;
}
