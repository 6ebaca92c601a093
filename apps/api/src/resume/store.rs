use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::resume::{ResumePatch, ResumeRecord};

/// Process-wide handle to the one résumé record.
///
/// Cloning shares the record. Each merge runs under the write lock, so
/// concurrent updates never interleave field by field; there is no version
/// check, and the last merge to take the lock wins.
#[derive(Debug, Clone, Default)]
pub struct ResumeStore {
    record: Arc<RwLock<ResumeRecord>>,
}

impl ResumeStore {
    pub fn new(initial: ResumeRecord) -> Self {
        Self {
            record: Arc::new(RwLock::new(initial)),
        }
    }

    /// Snapshot of the current record.
    pub async fn get(&self) -> ResumeRecord {
        self.record.read().await.clone()
    }

    /// Merges `patch` over the stored record and returns the result.
    pub async fn merge(&self, patch: ResumePatch) -> ResumeRecord {
        let mut guard = self.record.write().await;
        guard.apply(patch);
        guard.clone()
    }
}
