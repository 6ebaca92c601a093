use crate::config::Config;
use crate::models::resume::ResumeRecord;
use crate::resume::store::ResumeStore;
use crate::uploads::storage::UploadStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one résumé record, shared by every request.
    pub resume: ResumeStore,
    pub uploads: UploadStore,
    pub config: Config,
}

impl AppState {
    /// Fresh state: default résumé, uploads written to `config.uploads_dir`.
    pub fn new(config: Config) -> Self {
        Self {
            resume: ResumeStore::new(ResumeRecord::default()),
            uploads: UploadStore::new(config.uploads_dir.clone()),
            config,
        }
    }
}
