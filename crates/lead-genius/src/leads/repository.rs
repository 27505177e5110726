use super::domain::{Lead, NewLead};
use super::settings::AppSettings;

/// Storage for scored leads so the service can run against any backend.
pub trait LeadRepository: Send + Sync {
    /// Persist a lead, assigning its id and creation timestamp.
    fn insert(&self, lead: NewLead) -> Result<Lead, RepositoryError>;
    /// All leads, newest first.
    fn list_recent(&self) -> Result<Vec<Lead>, RepositoryError>;
}

/// Storage for the single back-office settings document.
pub trait SettingsStore: Send + Sync {
    fn read(&self) -> Result<AppSettings, RepositoryError>;
    fn write(&self, settings: AppSettings) -> Result<(), RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
