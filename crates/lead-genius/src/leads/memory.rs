use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::domain::{Lead, LeadId, NewLead};
use super::repository::{LeadRepository, RepositoryError, SettingsStore};
use super::settings::AppSettings;

/// Process-local lead store used by the demo server and tests.
#[derive(Default, Clone)]
pub struct InMemoryLeadRepository {
    leads: Arc<Mutex<Vec<Lead>>>,
    sequence: Arc<AtomicU64>,
}

impl InMemoryLeadRepository {
    fn next_id(&self) -> LeadId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        LeadId(format!("lead-{id:06}"))
    }

    pub fn len(&self) -> Result<usize, RepositoryError> {
        self.leads
            .lock()
            .map(|guard| guard.len())
            .map_err(|_| RepositoryError::Unavailable("lead store lock poisoned".to_string()))
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }
}

impl LeadRepository for InMemoryLeadRepository {
    fn insert(&self, lead: NewLead) -> Result<Lead, RepositoryError> {
        let mut guard = self
            .leads
            .lock()
            .map_err(|_| RepositoryError::Unavailable("lead store lock poisoned".to_string()))?;

        let stored = Lead {
            id: self.next_id(),
            created_at: Utc::now(),
            details: lead,
        };
        guard.push(stored.clone());
        Ok(stored)
    }

    fn list_recent(&self) -> Result<Vec<Lead>, RepositoryError> {
        let guard = self
            .leads
            .lock()
            .map_err(|_| RepositoryError::Unavailable("lead store lock poisoned".to_string()))?;

        // Insertion order breaks timestamp ties so the latest submission stays on top.
        let mut leads: Vec<Lead> = guard.iter().rev().cloned().collect();
        leads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(leads)
    }
}

#[derive(Default, Clone)]
pub struct InMemorySettingsStore {
    settings: Arc<Mutex<AppSettings>>,
}

impl InMemorySettingsStore {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            settings: Arc::new(Mutex::new(settings)),
        }
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn read(&self) -> Result<AppSettings, RepositoryError> {
        self.settings
            .lock()
            .map(|guard| guard.clone())
            .map_err(|_| RepositoryError::Unavailable("settings lock poisoned".to_string()))
    }

    fn write(&self, settings: AppSettings) -> Result<(), RepositoryError> {
        let mut guard = self
            .settings
            .lock()
            .map_err(|_| RepositoryError::Unavailable("settings lock poisoned".to_string()))?;
        *guard = settings;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poisoned_store_reports_unavailable() {
        let repository = InMemoryLeadRepository::default();
        let shared = repository.clone();
        let _ = std::thread::spawn(move || {
            let _guard = shared.leads.lock().expect("first lock");
            panic!("writer crashed mid-update");
        })
        .join();

        assert!(matches!(
            repository.len(),
            Err(RepositoryError::Unavailable(_))
        ));
        assert!(matches!(
            repository.is_empty(),
            Err(RepositoryError::Unavailable(_))
        ));
        assert!(matches!(
            repository.list_recent(),
            Err(RepositoryError::Unavailable(_))
        ));
    }
}
