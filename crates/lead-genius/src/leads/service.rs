use std::sync::Arc;

use tracing::{info, warn};

use super::domain::{Lead, LeadStatus, LeadSubmission, NewLead};
use super::repository::{LeadRepository, RepositoryError, SettingsStore};
use super::scoring::{LeadScoringEngine, LeadScoringInput, ScoreBreakdown};
use super::settings::AppSettings;

/// Scores landing-page submissions and hands them to storage; serves the back office.
pub struct LeadIntakeService<R, S> {
    repository: Arc<R>,
    settings: Arc<S>,
    engine: LeadScoringEngine,
}

impl<R, S> LeadIntakeService<R, S>
where
    R: LeadRepository + 'static,
    S: SettingsStore + 'static,
{
    pub fn new(repository: Arc<R>, settings: Arc<S>) -> Self {
        Self {
            repository,
            settings,
            engine: LeadScoringEngine::new(),
        }
    }

    /// Score a submission once and store it as a new lead.
    pub fn submit(&self, submission: LeadSubmission) -> Result<Lead, LeadServiceError> {
        let LeadSubmission {
            contact,
            household,
            consumption,
            engagement,
        } = submission;

        let input = LeadScoringInput::new(&consumption, &engagement);
        let result = self.engine.calculate_score(&input);

        let lead = NewLead {
            contact,
            household,
            consumption,
            engagement,
            score: result.score,
            priority: result.priority,
            status: LeadStatus::New,
            contact_history: Vec::new(),
        };

        match self.repository.insert(lead) {
            Ok(stored) => {
                info!(
                    lead_id = %stored.id.0,
                    score = stored.score(),
                    priority = stored.priority().code(),
                    "lead stored"
                );
                Ok(stored)
            }
            Err(err) => {
                warn!(error = %err, score = result.score, "failed to store lead");
                Err(err.into())
            }
        }
    }

    /// Score without storing, for the proposal guide and CLI.
    pub fn preview(&self, input: &LeadScoringInput) -> ScoreBreakdown {
        self.engine.explain(input)
    }

    pub fn leads(&self) -> Result<Vec<Lead>, LeadServiceError> {
        Ok(self.repository.list_recent()?)
    }

    pub fn settings(&self) -> Result<AppSettings, LeadServiceError> {
        Ok(self.settings.read()?)
    }

    pub fn save_settings(&self, settings: AppSettings) -> Result<AppSettings, LeadServiceError> {
        settings
            .validate()
            .map_err(LeadServiceError::InvalidSettings)?;
        self.settings.write(settings.clone())?;
        info!(
            plan = %settings.our_plan.name,
            competitors = settings.competitors.len(),
            "settings updated"
        );
        Ok(settings)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LeadServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}
