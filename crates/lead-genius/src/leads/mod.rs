//! Landing-page lead intake, scoring, and back-office reporting.
//!
//! Submissions are scored exactly once by [`LeadScoringEngine`] at intake and stored
//! through the [`LeadRepository`] seam; the back office reads them back filtered, sorted
//! and summarised.

pub mod backoffice;
pub mod domain;
pub mod engagement;
pub mod labels;
pub mod memory;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod settings;

#[cfg(test)]
mod tests;

pub use backoffice::{export_csv, DashboardKpis, ExportError, LeadFilter};
pub use domain::{
    ConsumptionProfile, ContactDetails, ContactEntry, ContactKind, Household, HousingType, Lead,
    LeadId, LeadStatus, LeadSubmission, NewLead, Priority, TariffType,
};
pub use engagement::EngagementSignals;
pub use memory::{InMemoryLeadRepository, InMemorySettingsStore};
pub use repository::{LeadRepository, RepositoryError, SettingsStore};
pub use router::{lead_router, LeadListQuery};
pub use scoring::{
    calculate_score, LeadScoringEngine, LeadScoringInput, ScoreBreakdown, ScoreComponent,
    ScoringFactor, ScoringResult,
};
pub use service::{LeadIntakeService, LeadServiceError};
pub use settings::{AppSettings, Competitor, PlanPricing};
