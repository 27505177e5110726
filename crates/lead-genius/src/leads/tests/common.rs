use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::leads::domain::{
    ConsumptionProfile, ContactDetails, Household, HousingType, Lead, LeadId, LeadStatus,
    LeadSubmission, NewLead, Priority, TariffType,
};
use crate::leads::engagement::EngagementSignals;
use crate::leads::memory::{InMemoryLeadRepository, InMemorySettingsStore};
use crate::leads::repository::{LeadRepository, RepositoryError, SettingsStore};
use crate::leads::scoring::LeadScoringInput;
use crate::leads::settings::AppSettings;
use crate::leads::{lead_router, LeadIntakeService};

/// The regression lead: 125/month total, long tenure, engaged visitor.
pub(super) fn reference_input() -> LeadScoringInput {
    LeadScoringInput {
        avg_energy_bill: 85.0,
        avg_gas_bill: 40.0,
        years_with_provider: 3,
        change_history: 0,
        contracted_power: 6.9,
        visited_calculator: true,
        time_on_page: 185,
    }
}

pub(super) fn minimal_input() -> LeadScoringInput {
    LeadScoringInput {
        avg_energy_bill: 0.0,
        avg_gas_bill: 0.0,
        years_with_provider: 0,
        change_history: 0,
        contracted_power: 1.15,
        visited_calculator: false,
        time_on_page: 0,
    }
}

/// Every factor at its reachable maximum. The savings cap needs a bill above the ideal
/// profile band, so the profile bonus is limited to the power award.
pub(super) fn strongest_input() -> LeadScoringInput {
    LeadScoringInput {
        avg_energy_bill: 300.0,
        avg_gas_bill: 100.0,
        years_with_provider: 5,
        change_history: 2,
        contracted_power: 6.9,
        visited_calculator: true,
        time_on_page: 300,
    }
}

pub(super) fn submission() -> LeadSubmission {
    LeadSubmission {
        contact: ContactDetails {
            full_name: "Ana Silva".to_string(),
            email: "ana.silva@example.pt".to_string(),
            phone: "+351912345678".to_string(),
            postal_code: "1000-100 Lisboa".to_string(),
        },
        household: Household {
            housing_type: HousingType::Apartment,
            occupants: 3,
        },
        consumption: ConsumptionProfile {
            current_energy_provider: "EDP".to_string(),
            current_gas_provider: "Galp".to_string(),
            avg_energy_bill: 85.0,
            avg_gas_bill: 40.0,
            contracted_power: 6.9,
            tariff_type: TariffType::BiHourly,
            years_with_provider: 3,
            change_history: 0,
        },
        engagement: EngagementSignals {
            visited_calculator: true,
            time_on_page: 185,
        },
    }
}

pub(super) fn submission_json() -> Value {
    serde_json::json!({
        "fullName": "João Martins",
        "email": "joao@example.pt",
        "phone": "+351934567890",
        "postalCode": "4000-001 Porto",
        "housingType": "HOUSE",
        "occupants": 4,
        "currentEnergyProvider": "Endesa",
        "currentGasProvider": "Endesa",
        "avgEnergyBill": 120,
        "avgGasBill": 30,
        "contractedPower": 10.35,
        "tariffType": "TRI_HOURLY",
        "yearsWithProvider": 4,
        "changeHistory": 1,
        "visitedCalculator": true,
        "timeOnPage": 240
    })
}

pub(super) fn created_on(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn stored_lead(
    id: &str,
    postal_code: &str,
    score: i64,
    status: LeadStatus,
    created_at: DateTime<Utc>,
) -> Lead {
    let mut details = submission();
    details.contact.postal_code = postal_code.to_string();
    Lead {
        id: LeadId(id.to_string()),
        created_at,
        details: NewLead {
            contact: details.contact,
            household: details.household,
            consumption: details.consumption,
            engagement: details.engagement,
            score,
            priority: Priority::from_score(score),
            status,
            contact_history: Vec::new(),
        },
    }
}

pub(super) type MemoryService = LeadIntakeService<InMemoryLeadRepository, InMemorySettingsStore>;

pub(super) fn build_service() -> (
    MemoryService,
    Arc<InMemoryLeadRepository>,
    Arc<InMemorySettingsStore>,
) {
    let repository = Arc::new(InMemoryLeadRepository::default());
    let settings = Arc::new(InMemorySettingsStore::default());
    let service = LeadIntakeService::new(repository.clone(), settings.clone());
    (service, repository, settings)
}

pub(super) fn router_with_service(service: MemoryService) -> axum::Router {
    lead_router(Arc::new(service))
}

pub(super) struct ConflictRepository;

impl LeadRepository for ConflictRepository {
    fn insert(&self, _lead: NewLead) -> Result<Lead, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn list_recent(&self) -> Result<Vec<Lead>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl LeadRepository for UnavailableRepository {
    fn insert(&self, _lead: NewLead) -> Result<Lead, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list_recent(&self) -> Result<Vec<Lead>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) struct ReadOnlySettings;

impl SettingsStore for ReadOnlySettings {
    fn read(&self) -> Result<AppSettings, RepositoryError> {
        Ok(AppSettings::default())
    }

    fn write(&self, _settings: AppSettings) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}
