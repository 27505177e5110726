use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::engagement::EngagementSignals;

/// Identifier assigned by the repository when a lead is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LeadId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HousingType {
    Apartment,
    House,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TariffType {
    Simple,
    BiHourly,
    TriHourly,
}

/// Sales pipeline stage of a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStatus {
    New,
    Contacted,
    Scheduled,
    Converted,
    Nurturing,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 5] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Scheduled,
        LeadStatus::Converted,
        LeadStatus::Nurturing,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            LeadStatus::New => "NEW",
            LeadStatus::Contacted => "CONTACTED",
            LeadStatus::Scheduled => "SCHEDULED",
            LeadStatus::Converted => "CONVERTED",
            LeadStatus::Nurturing => "NURTURING",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.code().eq_ignore_ascii_case(code.trim()))
    }
}

/// Triage bucket derived from the lead score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub const fn code(self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.code().eq_ignore_ascii_case(code.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Call,
    Email,
    Visit,
}

/// A single touchpoint recorded by the sales team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub id: String,
    pub date: DateTime<Utc>,
    pub notes: String,
    #[serde(rename = "type")]
    pub kind: ContactKind,
}

/// Personal data collected on the first form step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Household {
    pub housing_type: HousingType,
    pub occupants: u32,
}

/// Self-reported consumption and provider history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionProfile {
    pub current_energy_provider: String,
    pub current_gas_provider: String,
    pub avg_energy_bill: f64,
    pub avg_gas_bill: f64,
    /// kVA
    pub contracted_power: f64,
    pub tariff_type: TariffType,
    pub years_with_provider: u32,
    /// Provider switches in the last five years.
    pub change_history: u32,
}

impl ConsumptionProfile {
    pub fn total_monthly_bill(&self) -> f64 {
        self.avg_energy_bill + self.avg_gas_bill
    }
}

/// Landing page form payload as posted by the front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadSubmission {
    #[serde(flatten)]
    pub contact: ContactDetails,
    #[serde(flatten)]
    pub household: Household,
    #[serde(flatten)]
    pub consumption: ConsumptionProfile,
    #[serde(flatten)]
    pub engagement: EngagementSignals,
}

/// A scored lead that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    #[serde(flatten)]
    pub contact: ContactDetails,
    #[serde(flatten)]
    pub household: Household,
    #[serde(flatten)]
    pub consumption: ConsumptionProfile,
    #[serde(flatten)]
    pub engagement: EngagementSignals,
    pub score: i64,
    pub priority: Priority,
    pub status: LeadStatus,
    #[serde(default)]
    pub contact_history: Vec<ContactEntry>,
}

/// Stored lead as listed in the back office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub details: NewLead,
}

impl Lead {
    pub fn score(&self) -> i64 {
        self.details.score
    }

    pub fn priority(&self) -> Priority {
        self.details.priority
    }

    pub fn status(&self) -> LeadStatus {
        self.details.status
    }

    pub fn postal_code(&self) -> &str {
        &self.details.contact.postal_code
    }
}
