use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{Lead, LeadStatus, Priority};
use super::labels::{housing_label, priority_label, status_label, tariff_label};

/// Lead list filter used by the back-office table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFilter {
    /// Case-insensitive fragment of the postal code.
    pub location: Option<String>,
    pub status: Option<LeadStatus>,
    pub priority: Option<Priority>,
}

impl LeadFilter {
    pub fn matches(&self, lead: &Lead) -> bool {
        let location_ok = match self.location.as_deref().map(str::trim) {
            Some(fragment) if !fragment.is_empty() => lead
                .postal_code()
                .to_lowercase()
                .contains(&fragment.to_lowercase()),
            _ => true,
        };

        location_ok
            && self.status.map_or(true, |status| lead.status() == status)
            && self
                .priority
                .map_or(true, |priority| lead.priority() == priority)
    }

    /// Matching leads, highest score first. Ties keep their input order.
    pub fn apply(&self, leads: &[Lead]) -> Vec<Lead> {
        let mut selected: Vec<Lead> = leads
            .iter()
            .filter(|lead| self.matches(lead))
            .cloned()
            .collect();
        selected.sort_by(|a, b| b.score().cmp(&a.score()));
        selected
    }
}

/// Headline numbers shown above the lead table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardKpis {
    pub total_leads: usize,
    pub leads_today: usize,
    /// Percentage of converted leads, one decimal place.
    pub conversion_rate: f64,
    pub high_priority: usize,
}

impl DashboardKpis {
    pub fn from_leads(leads: &[Lead], today: NaiveDate) -> Self {
        let total_leads = leads.len();
        let leads_today = leads
            .iter()
            .filter(|lead| lead.created_at.date_naive() == today)
            .count();
        let converted = leads
            .iter()
            .filter(|lead| lead.status() == LeadStatus::Converted)
            .count();
        let high_priority = leads
            .iter()
            .filter(|lead| lead.priority() == Priority::High)
            .count();

        let conversion_rate = if total_leads == 0 {
            0.0
        } else {
            let percent = converted as f64 / total_leads as f64 * 100.0;
            (percent * 10.0).round() / 10.0
        };

        Self {
            total_leads,
            leads_today,
            conversion_rate,
            high_priority,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv encoding failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv buffer could not be flushed: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv output is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

const EXPORT_COLUMNS: [&str; 17] = [
    "id",
    "created_at",
    "full_name",
    "email",
    "phone",
    "postal_code",
    "housing",
    "occupants",
    "energy_provider",
    "gas_provider",
    "avg_energy_bill",
    "avg_gas_bill",
    "contracted_power_kva",
    "tariff",
    "score",
    "priority",
    "status",
];

/// Field order must match `EXPORT_COLUMNS`.
#[derive(Serialize)]
struct LeadExportRow<'a> {
    id: &'a str,
    created_at: String,
    full_name: &'a str,
    email: &'a str,
    phone: &'a str,
    postal_code: &'a str,
    housing: &'static str,
    occupants: u32,
    energy_provider: &'a str,
    gas_provider: &'a str,
    avg_energy_bill: f64,
    avg_gas_bill: f64,
    contracted_power_kva: f64,
    tariff: &'static str,
    score: i64,
    priority: &'static str,
    status: &'static str,
}

impl<'a> From<&'a Lead> for LeadExportRow<'a> {
    fn from(lead: &'a Lead) -> Self {
        let details = &lead.details;
        Self {
            id: &lead.id.0,
            created_at: lead.created_at.to_rfc3339(),
            full_name: &details.contact.full_name,
            email: &details.contact.email,
            phone: &details.contact.phone,
            postal_code: &details.contact.postal_code,
            housing: housing_label(details.household.housing_type),
            occupants: details.household.occupants,
            energy_provider: &details.consumption.current_energy_provider,
            gas_provider: &details.consumption.current_gas_provider,
            avg_energy_bill: details.consumption.avg_energy_bill,
            avg_gas_bill: details.consumption.avg_gas_bill,
            contracted_power_kva: details.consumption.contracted_power,
            tariff: tariff_label(details.consumption.tariff_type),
            score: details.score,
            priority: priority_label(details.priority),
            status: status_label(details.status),
        }
    }
}

/// Render leads as CSV with a header row, in the order given. An empty list still
/// yields the header.
pub fn export_csv(leads: &[Lead]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if leads.is_empty() {
        writer.write_record(EXPORT_COLUMNS)?;
    }
    for lead in leads {
        writer.serialize(LeadExportRow::from(lead))?;
    }
    writer.flush()?;

    let buffer = writer
        .into_inner()
        .map_err(|err| std::io::Error::new(err.error().kind(), err.error().to_string()))?;
    Ok(String::from_utf8(buffer)?)
}
