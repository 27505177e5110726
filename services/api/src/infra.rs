use chrono::NaiveDate;
use lead_genius::leads::{
    AppSettings, InMemoryLeadRepository, InMemorySettingsStore, LeadIntakeService,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

pub(crate) type MemoryLeadService =
    LeadIntakeService<InMemoryLeadRepository, InMemorySettingsStore>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn in_memory_lead_service() -> MemoryLeadService {
    LeadIntakeService::new(
        Arc::new(InMemoryLeadRepository::default()),
        Arc::new(InMemorySettingsStore::new(AppSettings::default())),
    )
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
