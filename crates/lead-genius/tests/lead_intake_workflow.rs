//! End-to-end lead intake: landing-page submission through scoring, storage and the
//! back-office views, using only the public service facade.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use lead_genius::leads::{
    calculate_score, export_csv, ConsumptionProfile, ContactDetails, DashboardKpis,
    EngagementSignals, Household, HousingType, InMemoryLeadRepository, InMemorySettingsStore,
    LeadFilter, LeadIntakeService, LeadScoringInput, LeadStatus, LeadSubmission, Priority,
    TariffType,
};

fn submission(
    name: &str,
    postal_code: &str,
    energy: f64,
    gas: f64,
    years: u32,
    elapsed: Duration,
) -> LeadSubmission {
    LeadSubmission {
        contact: ContactDetails {
            full_name: name.to_string(),
            email: format!("{}@example.pt", name.to_lowercase().replace(' ', ".")),
            phone: "+351910000000".to_string(),
            postal_code: postal_code.to_string(),
        },
        household: Household {
            housing_type: HousingType::House,
            occupants: 2,
        },
        consumption: ConsumptionProfile {
            current_energy_provider: "Galp".to_string(),
            current_gas_provider: "Galp".to_string(),
            avg_energy_bill: energy,
            avg_gas_bill: gas,
            contracted_power: 6.9,
            tariff_type: TariffType::Simple,
            years_with_provider: years,
            change_history: 1,
        },
        engagement: EngagementSignals::from_elapsed(true, elapsed),
    }
}

fn service() -> LeadIntakeService<InMemoryLeadRepository, InMemorySettingsStore> {
    LeadIntakeService::new(
        Arc::new(InMemoryLeadRepository::default()),
        Arc::new(InMemorySettingsStore::default()),
    )
}

#[test]
fn submitted_leads_flow_into_the_back_office() {
    let service = service();

    // 400/month: savings capped at 40, outside the ideal band.
    let high = service
        .submit(submission(
            "Rui Almeida",
            "1000-001 Lisboa",
            300.0,
            100.0,
            5,
            Duration::from_secs(200),
        ))
        .expect("high lead stored");
    // 125/month, two years with provider, quick visit.
    let medium = service
        .submit(submission(
            "Marta Lopes",
            "4000-002 Porto",
            85.0,
            40.0,
            2,
            Duration::from_millis(60_400),
        ))
        .expect("medium lead stored");

    assert_eq!(high.score(), 85);
    assert_eq!(high.priority(), Priority::High);
    assert_eq!(medium.score(), 60);
    assert_eq!(medium.priority(), Priority::Medium);
    assert_eq!(medium.details.engagement.time_on_page, 60);

    let leads = service.leads().expect("listing succeeds");
    assert_eq!(leads[0].id, medium.id, "newest lead listed first");

    let prioritized = LeadFilter::default().apply(&leads);
    assert_eq!(prioritized[0].id, high.id, "highest score sorted first");

    let porto = LeadFilter {
        location: Some("porto".to_string()),
        ..LeadFilter::default()
    }
    .apply(&leads);
    assert_eq!(porto.len(), 1);
    assert_eq!(porto[0].status(), LeadStatus::New);

    let kpis = DashboardKpis::from_leads(&leads, Utc::now().date_naive());
    assert_eq!(kpis.total_leads, 2);
    assert_eq!(kpis.high_priority, 1);
    assert_eq!(kpis.conversion_rate, 0.0);

    let csv = export_csv(&prioritized).expect("csv renders");
    assert_eq!(csv.lines().count(), 3);
    assert!(csv.contains("Rui Almeida"));
}

#[test]
fn stored_score_matches_direct_engine_call() {
    let service = service();
    let form = submission(
        "Ana Silva",
        "8000-100 Faro",
        55.0,
        0.0,
        1,
        Duration::from_secs(30),
    );
    let expected = calculate_score(&LeadScoringInput::new(&form.consumption, &form.engagement));

    let stored = service.submit(form).expect("lead stored");

    assert_eq!(stored.score(), expected.score);
    assert_eq!(stored.priority(), expected.priority);
}

#[test]
fn submissions_deserialize_from_front_end_payloads() {
    let payload = serde_json::json!({
        "fullName": "Sofia Costa",
        "email": "sofia@example.pt",
        "phone": "+351920000000",
        "postalCode": "8000-100 Faro",
        "housingType": "APARTMENT",
        "occupants": 1,
        "currentEnergyProvider": "EDP",
        "currentGasProvider": "Outro",
        "avgEnergyBill": 50,
        "avgGasBill": 20,
        "contractedPower": 3.45,
        "tariffType": "SIMPLE",
        "yearsWithProvider": 1,
        "changeHistory": 0,
        "visitedCalculator": true,
        "timeOnPage": 95
    });

    let submission: LeadSubmission = serde_json::from_value(payload).expect("payload parses");

    assert_eq!(submission.household.housing_type, HousingType::Apartment);
    assert_eq!(submission.consumption.total_monthly_bill(), 70.0);
    assert_eq!(submission.engagement.time_on_page, 95);

    let stored = service().submit(submission).expect("lead stored");
    let value = serde_json::to_value(&stored).expect("lead serializes");
    assert_eq!(value["fullName"], "Sofia Costa");
    assert_eq!(value["tariffType"], "SIMPLE");
    assert_eq!(value["priority"], "LOW");
    assert!(value.get("createdAt").is_some());
}
