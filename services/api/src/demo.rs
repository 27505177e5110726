use crate::infra::{in_memory_lead_service, parse_date, MemoryLeadService};
use chrono::{NaiveDate, Utc};
use clap::Args;
use lead_genius::error::AppError;
use lead_genius::leads::labels::{priority_label, status_label};
use lead_genius::leads::{
    ConsumptionProfile, ContactDetails, DashboardKpis, EngagementSignals, Household, HousingType,
    Lead, LeadFilter, LeadScoringInput, LeadServiceError, LeadSubmission, TariffType,
};
use serde::Serialize;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Average monthly electricity bill
    #[arg(long)]
    pub(crate) energy_bill: f64,
    /// Average monthly gas bill
    #[arg(long, default_value_t = 0.0)]
    pub(crate) gas_bill: f64,
    /// Years with the current provider
    #[arg(long, default_value_t = 0)]
    pub(crate) years_with_provider: u32,
    /// Provider switches in the last five years
    #[arg(long, default_value_t = 0)]
    pub(crate) change_history: u32,
    /// Contracted power in kVA
    #[arg(long, default_value_t = 3.45)]
    pub(crate) contracted_power: f64,
    /// The visitor used the savings calculator
    #[arg(long)]
    pub(crate) visited_calculator: bool,
    /// Seconds spent on the landing page
    #[arg(long, default_value_t = 0)]
    pub(crate) time_on_page: u64,
}

impl ScoreArgs {
    pub(crate) fn to_input(&self) -> LeadScoringInput {
        LeadScoringInput {
            avg_energy_bill: self.energy_bill,
            avg_gas_bill: self.gas_bill,
            years_with_provider: self.years_with_provider,
            change_history: self.change_history,
            contracted_power: self.contracted_power,
            visited_calculator: self.visited_calculator,
            time_on_page: self.time_on_page,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Reporting date for the "captured today" KPI (defaults to today, UTC)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the dashboard as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let service = in_memory_lead_service();
    let breakdown = service.preview(&args.to_input());

    let rendered = serde_json::to_string_pretty(&breakdown).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DemoDashboard {
    kpis: DashboardKpis,
    leads: Vec<Lead>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = in_memory_lead_service();
    seed_sample_leads(&service)?;

    let today = args.today.unwrap_or_else(|| Utc::now().date_naive());
    let leads = service.leads()?;
    let dashboard = DemoDashboard {
        kpis: DashboardKpis::from_leads(&leads, today),
        leads: LeadFilter::default().apply(&leads),
    };

    if args.json {
        let rendered = serde_json::to_string_pretty(&dashboard).map_err(std::io::Error::from)?;
        println!("{rendered}");
        return Ok(());
    }

    println!("LeadGenius back-office demo ({today})");
    println!("  Total leads:        {}", dashboard.kpis.total_leads);
    println!("  Captured today:     {}", dashboard.kpis.leads_today);
    println!("  Conversion rate:    {:.1}%", dashboard.kpis.conversion_rate);
    println!("  High priority:      {}", dashboard.kpis.high_priority);

    println!("\nLeads by priority");
    for lead in &dashboard.leads {
        println!(
            "  {:>3}  {:<6} {:<12} {:<22} {}",
            lead.score(),
            priority_label(lead.priority()),
            status_label(lead.status()),
            lead.details.contact.full_name,
            lead.postal_code()
        );
    }

    let settings = service.settings()?;
    println!(
        "\nOur plan: {} ({:.3}/kWh, {:.3}/m³) against {} competitor(s)",
        settings.our_plan.name,
        settings.our_plan.energy_price,
        settings.our_plan.gas_price,
        settings.competitors.len()
    );

    Ok(())
}

/// Load a fixed set of landing-page submissions through the normal intake path.
pub(crate) fn seed_sample_leads(service: &MemoryLeadService) -> Result<usize, LeadServiceError> {
    let samples = sample_submissions();
    let count = samples.len();
    for submission in samples {
        service.submit(submission)?;
    }
    Ok(count)
}

struct SampleLead {
    name: &'static str,
    email: &'static str,
    postal_code: &'static str,
    housing_type: HousingType,
    occupants: u32,
    provider: &'static str,
    energy_bill: f64,
    gas_bill: f64,
    contracted_power: f64,
    tariff_type: TariffType,
    years_with_provider: u32,
    change_history: u32,
    visited_calculator: bool,
    time_on_page: u64,
}

const SAMPLE_LEADS: [SampleLead; 4] = [
    SampleLead {
        name: "Ana Silva",
        email: "ana.silva@example.pt",
        postal_code: "1000-100 Lisboa",
        housing_type: HousingType::Apartment,
        occupants: 3,
        provider: "EDP",
        energy_bill: 85.0,
        gas_bill: 40.0,
        contracted_power: 6.9,
        tariff_type: TariffType::BiHourly,
        years_with_provider: 3,
        change_history: 0,
        visited_calculator: true,
        time_on_page: 185,
    },
    SampleLead {
        name: "João Martins",
        email: "joao.martins@example.pt",
        postal_code: "4000-001 Porto",
        housing_type: HousingType::House,
        occupants: 5,
        provider: "Galp",
        energy_bill: 260.0,
        gas_bill: 90.0,
        contracted_power: 10.35,
        tariff_type: TariffType::TriHourly,
        years_with_provider: 6,
        change_history: 1,
        visited_calculator: true,
        time_on_page: 320,
    },
    SampleLead {
        name: "Sofia Costa",
        email: "sofia.costa@example.pt",
        postal_code: "8000-200 Faro",
        housing_type: HousingType::Apartment,
        occupants: 1,
        provider: "Endesa",
        energy_bill: 35.0,
        gas_bill: 0.0,
        contracted_power: 3.45,
        tariff_type: TariffType::Simple,
        years_with_provider: 1,
        change_history: 0,
        visited_calculator: false,
        time_on_page: 45,
    },
    SampleLead {
        name: "Rui Almeida",
        email: "rui.almeida@example.pt",
        postal_code: "3000-050 Coimbra",
        housing_type: HousingType::House,
        occupants: 2,
        provider: "EDP",
        energy_bill: 60.0,
        gas_bill: 25.0,
        contracted_power: 5.75,
        tariff_type: TariffType::Simple,
        years_with_provider: 2,
        change_history: 2,
        visited_calculator: true,
        time_on_page: 90,
    },
];

fn sample_submissions() -> Vec<LeadSubmission> {
    SAMPLE_LEADS
        .iter()
        .map(|sample| LeadSubmission {
            contact: ContactDetails {
                full_name: sample.name.to_string(),
                email: sample.email.to_string(),
                phone: "+351910000000".to_string(),
                postal_code: sample.postal_code.to_string(),
            },
            household: Household {
                housing_type: sample.housing_type,
                occupants: sample.occupants,
            },
            consumption: ConsumptionProfile {
                current_energy_provider: sample.provider.to_string(),
                current_gas_provider: sample.provider.to_string(),
                avg_energy_bill: sample.energy_bill,
                avg_gas_bill: sample.gas_bill,
                contracted_power: sample.contracted_power,
                tariff_type: sample.tariff_type,
                years_with_provider: sample.years_with_provider,
                change_history: sample.change_history,
            },
            engagement: EngagementSignals {
                visited_calculator: sample.visited_calculator,
                time_on_page: sample.time_on_page,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lead_genius::leads::Priority;

    #[test]
    fn seeding_scores_every_sample_through_the_service() {
        let service = in_memory_lead_service();

        let seeded = seed_sample_leads(&service).expect("samples stored");

        assert_eq!(seeded, SAMPLE_LEADS.len());
        let leads = LeadFilter::default().apply(&service.leads().expect("listing"));
        let tiers: Vec<(i64, Priority)> = leads
            .iter()
            .map(|lead| (lead.score(), lead.priority()))
            .collect();
        assert_eq!(
            tiers,
            vec![
                (85, Priority::High),
                (65, Priority::Medium),
                (55, Priority::Medium),
                (4, Priority::Low),
            ]
        );
    }

    #[test]
    fn demo_dashboard_runs_in_json_mode() {
        let args = DemoArgs {
            today: Some(NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid")),
            json: true,
        };
        run_demo(args).expect("demo renders");
    }
}
