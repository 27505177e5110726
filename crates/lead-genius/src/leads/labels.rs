//! Display labels shown to back-office staff. Codes stay in the domain enums; only
//! presentation layers (CSV export, dashboards) read from here.

use super::domain::{HousingType, LeadStatus, Priority, TariffType};

pub const fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "Alta",
        Priority::Medium => "Média",
        Priority::Low => "Baixa",
    }
}

pub const fn status_label(status: LeadStatus) -> &'static str {
    match status {
        LeadStatus::New => "Novo",
        LeadStatus::Contacted => "Contactado",
        LeadStatus::Scheduled => "Agendado",
        LeadStatus::Converted => "Convertido",
        LeadStatus::Nurturing => "Em Nutrição",
    }
}

pub const fn housing_label(housing: HousingType) -> &'static str {
    match housing {
        HousingType::Apartment => "Apartamento",
        HousingType::House => "Moradia",
    }
}

pub const fn tariff_label(tariff: TariffType) -> &'static str {
    match tariff {
        TariffType::Simple => "Simples",
        TariffType::BiHourly => "Bi-horária",
        TariffType::TriHourly => "Tri-horária",
    }
}
