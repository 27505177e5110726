use serde::{Deserialize, Serialize};

/// Per-unit prices of the plan we sell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPricing {
    pub name: String,
    /// Price per kWh.
    pub energy_price: f64,
    /// Price per m³.
    pub gas_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub name: String,
    pub logo_url: String,
    pub energy_price: f64,
    pub gas_price: f64,
}

/// Back-office editable pricing used by the landing page and proposal guide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub our_plan: PlanPricing,
    pub competitors: Vec<Competitor>,
    /// Advertised average saving as a fraction (0.22 = 22%).
    pub landing_page_savings_percentage: f64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            our_plan: PlanPricing {
                name: "LeadGenius Energia".to_string(),
                energy_price: 0.14,
                gas_price: 0.07,
            },
            competitors: vec![
                competitor("EDP", 0.16, 0.08),
                competitor("Galp", 0.17, 0.09),
                competitor("Endesa", 0.155, 0.085),
            ],
            landing_page_savings_percentage: 0.22,
        }
    }
}

fn competitor(name: &str, energy_price: f64, gas_price: f64) -> Competitor {
    Competitor {
        name: name.to_string(),
        logo_url: format!("https://via.placeholder.com/100x40?text={name}"),
        energy_price,
        gas_price,
    }
}

impl AppSettings {
    /// Reject values the settings form would never produce.
    pub fn validate(&self) -> Result<(), String> {
        if self.our_plan.name.trim().is_empty() {
            return Err("plan name must not be empty".to_string());
        }
        check_price(&self.our_plan.name, "energy", self.our_plan.energy_price)?;
        check_price(&self.our_plan.name, "gas", self.our_plan.gas_price)?;

        for competitor in &self.competitors {
            check_price(&competitor.name, "energy", competitor.energy_price)?;
            check_price(&competitor.name, "gas", competitor.gas_price)?;
        }

        let savings = self.landing_page_savings_percentage;
        if !(0.0..=1.0).contains(&savings) {
            return Err(format!(
                "landing page savings percentage {savings} must be between 0 and 1"
            ));
        }

        Ok(())
    }
}

fn check_price(owner: &str, kind: &str, price: f64) -> Result<(), String> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(format!("{owner} {kind} price {price} must be a non-negative number"))
    }
}
