//! Lead scoring rubric.
//!
//! A lead earns points across four independent, individually capped factors:
//! potential savings (40), propensity to switch (30), ideal customer profile (20)
//! and engagement (10). The sum is clamped to 100, rounded half up, and mapped onto a
//! priority tier. Scoring is pure: no clock, no I/O, no state between calls.

mod policy;
pub mod rubric;
mod rules;

use serde::{Deserialize, Serialize};

use super::domain::{ConsumptionProfile, Priority};
use super::engagement::EngagementSignals;
pub(crate) use policy::finalize_score;

/// Everything the rubric looks at. Values are taken as-is; validation happens upstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadScoringInput {
    pub avg_energy_bill: f64,
    pub avg_gas_bill: f64,
    pub years_with_provider: u32,
    pub change_history: u32,
    pub contracted_power: f64,
    pub visited_calculator: bool,
    pub time_on_page: u64,
}

impl LeadScoringInput {
    pub fn new(consumption: &ConsumptionProfile, engagement: &EngagementSignals) -> Self {
        Self {
            avg_energy_bill: consumption.avg_energy_bill,
            avg_gas_bill: consumption.avg_gas_bill,
            years_with_provider: consumption.years_with_provider,
            change_history: consumption.change_history,
            contracted_power: consumption.contracted_power,
            visited_calculator: engagement.visited_calculator,
            time_on_page: engagement.time_on_page,
        }
    }

    pub fn total_monthly_bill(&self) -> f64 {
        self.avg_energy_bill + self.avg_gas_bill
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub score: i64,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringFactor {
    PotentialSavings,
    SwitchPropensity,
    CustomerProfile,
    Engagement,
}

impl ScoringFactor {
    pub const fn cap(self) -> f64 {
        match self {
            ScoringFactor::PotentialSavings => rubric::SAVINGS_CAP,
            ScoringFactor::SwitchPropensity => rubric::SWITCH_PROPENSITY_CAP,
            ScoringFactor::CustomerProfile => rubric::PROFILE_CAP,
            ScoringFactor::Engagement => rubric::ENGAGEMENT_CAP,
        }
    }
}

/// Points awarded by a single factor, kept for sales-side transparency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoringFactor,
    pub points: f64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub components: Vec<ScoreComponent>,
    /// Factor sum before the final clamp and rounding.
    pub raw_total: f64,
    pub result: ScoringResult,
}

/// Stateless scorer applying the rubric.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadScoringEngine;

impl LeadScoringEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate_score(&self, input: &LeadScoringInput) -> ScoringResult {
        self.explain(input).result
    }

    pub fn explain(&self, input: &LeadScoringInput) -> ScoreBreakdown {
        let components = rules::score_factors(input);
        let raw_total: f64 = components.iter().map(|component| component.points).sum();
        let score = finalize_score(raw_total);

        ScoreBreakdown {
            components,
            raw_total,
            result: ScoringResult {
                score,
                priority: Priority::from_score(score),
            },
        }
    }
}

/// Convenience wrapper around [`LeadScoringEngine::calculate_score`].
pub fn calculate_score(input: &LeadScoringInput) -> ScoringResult {
    LeadScoringEngine.calculate_score(input)
}
