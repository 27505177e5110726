use super::rubric::*;
use super::{LeadScoringInput, ScoreComponent, ScoringFactor};

pub(crate) fn score_factors(input: &LeadScoringInput) -> Vec<ScoreComponent> {
    let total_bill = input.total_monthly_bill();

    vec![
        potential_savings(total_bill),
        switch_propensity(input),
        customer_profile(input, total_bill),
        engagement(input),
    ]
}

fn potential_savings(total_bill: f64) -> ScoreComponent {
    let monthly_saving = total_bill * EXPECTED_SAVING_RATE;
    let economy = monthly_saving / REFERENCE_MONTHLY_SAVING * SAVINGS_CAP;

    ScoreComponent {
        factor: ScoringFactor::PotentialSavings,
        points: economy.min(SAVINGS_CAP),
        notes: format!("estimated saving {monthly_saving:.2}/month on a {total_bill:.2} bill"),
    }
}

fn switch_propensity(input: &LeadScoringInput) -> ScoreComponent {
    let mut points = 0.0;
    let mut notes = Vec::new();

    if input.years_with_provider > LONG_TENURE_YEARS {
        points += LONG_TENURE_POINTS;
        notes.push(format!("{} years with provider", input.years_with_provider));
    } else if input.years_with_provider > MID_TENURE_YEARS {
        points += MID_TENURE_POINTS;
        notes.push(format!("{} years with provider", input.years_with_provider));
    }

    // Flat bonus: one prior switch counts the same as several.
    if input.change_history > 0 {
        points += PRIOR_SWITCH_POINTS;
        notes.push(format!("{} prior switch(es)", input.change_history));
    }

    ScoreComponent {
        factor: ScoringFactor::SwitchPropensity,
        points,
        notes: join_notes(notes, "recent customer with no switching history"),
    }
}

fn customer_profile(input: &LeadScoringInput, total_bill: f64) -> ScoreComponent {
    let mut points = 0.0;
    let mut notes = Vec::new();

    let (low, high) = IDEAL_BILL_RANGE;
    if total_bill >= low && total_bill <= high {
        points += IDEAL_BILL_POINTS;
        notes.push(format!("bill {total_bill:.2} within {low:.0}-{high:.0}"));
    }

    if input.contracted_power > HIGH_POWER_KVA {
        points += HIGH_POWER_POINTS;
        notes.push(format!("{} kVA contracted", input.contracted_power));
    }

    ScoreComponent {
        factor: ScoringFactor::CustomerProfile,
        points,
        notes: join_notes(notes, "outside the ideal customer profile"),
    }
}

fn engagement(input: &LeadScoringInput) -> ScoreComponent {
    let mut points = 0.0;
    let mut notes = Vec::new();

    if input.visited_calculator {
        points += CALCULATOR_POINTS;
        notes.push("used the savings calculator".to_string());
    }

    if input.time_on_page > ENGAGED_SECONDS {
        points += ENGAGED_TIME_POINTS;
        notes.push(format!("{}s on page", input.time_on_page));
    }

    ScoreComponent {
        factor: ScoringFactor::Engagement,
        points,
        notes: join_notes(notes, "no engagement signals"),
    }
}

fn join_notes(notes: Vec<String>, fallback: &str) -> String {
    if notes.is_empty() {
        fallback.to_string()
    } else {
        notes.join("; ")
    }
}
