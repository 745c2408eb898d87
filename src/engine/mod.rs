pub mod aggregate;
pub mod impact;
pub mod inputs;
pub mod insights;
pub mod projection;
pub mod tdee;

pub use aggregate::{calculate_overall, explain_overall, OverallScores, ScoreBreakdown};
pub use impact::{calculate_impacts, DomainImpacts};
pub use inputs::{validate_inputs, validate_profile, LifestyleInputs, Profile, Sex};
pub use insights::{BalanceEntry, MetricCard, Streak};
pub use projection::{calculate_milestones, generate_projection, Milestones, ProjectionPoint};
pub use tdee::{activity_multiplier, calculate_bmr, calculate_tdee, ActivityLevel};

use serde::Serialize;

/// Everything the dashboard shows for one input snapshot.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Evaluation {
    pub impacts: DomainImpacts,
    pub overall: OverallScores,
    pub projection: Vec<ProjectionPoint>,
    pub milestones: Milestones,
    pub balance: Vec<BalanceEntry>,
    pub metrics: Vec<MetricCard>,
    pub insights: Vec<String>,
}

/// Recompute every output from scratch for `inputs`.
pub fn evaluate(inputs: &LifestyleInputs) -> Evaluation {
    let impacts = calculate_impacts(inputs);
    let overall = calculate_overall(&impacts);
    let balance = insights::balance(&impacts);

    Evaluation {
        projection: generate_projection(&impacts, &overall),
        milestones: calculate_milestones(&impacts, &overall),
        metrics: insights::key_metrics(inputs, &impacts),
        insights: insights::insights(&impacts, &balance),
        balance,
        impacts,
        overall,
    }
}
