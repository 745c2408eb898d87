use serde::Serialize;

use super::aggregate::OverallScores;
use super::impact::DomainImpacts;

/// Starting body weight for the projection, in pounds.
pub const BASE_WEIGHT_LBS: f64 = 160.0;

/// Projected weight never drops below this, in pounds.
pub const MIN_WEIGHT_LBS: f64 = 120.0;

/// Health grows by this fraction of its current value per elapsed week.
pub const HEALTH_GROWTH_PER_WEEK: f64 = 0.02;

/// Happiness grows by (resilience - 1) times this, per elapsed week.
pub const HAPPINESS_GROWTH_SCALE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Horizon {
    pub label: &'static str,
    /// Weeks elapsed, drives weight, health, productivity and happiness
    pub weeks: f64,
    /// Months elapsed, drives income
    pub months: f64,
}

/// The fixed projection horizons, in display order.
pub const HORIZONS: [Horizon; 5] = [
    Horizon { label: "Now", weeks: 0.0, months: 0.0 },
    Horizon { label: "1 mo", weeks: 4.0, months: 1.0 },
    Horizon { label: "3 mo", weeks: 12.0, months: 3.0 },
    Horizon { label: "6 mo", weeks: 26.0, months: 6.0 },
    Horizon { label: "1 yr", weeks: 52.0, months: 12.0 },
];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProjectionPoint {
    pub label: &'static str,
    /// Body weight in pounds
    pub weight: f64,
    pub health: f64,
    pub productivity: f64,
    /// Cumulative extra income in dollars
    pub income: f64,
    pub happiness: f64,
}

/// Headline numbers shown next to the projection charts.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Milestones {
    /// Health score after 30 days
    pub health_30_days: i64,
    /// Extra income after 90 days
    pub income_90_days: i64,
    /// Pounds lost over a year
    pub weight_loss_1_year: f64,
    /// Extra income over a year
    pub income_1_year: i64,
}

fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Project one horizon. Each point is computed directly from the current
/// scores; nothing carries over from earlier horizons.
pub fn project_point(horizon: &Horizon, impacts: &DomainImpacts, overall: &OverallScores) -> ProjectionPoint {
    let weeks = horizon.weeks;
    ProjectionPoint {
        label: horizon.label,
        weight: (BASE_WEIGHT_LBS - impacts.exercise.weekly_weight_loss * weeks).max(MIN_WEIGHT_LBS),
        health: clamp_score(overall.health + overall.health * HEALTH_GROWTH_PER_WEEK * weeks),
        productivity: clamp_score(overall.productivity + impacts.deep_work.skill_growth * weeks),
        income: impacts.deep_work.income_projection * 30.0 * horizon.months,
        happiness: clamp_score(
            overall.happiness
                + (impacts.social.emotional_resilience - 1.0) * HAPPINESS_GROWTH_SCALE * weeks,
        ),
    }
}

pub fn generate_projection(impacts: &DomainImpacts, overall: &OverallScores) -> Vec<ProjectionPoint> {
    HORIZONS
        .iter()
        .map(|horizon| project_point(horizon, impacts, overall))
        .collect()
}

pub fn calculate_milestones(impacts: &DomainImpacts, overall: &OverallScores) -> Milestones {
    Milestones {
        health_30_days: clamp_score(overall.health * 1.08).round() as i64,
        income_90_days: (impacts.deep_work.income_projection * 90.0).round() as i64,
        weight_loss_1_year: impacts.exercise.weekly_weight_loss * 52.0,
        income_1_year: (impacts.deep_work.income_projection * 365.0).round() as i64,
    }
}
