use serde::Serialize;

use super::impact::DomainImpacts;

/// The three headline scores, each clamped to 0-100.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct OverallScores {
    pub health: f64,
    pub productivity: f64,
    pub happiness: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TermContribution {
    pub label: String,       // e.g. "Sleep health", "Exercise clarity"
    pub description: String, // e.g. "70.0 x 0.3"
    pub contribution: f64,   // Weighted value added to the sum
}

/// How a headline score was assembled, for verbose output.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoreBreakdown {
    pub name: &'static str,
    pub terms: Vec<TermContribution>,
    /// Sum of contributions before clamping
    pub raw: f64,
    pub score: f64,
}

fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

fn health_terms(impacts: &DomainImpacts) -> [(&'static str, f64, f64); 4] {
    [
        ("Sleep health", impacts.sleep.health_score, 0.30),
        ("Exercise health", impacts.exercise.health_score, 0.30),
        ("Nutrition health", impacts.nutrition.health_score, 0.25),
        ("Social mental health", impacts.social.mental_health, 0.15),
    ]
}

// Productivity and happiness add 0-100 scores to ~1.0 multipliers scaled by
// a fixed factor. Weights and scales must stay as-is to keep reference parity.
fn productivity_terms(impacts: &DomainImpacts) -> [(&'static str, f64, f64); 4] {
    [
        ("Deep work productivity", impacts.deep_work.productivity_score, 0.40),
        ("Sleep productivity boost", impacts.sleep.productivity_boost, 30.0),
        ("Exercise mental clarity", impacts.exercise.mental_clarity, 20.0),
        ("Nutrition energy", impacts.nutrition.energy_level, 10.0),
    ]
}

fn happiness_terms(impacts: &DomainImpacts) -> [(&'static str, f64, f64); 4] {
    [
        ("Social happiness", impacts.social.happiness_score, 0.35),
        ("Sleep mood", impacts.sleep.mood_impact, 20.0),
        ("Exercise mental clarity", impacts.exercise.mental_clarity, 20.0),
        (
            "Low stress",
            100.0 - 50.0 * impacts.social.stress_reduction,
            0.25,
        ),
    ]
}

fn weighted_sum(terms: &[(&'static str, f64, f64)]) -> f64 {
    terms.iter().map(|(_, value, weight)| value * weight).sum()
}

fn breakdown(name: &'static str, terms: &[(&'static str, f64, f64)]) -> ScoreBreakdown {
    let raw = weighted_sum(terms);
    ScoreBreakdown {
        name,
        terms: terms
            .iter()
            .map(|(label, value, weight)| TermContribution {
                label: label.to_string(),
                description: format!("{:.2} x {}", value, weight),
                contribution: value * weight,
            })
            .collect(),
        raw,
        score: clamp_score(raw),
    }
}

pub fn calculate_overall(impacts: &DomainImpacts) -> OverallScores {
    OverallScores {
        health: clamp_score(weighted_sum(&health_terms(impacts))),
        productivity: clamp_score(weighted_sum(&productivity_terms(impacts))),
        happiness: clamp_score(weighted_sum(&happiness_terms(impacts))),
    }
}

/// Per-term breakdown of all three headline scores (health, productivity, happiness).
pub fn explain_overall(impacts: &DomainImpacts) -> [ScoreBreakdown; 3] {
    [
        breakdown("Health", &health_terms(impacts)),
        breakdown("Productivity", &productivity_terms(impacts)),
        breakdown("Happiness", &happiness_terms(impacts)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::impact::calculate_impacts;
    use crate::engine::inputs::LifestyleInputs;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_default_inputs_scores() {
        let impacts = calculate_impacts(&LifestyleInputs::default());
        let scores = calculate_overall(&impacts);

        // 21 + 4.5 + 17.75 + 4.2
        assert!((scores.health - 47.45).abs() < EPS);
        // 16.8 + 30 + 20 * (1 + 2/15) + 10
        assert!((scores.productivity - (56.8 + 20.0 * (1.0 + 2.0 / 15.0))).abs() < EPS);
        // 7.35 + 20 + 20 * (1 + 2/15) + 15
        assert!((scores.happiness - (42.35 + 20.0 * (1.0 + 2.0 / 15.0))).abs() < EPS);
    }

    #[test]
    fn test_productivity_clamped() {
        let inputs = LifestyleInputs {
            deep_work_hours: 8.0,
            focus_quality: 10,
            sleep_quality: 10,
            exercise_minutes: 120,
            nutrition_quality: 10,
            ..Default::default()
        };
        let impacts = calculate_impacts(&inputs);
        let [_, productivity, _] = explain_overall(&impacts);
        assert!(productivity.raw > 100.0);
        assert_eq!(calculate_overall(&impacts).productivity, 100.0);
    }

    #[test]
    fn test_scores_within_bounds_across_ranges() {
        let hours = [0.0, 2.0, 4.0, 8.0];
        let qualities = [1, 5, 8, 10];
        for &h in &hours {
            for &q in &qualities {
                for minutes in [0, 30, 120] {
                    let inputs = LifestyleInputs {
                        sleep_hours: 4.0 + h,
                        sleep_quality: q,
                        exercise_minutes: minutes,
                        exercise_intensity: q,
                        deep_work_hours: h,
                        focus_quality: q,
                        nutrition_quality: q,
                        hydration: (h * 1.5) as u32,
                        social_hours: h,
                        social_quality: q,
                        ..Default::default()
                    };
                    let scores = calculate_overall(&calculate_impacts(&inputs));
                    for value in [scores.health, scores.productivity, scores.happiness] {
                        assert!((0.0..=100.0).contains(&value));
                    }
                }
            }
        }
    }

    #[test]
    fn test_breakdown_matches_scores() {
        let impacts = calculate_impacts(&LifestyleInputs::default());
        let scores = calculate_overall(&impacts);
        let [health, productivity, happiness] = explain_overall(&impacts);

        assert_eq!(health.name, "Health");
        assert_eq!(health.terms.len(), 4);
        assert!((health.score - scores.health).abs() < EPS);
        assert!((productivity.score - scores.productivity).abs() < EPS);
        assert!((happiness.score - scores.happiness).abs() < EPS);

        let sum: f64 = health.terms.iter().map(|t| t.contribution).sum();
        assert!((sum - health.raw).abs() < EPS);
    }

    #[test]
    fn test_low_stress_term() {
        let impacts = calculate_impacts(&LifestyleInputs::default());
        let [_, _, happiness] = explain_overall(&impacts);
        let stress = happiness.terms.iter().find(|t| t.label == "Low stress").unwrap();
        // (100 - 50 * 0.8) * 0.25
        assert!((stress.contribution - 15.0).abs() < EPS);
    }
}
