//! Per-domain impact calculators.
//!
//! Each calculator looks at exactly two inputs from its own domain. Scores are
//! on a 0-100 scale; boosts and bonuses are multipliers around 1.0.

use serde::Serialize;

use super::inputs::LifestyleInputs;

/// Sleep duration with the best health outcome, in hours.
pub const OPTIMAL_SLEEP_HOURS: f64 = 7.5;

/// Inclusive deep-work window (hours) that earns the career bonus.
pub const OPTIMAL_DEEP_WORK_HOURS: (f64, f64) = (2.0, 4.0);

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct SleepImpact {
    pub health_score: f64,
    pub productivity_boost: f64,
    pub mood_impact: f64,
    pub recovery_rate: f64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ExerciseImpact {
    /// Pounds lost per week
    pub weekly_weight_loss: f64,
    pub health_score: f64,
    pub energy_boost: f64,
    pub mental_clarity: f64,
    pub longevity_bonus: f64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct DeepWorkImpact {
    pub productivity_score: f64,
    /// Percent improvement per month
    pub skill_growth: f64,
    pub career_advancement: f64,
    pub cognitive_reserve: f64,
    /// Dollars of earning potential per day
    pub income_projection: f64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct NutritionImpact {
    pub health_score: f64,
    pub energy_level: f64,
    pub immunity_boost: f64,
    pub skin_health: f64,
    pub digestive_health: f64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct SocialImpact {
    pub happiness_score: f64,
    pub stress_reduction: f64,
    pub emotional_resilience: f64,
    pub network_growth: f64,
    pub mental_health: f64,
}

/// All five domain impacts for one input snapshot.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct DomainImpacts {
    pub sleep: SleepImpact,
    pub exercise: ExerciseImpact,
    pub deep_work: DeepWorkImpact,
    pub nutrition: NutritionImpact,
    pub social: SocialImpact,
}

pub fn calculate_sleep_impact(hours: f64, quality: f64) -> SleepImpact {
    let sleep_score = (100.0 - (hours - OPTIMAL_SLEEP_HOURS).abs() * 15.0).max(0.0);
    let quality_multiplier = quality / 10.0;

    SleepImpact {
        health_score: sleep_score * quality_multiplier,
        productivity_boost: if quality > 7.0 {
            1.15
        } else if quality > 5.0 {
            1.0
        } else {
            0.85
        },
        mood_impact: if quality > 7.0 { 1.2 } else { 1.0 },
        recovery_rate: if hours >= 7.0 { 1.0 } else { 0.7 },
    }
}

pub fn calculate_exercise_impact(minutes: f64, intensity: f64) -> ExerciseImpact {
    let weekly_minutes = minutes * 7.0;
    let intensity_multiplier = intensity / 10.0;

    ExerciseImpact {
        weekly_weight_loss: (weekly_minutes / 30.0) * 0.11 * intensity_multiplier,
        health_score: ((minutes / 30.0) * 25.0 * intensity_multiplier).min(100.0),
        energy_boost: 1.0 + (minutes / 60.0) * 0.3 * intensity_multiplier,
        mental_clarity: 1.0 + (minutes / 45.0) * 0.2,
        longevity_bonus: if minutes >= 30.0 { 1.15 } else { 1.0 },
    }
}

pub fn calculate_deep_work_impact(hours: f64, focus_quality: f64) -> DeepWorkImpact {
    let (low, high) = OPTIMAL_DEEP_WORK_HOURS;
    let optimal_duration = hours >= low && hours <= high;
    let focus_multiplier = focus_quality / 10.0;

    DeepWorkImpact {
        productivity_score: (hours * 20.0 * focus_multiplier).min(100.0),
        skill_growth: hours * 0.5 * focus_multiplier,
        career_advancement: if optimal_duration { 1.3 } else { 1.0 },
        cognitive_reserve: 1.0 + (hours / 8.0) * 0.4,
        income_projection: hours * 15.0 * focus_multiplier,
    }
}

pub fn calculate_nutrition_impact(quality: f64, hydration: f64) -> NutritionImpact {
    NutritionImpact {
        health_score: (quality / 10.0) * 80.0 + (hydration / 8.0) * 20.0,
        energy_level: if quality > 7.0 { 1.2 } else { 1.0 },
        immunity_boost: if quality > 8.0 { 1.25 } else { 1.0 },
        skin_health: if hydration >= 6.0 { 1.15 } else { 0.9 },
        digestive_health: quality * 10.0,
    }
}

pub fn calculate_social_impact(hours: f64, quality: f64) -> SocialImpact {
    let quality_multiplier = quality / 10.0;

    SocialImpact {
        happiness_score: (hours * 15.0 * quality_multiplier).min(100.0),
        stress_reduction: if hours >= 2.0 { 0.8 } else { 1.0 },
        emotional_resilience: 1.0 + (hours / 5.0) * 0.3 * quality_multiplier,
        network_growth: hours * 2.0 * quality_multiplier,
        mental_health: (hours * 20.0 * quality_multiplier).min(100.0),
    }
}

pub fn calculate_impacts(inputs: &LifestyleInputs) -> DomainImpacts {
    DomainImpacts {
        sleep: calculate_sleep_impact(inputs.sleep_hours, f64::from(inputs.sleep_quality)),
        exercise: calculate_exercise_impact(
            f64::from(inputs.exercise_minutes),
            f64::from(inputs.exercise_intensity),
        ),
        deep_work: calculate_deep_work_impact(
            inputs.deep_work_hours,
            f64::from(inputs.focus_quality),
        ),
        nutrition: calculate_nutrition_impact(
            f64::from(inputs.nutrition_quality),
            f64::from(inputs.hydration),
        ),
        social: calculate_social_impact(inputs.social_hours, f64::from(inputs.social_quality)),
    }
}
