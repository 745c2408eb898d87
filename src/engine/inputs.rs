use serde::{Deserialize, Serialize};

use super::tdee::ActivityLevel;

/// One snapshot of every lifestyle slider.
///
/// The engine never mutates a snapshot; callers build a new one whenever any
/// value changes and hand it to [`crate::engine::evaluate`].
///
/// Example YAML:
/// ```yaml
/// inputs:
///   sleep_hours: 8
///   sleep_quality: 9
///   exercise_minutes: 45
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LifestyleInputs {
    /// Hours slept per night (4-12, half-hour steps)
    pub sleep_hours: f64,
    /// Subjective sleep quality (1-10)
    pub sleep_quality: u32,
    /// Daily exercise in minutes (0-120)
    pub exercise_minutes: u32,
    /// Exercise intensity (1-10)
    pub exercise_intensity: u32,
    /// Hours of focused, uninterrupted work (0-8)
    pub deep_work_hours: f64,
    /// Focus quality during deep work (1-10)
    pub focus_quality: u32,
    /// Nutrition quality (1-10)
    pub nutrition_quality: u32,
    /// Cups of water per day (0-12)
    pub hydration: u32,
    /// Hours spent with other people (0-8)
    pub social_hours: f64,
    /// Quality of that social time (1-10)
    pub social_quality: u32,
    pub steps: u32,
    /// Hours of recreational screen time
    pub screen_time: f64,
    /// Grams of protein per day
    pub protein: u32,
    /// Calories eaten per day
    pub calories: u32,
    /// Monthly income in dollars
    pub income: f64,
    /// Monthly expenses in dollars
    pub expenses: f64,
    /// Percentage of income saved (0-100)
    pub savings_rate: f64,
}

impl Default for LifestyleInputs {
    fn default() -> Self {
        Self {
            sleep_hours: 7.5,
            sleep_quality: 7,
            exercise_minutes: 30,
            exercise_intensity: 6,
            deep_work_hours: 3.0,
            focus_quality: 7,
            nutrition_quality: 7,
            hydration: 6,
            social_hours: 2.0,
            social_quality: 7,
            steps: 8000,
            screen_time: 4.0,
            protein: 120,
            calories: 2200,
            income: 5000.0,
            expenses: 3500.0,
            savings_rate: 20.0,
        }
    }
}

/// Biological sex category used by the Mifflin-St Jeor equation.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

/// Body profile for the energy expenditure estimate.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    pub sex: Sex,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            sex: Sex::Male,
            age: 28,
            height_cm: 175.0,
            weight_kg: 75.0,
            activity_level: ActivityLevel::Moderate,
        }
    }
}

/// Inclusive range a numeric field is allowed to take at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    const fn new(field: &'static str, min: f64, max: f64) -> Self {
        Self { field, min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    pub(crate) fn describe(&self) -> String {
        if self.max == f64::INFINITY {
            format!(">= {}", self.min)
        } else {
            format!("{}-{}", self.min, self.max)
        }
    }
}

/// Slider ranges for every lifestyle field, in declaration order.
pub const INPUT_RANGES: &[FieldRange] = &[
    FieldRange::new("sleep_hours", 4.0, 12.0),
    FieldRange::new("sleep_quality", 1.0, 10.0),
    FieldRange::new("exercise_minutes", 0.0, 120.0),
    FieldRange::new("exercise_intensity", 1.0, 10.0),
    FieldRange::new("deep_work_hours", 0.0, 8.0),
    FieldRange::new("focus_quality", 1.0, 10.0),
    FieldRange::new("nutrition_quality", 1.0, 10.0),
    FieldRange::new("hydration", 0.0, 12.0),
    FieldRange::new("social_hours", 0.0, 8.0),
    FieldRange::new("social_quality", 1.0, 10.0),
    FieldRange::new("steps", 0.0, 50_000.0),
    FieldRange::new("screen_time", 0.0, 24.0),
    FieldRange::new("protein", 0.0, 400.0),
    FieldRange::new("calories", 0.0, 10_000.0),
    FieldRange::new("income", 0.0, f64::INFINITY),
    FieldRange::new("expenses", 0.0, f64::INFINITY),
    FieldRange::new("savings_rate", 0.0, 100.0),
];

pub const PROFILE_RANGES: &[FieldRange] = &[
    FieldRange::new("age", 1.0, 120.0),
    FieldRange::new("height_cm", 50.0, 272.0),
    FieldRange::new("weight_kg", 2.0, 650.0),
];

/// Look up the documented range for a lifestyle field by name.
pub fn input_range(field: &str) -> Option<&'static FieldRange> {
    INPUT_RANGES.iter().find(|r| r.field == field)
}

impl LifestyleInputs {
    /// Field values in the same order as [`INPUT_RANGES`].
    pub fn values(&self) -> [f64; 17] {
        [
            self.sleep_hours,
            f64::from(self.sleep_quality),
            f64::from(self.exercise_minutes),
            f64::from(self.exercise_intensity),
            self.deep_work_hours,
            f64::from(self.focus_quality),
            f64::from(self.nutrition_quality),
            f64::from(self.hydration),
            self.social_hours,
            f64::from(self.social_quality),
            f64::from(self.steps),
            self.screen_time,
            f64::from(self.protein),
            f64::from(self.calories),
            self.income,
            self.expenses,
            self.savings_rate,
        ]
    }
}

fn check_ranges(prefix: &str, ranges: &[FieldRange], values: &[f64], errors: &mut Vec<String>) {
    for (range, value) in ranges.iter().zip(values) {
        if !range.contains(*value) {
            errors.push(format!(
                "{}.{}: {} is outside {}",
                prefix,
                range.field,
                value,
                range.describe()
            ));
        }
    }
}

/// Validate a lifestyle snapshot against the slider ranges.
/// Returns all violations at once (not just the first).
pub fn validate_inputs(inputs: &LifestyleInputs) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    check_ranges("inputs", INPUT_RANGES, &inputs.values(), &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a body profile. Same contract as [`validate_inputs`].
pub fn validate_profile(profile: &Profile) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let values = [f64::from(profile.age), profile.height_cm, profile.weight_kg];
    check_ranges("profile", PROFILE_RANGES, &values, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
