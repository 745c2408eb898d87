use serde::{Deserialize, Deserializer, Serialize};

use super::inputs::{Profile, Sex};

/// How active someone is outside of deliberate exercise.
///
/// Deserializes leniently: keys go through [`ActivityLevel::from_key`] and
/// anything unrecognised becomes `Moderate`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

/// Activity multipliers applied to BMR, keyed by the config/CLI spelling.
pub const ACTIVITY_MULTIPLIERS: &[(&str, f64)] = &[
    ("sedentary", 1.2),
    ("light", 1.375),
    ("moderate", 1.55),
    ("active", 1.725),
    ("very_active", 1.9),
];

/// Multiplier used when an activity key is not in [`ACTIVITY_MULTIPLIERS`].
pub const DEFAULT_ACTIVITY_MULTIPLIER: f64 = 1.55;

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    /// Parse a key case-insensitively; `-` and spaces are accepted in place of `_`.
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = normalize_key(key);
        Self::ALL.into_iter().find(|level| level.key() == normalized)
    }

    pub fn multiplier(&self) -> f64 {
        activity_multiplier(self.key())
    }
}

impl<'de> Deserialize<'de> for ActivityLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Ok(Self::from_key(&key).unwrap_or(ActivityLevel::Moderate))
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

/// Look up the multiplier for an activity key, falling back to Moderate.
pub fn activity_multiplier(key: &str) -> f64 {
    let normalized = normalize_key(key);
    ACTIVITY_MULTIPLIERS
        .iter()
        .find(|(k, _)| *k == normalized)
        .map(|(_, m)| *m)
        .unwrap_or(DEFAULT_ACTIVITY_MULTIPLIER)
}

/// Basal metabolic rate per Mifflin-St Jeor, in kcal/day.
///
/// Values are not range checked; zero or negative measurements flow
/// straight through the equation.
pub fn calculate_bmr(profile: &Profile) -> f64 {
    let base = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age);
    match profile.sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Total daily energy expenditure for `profile` at the given activity key,
/// rounded to the nearest kcal.
pub fn calculate_tdee(profile: &Profile, activity_key: &str) -> i64 {
    (calculate_bmr(profile) * activity_multiplier(activity_key)).round() as i64
}

/// BMR and TDEE together, as reported to the host.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EnergyEstimate {
    pub bmr: f64,
    pub activity_key: String,
    pub multiplier: f64,
    pub tdee: i64,
}

pub fn estimate_energy(profile: &Profile, activity_key: &str) -> EnergyEstimate {
    EnergyEstimate {
        bmr: calculate_bmr(profile),
        activity_key: activity_key.to_string(),
        multiplier: activity_multiplier(activity_key),
        tdee: calculate_tdee(profile, activity_key),
    }
}
