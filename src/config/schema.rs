use serde::{Deserialize, Serialize};

use crate::engine::{LifestyleInputs, Profile, Streak};

/// Contents of `config.yaml`. Every section is optional and falls back to
/// its defaults, so an empty file is a valid config.
///
/// Example YAML:
/// ```yaml
/// inputs:
///   sleep_hours: 8
///   exercise_minutes: 45
/// profile:
///   sex: female
///   age: 34
///   activity_level: light
/// streak:
///   days: 12
///   last_active: 2026-03-14
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub inputs: LifestyleInputs,
    pub profile: Profile,
    pub streak: Streak,
}
