pub mod init;
mod schema;

pub use schema::Config;

use anyhow::{bail, Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::engine::{validate_inputs, validate_profile, LifestyleInputs};

/// Get the config directory path (~/.config/life-optimizer/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("life-optimizer"))
}

/// Get the default config file path (~/.config/life-optimizer/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/life-optimizer/config.yaml) and falls back to defaults when
///   that file does not exist yet.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let (config_path, explicit) = match path {
        Some(p) => (p, true),
        None => (get_config_path()?, false),
    };

    if !config_path.exists() {
        if explicit {
            bail!("Config file not found at {}", config_path.display());
        }
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    Ok(config)
}

/// Save configuration as YAML, atomically.
///
/// Creates parent directories as needed. The file is never left half-written.
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let yaml = serde_saphyr::to_string(config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit().context("Failed to save config")?;

    Ok(())
}

/// Validate every section of a loaded config.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    if let Err(mut e) = validate_inputs(&config.inputs) {
        errors.append(&mut e);
    }
    if let Err(mut e) = validate_profile(&config.profile) {
        errors.append(&mut e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Apply `field=value` overrides on top of a snapshot, returning a new one.
///
/// Integer fields reject fractional values; unknown fields are an error.
pub fn apply_overrides(inputs: &LifestyleInputs, overrides: &[String]) -> Result<LifestyleInputs> {
    if overrides.is_empty() {
        return Ok(inputs.clone());
    }

    let mut value = serde_json::to_value(inputs).context("Failed to serialize inputs")?;
    let fields = value
        .as_object_mut()
        .context("Inputs did not serialize to a map")?;

    for raw in overrides {
        let Some((key, val)) = raw.split_once('=') else {
            bail!("Invalid override '{}': expected field=value", raw);
        };
        let key = key.trim();
        let val = val.trim();
        if !fields.contains_key(key) {
            bail!("Unknown input field '{}'", key);
        }

        let number = if let Ok(n) = val.parse::<i64>() {
            serde_json::Number::from(n)
        } else {
            let f: f64 = val
                .parse()
                .with_context(|| format!("Invalid number '{}' for {}", val, key))?;
            serde_json::Number::from_f64(f)
                .with_context(|| format!("Invalid number '{}' for {}", val, key))?
        };
        fields.insert(key.to_string(), serde_json::Value::Number(number));
    }

    serde_json::from_value(value).context("Override does not fit the field's type")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_missing_explicit_path_errors() {
        let temp_path = env::temp_dir().join("life_optimizer_test_missing.yaml");
        let _ = fs::remove_file(&temp_path);

        let result = load_config(Some(temp_path));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_path = env::temp_dir()
            .join("life_optimizer_test_roundtrip")
            .join("config.yaml");
        let _ = fs::remove_file(&temp_path);

        let mut config = Config::default();
        config.inputs.sleep_hours = 8.5;
        config.streak.days = 4;
        save_config(&temp_path, &config).unwrap();

        let loaded = load_config(Some(temp_path.clone())).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_invalid_yaml_errors() {
        let temp_path = env::temp_dir().join("life_optimizer_test_invalid.yaml");
        fs::write(&temp_path, "inputs: [not, a, map]\n").unwrap();

        let result = load_config(Some(temp_path.clone()));
        assert!(result.is_err());

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_validate_config_collects_sections() {
        let mut config = Config::default();
        config.inputs.sleep_quality = 0;
        config.profile.height_cm = 10.0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("inputs."));
        assert!(errors[1].starts_with("profile."));
    }

    #[test]
    fn test_apply_overrides() {
        let base = LifestyleInputs::default();
        let overrides = vec!["sleep_hours=9".to_string(), "focus_quality = 10".to_string()];
        let inputs = apply_overrides(&base, &overrides).unwrap();
        assert_eq!(inputs.sleep_hours, 9.0);
        assert_eq!(inputs.focus_quality, 10);
        assert_eq!(inputs.exercise_minutes, base.exercise_minutes);
    }

    #[test]
    fn test_apply_overrides_fractional_float_field() {
        let inputs =
            apply_overrides(&LifestyleInputs::default(), &["deep_work_hours=2.5".to_string()])
                .unwrap();
        assert_eq!(inputs.deep_work_hours, 2.5);
    }

    #[test]
    fn test_apply_overrides_errors() {
        let base = LifestyleInputs::default();
        assert!(apply_overrides(&base, &["sleep_hours".to_string()]).is_err());
        assert!(apply_overrides(&base, &["bedtime=22".to_string()]).is_err());
        assert!(apply_overrides(&base, &["sleep_hours=lots".to_string()]).is_err());
        // Integer field cannot take a fraction or a negative
        assert!(apply_overrides(&base, &["sleep_quality=7.5".to_string()]).is_err());
        assert!(apply_overrides(&base, &["hydration=-1".to_string()]).is_err());
    }
}
