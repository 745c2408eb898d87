use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{get_config_path, save_config, Config};
use crate::engine::inputs::{input_range, FieldRange, PROFILE_RANGES};
use crate::engine::{ActivityLevel, LifestyleInputs, Profile, Sex};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Parse a wizard answer against a field's range. Integer fields reject fractions.
fn parse_in_range(input: &str, range: &FieldRange, integer: bool) -> Result<f64, String> {
    let value: f64 = input
        .parse()
        .map_err(|_| "must be a number".to_string())?;
    if integer && value.fract() != 0.0 {
        return Err("must be a whole number".to_string());
    }
    if !range.contains(value) {
        return Err(format!("must be {}", range.describe()));
    }
    Ok(value)
}

/// Keep asking until the answer fits the field's range.
fn prompt_field(message: &str, range: &FieldRange, default: f64, integer: bool) -> Result<f64> {
    loop {
        let input = prompt_with_default(message, &default.to_string())?;
        match parse_in_range(&input, range, integer) {
            Ok(v) => return Ok(v),
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    }
}

fn prompt_input(message: &str, field: &str, default: f64, integer: bool) -> Result<f64> {
    let range = input_range(field).with_context(|| format!("No range defined for {}", field))?;
    prompt_field(message, range, default, integer)
}

fn prompt_daily_inputs(defaults: &LifestyleInputs) -> Result<LifestyleInputs> {
    let d = defaults;
    let int = |v: u32| f64::from(v);

    println!();
    println!("Sleep");
    let sleep_hours = prompt_input("  Hours per night (4-12)", "sleep_hours", d.sleep_hours, false)?;
    let sleep_quality = prompt_input("  Quality (1-10)", "sleep_quality", int(d.sleep_quality), true)?;

    println!("Exercise");
    let exercise_minutes =
        prompt_input("  Minutes per day (0-120)", "exercise_minutes", int(d.exercise_minutes), true)?;
    let exercise_intensity =
        prompt_input("  Intensity (1-10)", "exercise_intensity", int(d.exercise_intensity), true)?;

    println!("Deep work");
    let deep_work_hours =
        prompt_input("  Focused hours per day (0-8)", "deep_work_hours", d.deep_work_hours, false)?;
    let focus_quality = prompt_input("  Focus quality (1-10)", "focus_quality", int(d.focus_quality), true)?;

    println!("Nutrition");
    let nutrition_quality =
        prompt_input("  Diet quality (1-10)", "nutrition_quality", int(d.nutrition_quality), true)?;
    let hydration = prompt_input("  Cups of water (0-12)", "hydration", int(d.hydration), true)?;

    println!("Social");
    let social_hours = prompt_input("  Hours with people (0-8)", "social_hours", d.social_hours, false)?;
    let social_quality =
        prompt_input("  Quality of that time (1-10)", "social_quality", int(d.social_quality), true)?;

    Ok(LifestyleInputs {
        sleep_hours,
        sleep_quality: sleep_quality as u32,
        exercise_minutes: exercise_minutes as u32,
        exercise_intensity: exercise_intensity as u32,
        deep_work_hours,
        focus_quality: focus_quality as u32,
        nutrition_quality: nutrition_quality as u32,
        hydration: hydration as u32,
        social_hours,
        social_quality: social_quality as u32,
        ..d.clone()
    })
}

fn prompt_activity_and_diet(inputs: LifestyleInputs) -> Result<LifestyleInputs> {
    let int = |v: u32| f64::from(v);

    println!();
    println!("Activity and diet");
    let steps = prompt_input("  Steps per day (0-50000)", "steps", int(inputs.steps), true)?;
    let screen_time =
        prompt_input("  Recreational screen time, hours (0-24)", "screen_time", inputs.screen_time, false)?;
    let protein = prompt_input("  Protein, grams per day (0-400)", "protein", int(inputs.protein), true)?;
    let calories =
        prompt_input("  Calories per day (0-10000)", "calories", int(inputs.calories), true)?;

    Ok(LifestyleInputs {
        steps: steps as u32,
        screen_time,
        protein: protein as u32,
        calories: calories as u32,
        ..inputs
    })
}

fn prompt_finances(inputs: LifestyleInputs) -> Result<LifestyleInputs> {
    println!();
    let income = prompt_input("Monthly income ($)", "income", inputs.income, false)?;
    let expenses = prompt_input("Monthly expenses ($)", "expenses", inputs.expenses, false)?;
    let savings_rate = prompt_input("Savings rate (%)", "savings_rate", inputs.savings_rate, false)?;
    Ok(LifestyleInputs {
        income,
        expenses,
        savings_rate,
        ..inputs
    })
}

fn prompt_profile(defaults: &Profile) -> Result<Profile> {
    println!();
    println!("The profile is only used for the daily calorie estimate (TDEE).");

    let default_sex = match defaults.sex {
        Sex::Male => "male",
        Sex::Female => "female",
    };
    let sex = loop {
        match prompt_with_default("  Sex (male/female)", default_sex)?.to_lowercase().as_str() {
            "male" | "m" => break Sex::Male,
            "female" | "f" => break Sex::Female,
            _ => println!("  Invalid: enter male or female. Try again."),
        }
    };

    let [age_range, height_range, weight_range] = PROFILE_RANGES else {
        anyhow::bail!("Profile ranges are incomplete");
    };
    let age = prompt_field("  Age", age_range, f64::from(defaults.age), true)?;
    let height_cm = prompt_field("  Height (cm)", height_range, defaults.height_cm, false)?;
    let weight_kg = prompt_field("  Weight (kg)", weight_range, defaults.weight_kg, false)?;

    let keys: Vec<_> = ActivityLevel::ALL.iter().map(|l| l.key()).collect();
    let activity_level = loop {
        let input = prompt_with_default(
            &format!("  Activity level ({})", keys.join("/")),
            defaults.activity_level.key(),
        )?;
        match ActivityLevel::from_key(&input) {
            Some(level) => break level,
            None => println!("  Invalid: choose one of {}. Try again.", keys.join(", ")),
        }
    };

    Ok(Profile {
        sex,
        age: age as u32,
        height_cm,
        weight_kg,
        activity_level,
    })
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the suggested config file path.
/// Otherwise, suggests ~/.config/life-optimizer/config.yaml.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    println!("Life Optimizer Setup");
    println!("====================");
    println!("Press Enter to keep the value in brackets.");

    let defaults = Config::default();

    let inputs = prompt_daily_inputs(&defaults.inputs)?;
    let inputs = prompt_activity_and_diet(inputs)?;
    let inputs = prompt_finances(inputs)?;

    let profile = if prompt_yes_no("Set up your body profile?", true)? {
        prompt_profile(&defaults.profile)?
    } else {
        defaults.profile.clone()
    };

    let default_config_path = match default_path {
        Some(p) => p,
        None => get_config_path()?,
    };
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    let config = Config {
        inputs,
        profile,
        streak: defaults.streak,
    };
    save_config(&config_path, &config)?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `life-optimizer` to see your dashboard.");

    Ok(())
}
