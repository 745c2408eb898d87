use chrono::NaiveDate;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::engine::insights::BalanceEntry;
use crate::engine::tdee::EnergyEstimate;
use crate::engine::{
    DomainImpacts, Evaluation, MetricCard, Milestones, OverallScores, ProjectionPoint,
    ScoreBreakdown, Streak,
};

/// Bar width used when stdout is not a terminal
const DEFAULT_BAR_WIDTH: usize = 20;
const MIN_BAR_WIDTH: usize = 10;
const MAX_BAR_WIDTH: usize = 40;
/// Columns taken by the label and number next to a bar
const BAR_LABEL_WIDTH: usize = 24;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Width of score bars for the current terminal
pub fn bar_width() -> usize {
    match get_terminal_width() {
        Some(w) => w
            .saturating_sub(BAR_LABEL_WIDTH)
            .clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH),
        None => DEFAULT_BAR_WIDTH,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Mid,
    Low,
}

/// Traffic-light band for a 0-100 score
pub fn score_band(score: f64) -> ScoreBand {
    if score >= 70.0 {
        ScoreBand::High
    } else if score >= 40.0 {
        ScoreBand::Mid
    } else {
        ScoreBand::Low
    }
}

/// Round a score for display ("47", "100")
pub fn format_score(score: f64) -> String {
    format!("{:.0}", score)
}

/// Render a 0-100 score as a fixed-width bar of filled and empty cells
pub fn score_bar(score: f64, width: usize, use_colors: bool) -> String {
    let ratio = (score / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);

    let filled_str = "█".repeat(filled);
    let empty_str = "░".repeat(empty);

    if use_colors {
        let filled_colored = match score_band(score) {
            ScoreBand::High => filled_str.green().to_string(),
            ScoreBand::Mid => filled_str.yellow().to_string(),
            ScoreBand::Low => filled_str.red().to_string(),
        };
        format!("{}{}", filled_colored, empty_str.dimmed())
    } else {
        format!("{}{}", filled_str, empty_str)
    }
}

fn heading(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

fn bar_line(label: &str, score: f64, width: usize, use_colors: bool) -> String {
    format!(
        "  {:<14}{:>4}  {}",
        label,
        format_score(score),
        score_bar(score, width, use_colors)
    )
}

/// Headline scores as labelled bars
pub fn format_overall(scores: &OverallScores, width: usize, use_colors: bool) -> String {
    [
        ("Health", scores.health),
        ("Productivity", scores.productivity),
        ("Happiness", scores.happiness),
    ]
    .iter()
    .map(|(label, score)| bar_line(label, *score, width, use_colors))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Lifestyle balance as labelled bars, one per category
pub fn format_balance(entries: &[BalanceEntry], width: usize, use_colors: bool) -> String {
    entries
        .iter()
        .map(|e| bar_line(e.category, e.value, width, use_colors))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a trend hint as "+12%" / "-5%"; zero trends are omitted
pub fn format_trend(trend: i32) -> String {
    if trend == 0 {
        String::new()
    } else {
        format!("{:+}%", trend)
    }
}

pub fn format_metrics(cards: &[MetricCard], use_colors: bool) -> String {
    cards
        .iter()
        .map(|card| {
            let trend = format_trend(card.trend);
            let trend = if use_colors && card.trend > 0 {
                trend.green().to_string()
            } else if use_colors && card.trend < 0 {
                trend.red().to_string()
            } else {
                trend
            };
            let subtitle = if use_colors {
                card.subtitle.dimmed().to_string()
            } else {
                card.subtitle.to_string()
            };
            format!(
                "  {:<18}{:>12}  {:<5} {}",
                card.title, card.value, trend, subtitle
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_streak(streak: &Streak, today: NaiveDate, use_colors: bool) -> String {
    let status = if streak.is_active_on(today) {
        "checked in today"
    } else {
        "not checked in today"
    };
    let days = format!("{} day streak", streak.days);
    let days = if use_colors {
        days.bold().to_string()
    } else {
        days
    };
    format!("  {} ({})\n  {}", days, status, streak.message())
}

/// Full dashboard: scores, balance, key metrics, streak and insights
pub fn format_dashboard(
    evaluation: &Evaluation,
    streak: &Streak,
    today: NaiveDate,
    use_colors: bool,
) -> String {
    let width = bar_width();
    let mut sections = vec![
        heading("Overall Scores", use_colors),
        format_overall(&evaluation.overall, width, use_colors),
        String::new(),
        heading("Lifestyle Balance", use_colors),
        format_balance(&evaluation.balance, width, use_colors),
        String::new(),
        heading("Key Metrics", use_colors),
        format_metrics(&evaluation.metrics, use_colors),
        String::new(),
        heading("Streak", use_colors),
        format_streak(streak, today, use_colors),
        String::new(),
        heading("Insights", use_colors),
    ];
    sections.extend(evaluation.insights.iter().map(|line| format!("  - {}", line)));
    sections.join("\n")
}

fn field_rows(rows: &[(&str, f64)]) -> Vec<String> {
    rows.iter()
        .map(|(name, value)| format!("  {:<22}{:>9.2}", name, value))
        .collect()
}

type ImpactGroup = (&'static str, &'static str, Vec<(&'static str, f64)>);

/// Derived metrics per domain as (heading, tsv key, rows), in struct order
fn impact_groups(impacts: &DomainImpacts) -> [ImpactGroup; 5] {
    let s = &impacts.sleep;
    let e = &impacts.exercise;
    let d = &impacts.deep_work;
    let n = &impacts.nutrition;
    let so = &impacts.social;

    [
        (
            "Sleep",
            "sleep",
            vec![
                ("health_score", s.health_score),
                ("productivity_boost", s.productivity_boost),
                ("mood_impact", s.mood_impact),
                ("recovery_rate", s.recovery_rate),
            ],
        ),
        (
            "Exercise",
            "exercise",
            vec![
                ("weekly_weight_loss", e.weekly_weight_loss),
                ("health_score", e.health_score),
                ("energy_boost", e.energy_boost),
                ("mental_clarity", e.mental_clarity),
                ("longevity_bonus", e.longevity_bonus),
            ],
        ),
        (
            "Deep Work",
            "deep_work",
            vec![
                ("productivity_score", d.productivity_score),
                ("skill_growth", d.skill_growth),
                ("career_advancement", d.career_advancement),
                ("cognitive_reserve", d.cognitive_reserve),
                ("income_projection", d.income_projection),
            ],
        ),
        (
            "Nutrition",
            "nutrition",
            vec![
                ("health_score", n.health_score),
                ("energy_level", n.energy_level),
                ("immunity_boost", n.immunity_boost),
                ("skin_health", n.skin_health),
                ("digestive_health", n.digestive_health),
            ],
        ),
        (
            "Social",
            "social",
            vec![
                ("happiness_score", so.happiness_score),
                ("stress_reduction", so.stress_reduction),
                ("emotional_resilience", so.emotional_resilience),
                ("network_growth", so.network_growth),
                ("mental_health", so.mental_health),
            ],
        ),
    ]
}

/// Every derived metric, grouped by domain
pub fn format_impacts(impacts: &DomainImpacts, use_colors: bool) -> String {
    impact_groups(impacts)
        .iter()
        .map(|(name, _, rows)| {
            let mut lines = vec![heading(name, use_colors)];
            lines.extend(field_rows(rows));
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Every derived metric as `domain\tfield\tvalue` rows, same order as the table
pub fn format_impacts_tsv(impacts: &DomainImpacts) -> String {
    impact_groups(impacts)
        .iter()
        .flat_map(|(_, domain, rows)| {
            rows.iter()
                .map(move |(field, value)| format!("{}\t{}\t{}", domain, field, value))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Projection table with a header row, then milestones
pub fn format_projection(points: &[ProjectionPoint], milestones: &Milestones, use_colors: bool) -> String {
    let header = format!(
        "  {:<6}{:>10}{:>9}{:>14}{:>11}{:>11}",
        "", "Weight", "Health", "Productivity", "Happiness", "Income"
    );
    let mut lines = vec![heading("Future You", use_colors), heading(&header, use_colors)];
    for p in points {
        lines.push(format!(
            "  {:<6}{:>10.1}{:>9}{:>14}{:>11}{:>11}",
            p.label,
            p.weight,
            format_score(p.health),
            format_score(p.productivity),
            format_score(p.happiness),
            format!("${:.0}", p.income)
        ));
    }
    lines.push(String::new());
    lines.push(heading("Milestones", use_colors));
    lines.push(format!("  30 days   Health score: {}%", milestones.health_30_days));
    lines.push(format!(
        "  90 days   Skill improvement & +${} earned",
        milestones.income_90_days
    ));
    lines.push(format!(
        "  1 year    -{:.0} lbs, +${}",
        milestones.weight_loss_1_year, milestones.income_1_year
    ));
    lines.join("\n")
}

/// Projection as TSV: label, weight, health, productivity, happiness, income (no header)
pub fn format_projection_tsv(points: &[ProjectionPoint]) -> String {
    points
        .iter()
        .map(|p| {
            format!(
                "{}\t{:.1}\t{:.1}\t{:.1}\t{:.1}\t{:.0}",
                p.label, p.weight, p.health, p.productivity, p.happiness, p.income
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Headline scores as TSV: one `name\tscore` row each
pub fn format_overall_tsv(scores: &OverallScores) -> String {
    format!(
        "health\t{:.1}\nproductivity\t{:.1}\nhappiness\t{:.1}",
        scores.health, scores.productivity, scores.happiness
    )
}

pub fn format_energy(estimate: &EnergyEstimate, use_colors: bool) -> String {
    let tdee = format!("{} kcal/day", estimate.tdee);
    let tdee = if use_colors {
        tdee.bold().to_string()
    } else {
        tdee
    };
    format!(
        "  BMR:      {:.0} kcal/day\n  Activity: {} (x{})\n  TDEE:     {}",
        estimate.bmr, estimate.activity_key, estimate.multiplier, tdee
    )
}

/// Per-term breakdown lines for verbose mode
pub fn format_breakdown(breakdowns: &[ScoreBreakdown]) -> String {
    breakdowns
        .iter()
        .map(|b| {
            let mut lines = vec![format!(
                "{}: {:.2} (raw {:.2})",
                b.name, b.score, b.raw
            )];
            for term in &b.terms {
                lines.push(format!(
                    "  {:<26}{:<18}{:>8.2}",
                    term.label, term.description, term.contribution
                ));
            }
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tdee::estimate_energy;
    use crate::engine::{evaluate, explain_overall, LifestyleInputs, Profile};

    fn sample() -> Evaluation {
        evaluate(&LifestyleInputs::default())
    }

    #[test]
    fn test_score_band() {
        assert_eq!(score_band(70.0), ScoreBand::High);
        assert_eq!(score_band(69.9), ScoreBand::Mid);
        assert_eq!(score_band(40.0), ScoreBand::Mid);
        assert_eq!(score_band(39.9), ScoreBand::Low);
    }

    #[test]
    fn test_score_bar_plain() {
        assert_eq!(score_bar(50.0, 10, false), "█████░░░░░");
        assert_eq!(score_bar(0.0, 4, false), "░░░░");
        assert_eq!(score_bar(100.0, 4, false), "████");
    }

    #[test]
    fn test_score_bar_clamps_out_of_range() {
        assert_eq!(score_bar(150.0, 4, false), "████");
        assert_eq!(score_bar(-20.0, 4, false), "░░░░");
    }

    #[test]
    fn test_format_score_rounds() {
        assert_eq!(format_score(47.45), "47");
        assert_eq!(format_score(99.6), "100");
    }

    #[test]
    fn test_format_trend() {
        assert_eq!(format_trend(12), "+12%");
        assert_eq!(format_trend(-5), "-5%");
        assert_eq!(format_trend(0), "");
    }

    #[test]
    fn test_format_overall_plain() {
        let result = format_overall(&sample().overall, 10, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Health"));
        assert!(lines[0].contains("47"));
        assert!(lines[1].contains("Productivity"));
        assert!(lines[2].contains("Happiness"));
    }

    #[test]
    fn test_format_dashboard_sections() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let streak = Streak {
            days: 7,
            last_active: Some(today),
        };
        let result = format_dashboard(&sample(), &streak, today, false);
        assert!(result.contains("Overall Scores"));
        assert!(result.contains("Lifestyle Balance"));
        assert!(result.contains("Deep Work"));
        assert!(result.contains("Income Potential"));
        assert!(result.contains("7 day streak (checked in today)"));
        assert!(result.contains("You're on fire!"));
        assert!(result.contains("- Your Nutrition score is excellent at 71%"));
    }

    #[test]
    fn test_format_impacts_lists_all_domains() {
        let result = format_impacts(&sample().impacts, false);
        for domain in ["Sleep", "Exercise", "Deep Work", "Nutrition", "Social"] {
            assert!(result.contains(domain));
        }
        assert!(result.contains("career_advancement"));
        assert!(result.contains("1.30"));
    }

    #[test]
    fn test_format_impacts_tsv() {
        let result = format_impacts_tsv(&sample().impacts);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 24);
        assert!(lines.iter().all(|l| l.split('\t').count() == 3));
        assert!(lines[0].starts_with("sleep\thealth_score\t"));
        assert!(lines.iter().any(|l| *l == "deep_work\tcareer_advancement\t1.3"));
        // Same field order as the table view
        let tsv_fields: Vec<&str> = lines.iter().map(|l| l.split('\t').nth(1).unwrap_or("")).collect();
        assert_eq!(
            &tsv_fields[4..9],
            &["weekly_weight_loss", "health_score", "energy_boost", "mental_clarity", "longevity_bonus"]
        );
    }

    #[test]
    fn test_format_projection() {
        let evaluation = sample();
        let result = format_projection(&evaluation.projection, &evaluation.milestones, false);
        assert!(result.contains("Now"));
        assert!(result.contains("1 yr"));
        assert!(result.contains("160.0"));
        assert!(result.contains("30 days   Health score: 51%"));
    }

    #[test]
    fn test_format_projection_tsv() {
        let result = format_projection_tsv(&sample().projection);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Now\t160.0\t"));
        assert!(lines[0].ends_with("\t0"));
    }

    #[test]
    fn test_format_overall_tsv() {
        let result = format_overall_tsv(&sample().overall);
        assert!(result.starts_with("health\t47."));
        assert_eq!(result.lines().count(), 3);
    }

    #[test]
    fn test_format_energy() {
        let estimate = estimate_energy(&Profile::default(), "moderate");
        let result = format_energy(&estimate, false);
        assert!(result.contains("BMR:      1709 kcal/day"));
        assert!(result.contains("moderate (x1.55)"));
        assert!(result.contains("TDEE:     2649 kcal/day"));
    }

    #[test]
    fn test_format_breakdown() {
        let breakdowns = explain_overall(&sample().impacts);
        let result = format_breakdown(&breakdowns);
        assert!(result.contains("Health: 47.45"));
        assert!(result.contains("Low stress"));
    }
}
