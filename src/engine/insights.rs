use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::impact::DomainImpacts;
use super::inputs::LifestyleInputs;

/// One spoke of the lifestyle balance chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BalanceEntry {
    pub category: &'static str,
    pub value: f64,
    pub full_mark: f64,
}

/// Build the five-spoke balance series from the domain impacts.
pub fn balance(impacts: &DomainImpacts) -> Vec<BalanceEntry> {
    [
        ("Sleep", impacts.sleep.health_score),
        ("Exercise", impacts.exercise.health_score),
        ("Nutrition", impacts.nutrition.health_score),
        ("Deep Work", impacts.deep_work.productivity_score),
        ("Social", impacts.social.happiness_score),
    ]
    .into_iter()
    .map(|(category, value)| BalanceEntry {
        category,
        value,
        full_mark: 100.0,
    })
    .collect()
}

/// Highest-valued entry; the earliest one wins ties.
pub fn strongest(entries: &[BalanceEntry]) -> Option<&BalanceEntry> {
    entries
        .iter()
        .fold(None, |best: Option<&BalanceEntry>, entry| match best {
            Some(b) if entry.value <= b.value => Some(b),
            _ => Some(entry),
        })
}

/// Lowest-valued entry; the earliest one wins ties.
pub fn weakest(entries: &[BalanceEntry]) -> Option<&BalanceEntry> {
    entries
        .iter()
        .fold(None, |worst: Option<&BalanceEntry>, entry| match worst {
            Some(w) if entry.value >= w.value => Some(w),
            _ => Some(entry),
        })
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: String,
    pub subtitle: &'static str,
    /// Percent change hint shown next to the value
    pub trend: i32,
}

pub fn key_metrics(inputs: &LifestyleInputs, impacts: &DomainImpacts) -> Vec<MetricCard> {
    let energy = (impacts.exercise.energy_boost * impacts.nutrition.energy_level * 100.0).round();
    let focus = (impacts.deep_work.cognitive_reserve * 100.0).round();
    let income = (impacts.deep_work.income_projection * 30.0).round();

    vec![
        MetricCard {
            title: "Weight Loss Rate",
            value: format!("{:.1} lbs/wk", impacts.exercise.weekly_weight_loss),
            subtitle: "Based on exercise",
            trend: if inputs.exercise_minutes > 30 { 12 } else { -5 },
        },
        MetricCard {
            title: "Energy Level",
            value: format!("{}%", energy),
            subtitle: "Physical + Mental",
            trend: 8,
        },
        MetricCard {
            title: "Focus Power",
            value: format!("{}%", focus),
            subtitle: "Cognitive capacity",
            trend: if inputs.deep_work_hours > 2.0 { 15 } else { 0 },
        },
        MetricCard {
            title: "Income Potential",
            value: format!("+${}/mo", income),
            subtitle: "From deep work",
            trend: if inputs.deep_work_hours > 3.0 { 20 } else { 5 },
        },
    ]
}

/// Short human-readable observations for the dashboard.
pub fn insights(impacts: &DomainImpacts, entries: &[BalanceEntry]) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(best) = strongest(entries) {
        lines.push(format!(
            "Your {} score is excellent at {}%",
            best.category,
            best.value.round()
        ));
    }
    if let Some(worst) = weakest(entries) {
        lines.push(format!(
            "Improving {} by 20% could boost overall health by 8%",
            worst.category
        ));
    }
    lines.push(format!(
        "Continue this routine to lose {:.1} lbs and increase productivity by {}%",
        impacts.exercise.weekly_weight_loss * 4.0,
        (impacts.deep_work.skill_growth * 4.0).round()
    ));

    lines
}

/// Consecutive active days, as tracked by the host.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Streak {
    pub days: u32,
    pub last_active: Option<NaiveDate>,
}

impl Streak {
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        self.last_active == Some(today)
    }

    pub fn message(&self) -> &'static str {
        match self.days {
            0 => "Start your journey today!",
            1..=6 => "Building momentum! Keep going!",
            7..=29 => "You're on fire! Don't break the chain!",
            _ => "Incredible consistency! You're unstoppable!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::impact::calculate_impacts;

    fn default_impacts() -> DomainImpacts {
        calculate_impacts(&LifestyleInputs::default())
    }

    #[test]
    fn test_balance_categories() {
        let entries = balance(&default_impacts());
        let categories: Vec<_> = entries.iter().map(|e| e.category).collect();
        assert_eq!(
            categories,
            vec!["Sleep", "Exercise", "Nutrition", "Deep Work", "Social"]
        );
        assert!(entries.iter().all(|e| e.full_mark == 100.0));
    }

    #[test]
    fn test_strongest_and_weakest() {
        let entries = balance(&default_impacts());
        // Nutrition 71, Sleep 70, Deep Work 42, Social 21, Exercise 15
        assert_eq!(strongest(&entries).unwrap().category, "Nutrition");
        assert_eq!(weakest(&entries).unwrap().category, "Exercise");
    }

    #[test]
    fn test_ties_keep_first() {
        let entries = vec![
            BalanceEntry { category: "A", value: 50.0, full_mark: 100.0 },
            BalanceEntry { category: "B", value: 50.0, full_mark: 100.0 },
        ];
        assert_eq!(strongest(&entries).unwrap().category, "A");
        assert_eq!(weakest(&entries).unwrap().category, "A");
        assert!(strongest(&[]).is_none());
    }

    #[test]
    fn test_key_metrics_default() {
        let inputs = LifestyleInputs::default();
        let cards = key_metrics(&inputs, &default_impacts());
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].value, "0.5 lbs/wk");
        assert_eq!(cards[0].trend, -5);
        assert_eq!(cards[1].value, "109%");
        assert_eq!(cards[2].value, "115%");
        assert_eq!(cards[2].trend, 15);
        assert_eq!(cards[3].value, "+$945/mo");
        assert_eq!(cards[3].trend, 5);
    }

    #[test]
    fn test_insights_text() {
        let impacts = default_impacts();
        let lines = insights(&impacts, &balance(&impacts));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Your Nutrition score is excellent at 71%");
        assert!(lines[1].starts_with("Improving Exercise"));
        assert_eq!(
            lines[2],
            "Continue this routine to lose 1.8 lbs and increase productivity by 4%"
        );
    }

    #[test]
    fn test_streak_messages() {
        let mut streak = Streak::default();
        assert_eq!(streak.message(), "Start your journey today!");
        streak.days = 6;
        assert_eq!(streak.message(), "Building momentum! Keep going!");
        streak.days = 7;
        assert_eq!(streak.message(), "You're on fire! Don't break the chain!");
        streak.days = 30;
        assert_eq!(streak.message(), "Incredible consistency! You're unstoppable!");
    }

    #[test]
    fn test_streak_active_today() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let streak = Streak {
            days: 3,
            last_active: Some(today),
        };
        assert!(streak.is_active_on(today));
        assert!(!streak.is_active_on(today.succ_opt().unwrap()));
        assert!(!Streak::default().is_active_on(today));
    }
}
