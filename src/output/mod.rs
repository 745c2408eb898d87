pub mod formatter;

pub use formatter::{
    bar_width, format_balance, format_breakdown, format_dashboard, format_energy, format_impacts,
    format_impacts_tsv, format_metrics, format_overall, format_overall_tsv, format_projection,
    format_projection_tsv, format_score, format_streak, score_bar, should_use_colors,
};
