pub mod formatter;
pub mod report;

pub use formatter::{
    format_breakdown, format_json, format_percent, format_recommendation, format_recommendations,
    format_report, format_scores, format_tsv, score_bar, should_use_colors,
};
pub use report::{ConsiderationNote, Report};
