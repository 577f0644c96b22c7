pub mod formatter;

pub use formatter::{
    format_breakdown, format_events, format_json, format_ranked_table, format_score,
    format_summary, format_tier_table, format_tsv, should_use_colors,
};
