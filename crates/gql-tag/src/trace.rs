//! `tracing` output for rendered queries.
//!
//! Enable via the crate feature: `gql-tag = { features = ["tracing"] }`.

use crate::config::TagConfig;
use tracing::Level;

/// Truncate `query` to at most `max_bytes`, backing off to a char boundary.
pub(crate) fn truncate_query_bytes(query: &str, max_bytes: usize) -> &str {
    if query.len() <= max_bytes {
        return query;
    }
    let mut end = max_bytes;
    while end > 0 && !query.is_char_boundary(end) {
        end -= 1;
    }
    &query[..end]
}

fn display_query(config: &TagConfig, query: &str) -> String {
    match config.max_query_length {
        Some(max) if query.len() > max => format!("{}...", truncate_query_bytes(query, max)),
        _ => query.to_string(),
    }
}

/// Emit the rendered query at the configured level.
pub(crate) fn rendered(config: &TagConfig, segments: usize, values: usize, query: &str) {
    /// Dispatch a tracing event at a runtime-determined level.
    macro_rules! emit_at_level {
        ($level:expr, $($field:tt)*) => {
            match $level {
                Level::ERROR => tracing::error!($($field)*),
                Level::WARN  => tracing::warn!($($field)*),
                Level::INFO  => tracing::info!($($field)*),
                Level::DEBUG => tracing::debug!($($field)*),
                Level::TRACE => tracing::trace!($($field)*),
            }
        };
    }

    let query = display_query(config, query);
    emit_at_level!(
        config.level,
        target: "gql_tag.query",
        segments,
        values,
        substitution = ?config.substitution,
        query = %query,
        "rendered query"
    );
}

/// Emit a warning for a rejected strict-arity render.
pub(crate) fn arity_rejected(segments: usize, values: usize) {
    tracing::warn!(
        target: "gql_tag.query",
        segments,
        values,
        "arity mismatch: expected segments == values + 1"
    );
}
