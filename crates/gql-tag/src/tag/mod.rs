//! The query tag: interleave literal segments with interpolated values.
//!
//! ```ignore
//! use gql_tag::gql;
//!
//! let id = 12345;
//! let q = gql(&["product(id: \"", "\") { displayName }"], &[&id]);
//! assert_eq!(q, "product(id: \"12345\") { displayName }");
//! ```
//!
//! Nothing is escaped or validated; the output is plain text.

use std::fmt;

use crate::config::{ArityCheck, TagConfig};
use crate::error::{TagError, TagResult};
use crate::value::Interpolate;


/// Interleave `segments` and `values` into a single query string.
///
/// Expects `segments.len() == values.len() + 1`. Falsy values (`0`, `false`, `""`,
/// `None`) render as the empty string. On a length mismatch each segment is still
/// followed by the value at the same index when there is one.
pub fn gql(segments: &[&str], values: &[&dyn Interpolate]) -> String {
    let mut out = String::with_capacity(segments.iter().map(|s| s.len()).sum());
    reduce(&TagConfig::compatible(), &mut out, segments, values);
    out
}

/// Like [`gql`], with explicit substitution and arity rules.
pub fn gql_with(
    config: &TagConfig,
    segments: &[&str],
    values: &[&dyn Interpolate],
) -> TagResult<String> {
    check_arity(config, segments.len(), values.len())?;

    let mut out = String::with_capacity(segments.iter().map(|s| s.len()).sum());
    reduce(config, &mut out, segments, values);

    #[cfg(feature = "tracing")]
    crate::trace::rendered(config, segments.len(), values.len(), &out);

    Ok(out)
}

/// Render into any [`fmt::Write`] sink.
pub fn render_into<W: fmt::Write + ?Sized>(
    config: &TagConfig,
    out: &mut W,
    segments: &[&str],
    values: &[&dyn Interpolate],
) -> TagResult<()> {
    let rendered = gql_with(config, segments, values)?;
    out.write_str(&rendered)?;
    Ok(())
}

pub(crate) fn check_arity(config: &TagConfig, segments: usize, values: usize) -> TagResult<()> {
    if config.arity == ArityCheck::Lenient || arity_matches(segments, values) {
        return Ok(());
    }

    #[cfg(feature = "tracing")]
    crate::trace::arity_rejected(segments, values);

    Err(TagError::arity_mismatch(segments, values))
}

/// `segments == values + 1`; an empty template (no segments, no values) also passes.
pub(crate) fn arity_matches(segments: usize, values: usize) -> bool {
    segments == values + 1 || (segments == 0 && values == 0)
}

pub(crate) fn reduce(
    config: &TagConfig,
    out: &mut String,
    segments: &[&str],
    values: &[&dyn Interpolate],
) {
    for (i, segment) in segments.iter().enumerate() {
        out.push_str(segment);
        if let Some(value) = values.get(i) {
            push_value(config, out, *value);
        }
    }
}

pub(crate) fn push_value(config: &TagConfig, out: &mut String, value: &dyn Interpolate) {
    if !config.substitutes(value) {
        value.write_to(out);
    }
}
