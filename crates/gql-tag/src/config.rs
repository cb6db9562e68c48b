//! Render configuration.

#[cfg(feature = "tracing")]
use tracing::Level;

/// Which interpolated values are replaced by the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Substitution {
    /// Any falsy value (zero, `false`, empty string, absent) renders as `""`.
    ///
    /// This is the behavior of [`gql`](crate::gql) and the `gql!` macro.
    #[default]
    Falsy,
    /// Only absent values (`None`, `()`) render as `""`; `0` renders as `"0"`.
    Nullish,
}

/// How a mismatch between segment and value counts is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArityCheck {
    /// Each segment is followed by the value at the same index, if any.
    /// Missing values render as `""`, surplus values past the segment count are ignored.
    #[default]
    Lenient,
    /// Require `segments.len() == values.len() + 1`.
    Strict,
}

/// Configuration for the configurable render entry points
/// ([`gql_with`](crate::gql_with), [`render_into`](crate::render_into),
/// [`Template::render_with`](crate::Template::render_with)).
///
/// The default matches [`gql`](crate::gql): falsy substitution, lenient arity.
#[derive(Debug, Clone)]
pub struct TagConfig {
    /// Substitution rule for interpolated values.
    pub substitution: Substitution,
    /// Arity handling.
    pub arity: ArityCheck,
    /// Tracing event level for rendered queries.
    #[cfg(feature = "tracing")]
    pub level: Level,
    /// Truncate long queries in tracing output (in bytes). `None` means no truncation.
    #[cfg(feature = "tracing")]
    pub max_query_length: Option<usize>,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            substitution: Substitution::default(),
            arity: ArityCheck::default(),
            #[cfg(feature = "tracing")]
            level: Level::DEBUG,
            #[cfg(feature = "tracing")]
            max_query_length: Some(200),
        }
    }
}

impl TagConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Falsy substitution and lenient arity, same as [`gql`](crate::gql).
    pub fn compatible() -> Self {
        Self::default()
    }

    /// Nullish substitution: `0` and `false` are rendered instead of dropped.
    pub fn nullish() -> Self {
        Self::default().with_substitution(Substitution::Nullish)
    }

    /// Set the substitution rule.
    pub fn with_substitution(mut self, substitution: Substitution) -> Self {
        self.substitution = substitution;
        self
    }

    /// Set the arity handling.
    pub fn with_arity(mut self, arity: ArityCheck) -> Self {
        self.arity = arity;
        self
    }

    /// Shorthand for `with_arity(ArityCheck::Strict)`.
    pub fn strict(self) -> Self {
        self.with_arity(ArityCheck::Strict)
    }

    /// Override the tracing event level.
    #[cfg(feature = "tracing")]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set maximum query length to log.
    #[cfg(feature = "tracing")]
    pub fn max_query_length(mut self, len: usize) -> Self {
        self.max_query_length = Some(len);
        self
    }

    /// Disable query truncation in tracing output.
    #[cfg(feature = "tracing")]
    pub fn no_truncate(mut self) -> Self {
        self.max_query_length = None;
        self
    }

    /// Whether `value` is replaced by the empty string under this configuration.
    pub(crate) fn substitutes(&self, value: &dyn crate::Interpolate) -> bool {
        match self.substitution {
            Substitution::Falsy => value.is_falsy(),
            Substitution::Nullish => value.is_nullish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_compatible() {
        let config = TagConfig::new();
        assert_eq!(config.substitution, Substitution::Falsy);
        assert_eq!(config.arity, ArityCheck::Lenient);
    }

    #[test]
    fn builders_compose() {
        let config = TagConfig::nullish().strict();
        assert_eq!(config.substitution, Substitution::Nullish);
        assert_eq!(config.arity, ArityCheck::Strict);
    }

    #[test]
    fn substitutes_follows_rule() {
        let falsy = TagConfig::compatible();
        let nullish = TagConfig::nullish();

        assert!(falsy.substitutes(&0_i32));
        assert!(!nullish.substitutes(&0_i32));
        assert!(falsy.substitutes(&None::<i32>));
        assert!(nullish.substitutes(&None::<i32>));
        assert!(!falsy.substitutes(&"x"));
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn tracing_settings() {
        let config = TagConfig::new().level(Level::TRACE).max_query_length(10);
        assert_eq!(config.level, Level::TRACE);
        assert_eq!(config.max_query_length, Some(10));
        assert_eq!(config.no_truncate().max_query_length, None);
    }
}
