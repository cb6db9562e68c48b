//! Owned, incrementally built templates.
//!
//! [`Template`] complements [`gql`](crate::gql):
//! - `gql()` is great when segments and values are known up front.
//! - `Template` is great when a query is *composed* piece by piece and kept
//!   around (e.g. across threads) before rendering.
//!
//! # Example
//!
//! ```ignore
//! use gql_tag::Template;
//!
//! let mut q = Template::new("query { users(first: ");
//! q.push_value(10).push(") { id");
//! if with_email {
//!     q.push(" email");
//! }
//! q.push(" } }");
//!
//! let body = q.render();
//! ```

use std::fmt;
use std::sync::Arc;

use crate::config::TagConfig;
use crate::error::TagResult;
use crate::tag;
use crate::value::Interpolate;

#[derive(Debug, Clone)]
enum TemplatePart {
    Literal(String),
    Value,
}

/// An owned list of literal segments and interpolated values.
///
/// The parts always satisfy `segments().len() == value_count() + 1`: consecutive
/// values are separated by an empty segment and a trailing value is followed by one.
#[derive(Clone)]
pub struct Template {
    parts: Vec<TemplatePart>,
    values: Vec<Arc<dyn Interpolate + Send + Sync>>,
}

impl Template {
    /// Create a new template starting with a literal segment.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            parts: vec![TemplatePart::Literal(initial.into())],
            values: Vec::new(),
        }
    }

    /// Create an empty template.
    pub fn empty() -> Self {
        Self {
            parts: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Build a template from parallel segments and values.
    ///
    /// Follows [`gql`](crate::gql) on a length mismatch: each segment is followed by the
    /// value at the same index, so one surplus value lands after the last segment and
    /// any further ones are ignored. Missing values are left out.
    pub fn from_parts<I, V>(segments: &[&str], values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Interpolate + Send + Sync + 'static,
    {
        let mut template = Self::empty();
        let mut values = values.into_iter();
        for segment in segments {
            template.push(segment);
            if let Some(value) = values.next() {
                template.push_value(value);
            }
        }
        template
    }

    /// Append literal text.
    pub fn push(&mut self, text: &str) -> &mut Self {
        match self.parts.last_mut() {
            Some(TemplatePart::Literal(last)) => last.push_str(text),
            _ => self.parts.push(TemplatePart::Literal(text.to_string())),
        }
        self
    }

    /// Append an interpolated value.
    pub fn push_value<V>(&mut self, value: V) -> &mut Self
    where
        V: Interpolate + Send + Sync + 'static,
    {
        self.push_shared(Arc::new(value))
    }

    /// Append an already shared interpolated value.
    pub fn push_shared(&mut self, value: Arc<dyn Interpolate + Send + Sync>) -> &mut Self {
        if !matches!(self.parts.last(), Some(TemplatePart::Literal(_))) {
            self.parts.push(TemplatePart::Literal(String::new()));
        }
        self.parts.push(TemplatePart::Value);
        self.values.push(value);
        self
    }

    /// Append another template, consuming it.
    pub fn push_template(&mut self, other: Template) -> &mut Self {
        let mut values = other.values.into_iter();
        for part in other.parts {
            match part {
                TemplatePart::Literal(text) => {
                    self.push(&text);
                }
                TemplatePart::Value => {
                    if let Some(value) = values.next() {
                        self.push_shared(value);
                    }
                }
            }
        }
        self
    }

    /// Literal segments, including the empty ones around adjacent values.
    pub fn segments(&self) -> Vec<&str> {
        let mut segments: Vec<&str> = self
            .parts
            .iter()
            .filter_map(|p| match p {
                TemplatePart::Literal(s) => Some(s.as_str()),
                TemplatePart::Value => None,
            })
            .collect();
        if matches!(self.parts.last(), Some(TemplatePart::Value)) {
            segments.push("");
        }
        segments
    }

    /// Number of interpolated values.
    pub fn value_count(&self) -> usize {
        self.values.len()
    }

    /// `true` if the template has neither text nor values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
            && self.parts.iter().all(|p| match p {
                TemplatePart::Literal(s) => s.is_empty(),
                TemplatePart::Value => false,
            })
    }

    fn values_ref(&self) -> Vec<&dyn Interpolate> {
        self.values
            .iter()
            .map(|v| v.as_ref() as &dyn Interpolate)
            .collect()
    }

    /// Render with falsy substitution, like [`gql`](crate::gql).
    pub fn render(&self) -> String {
        tag::gql(&self.segments(), &self.values_ref())
    }

    /// Render with an explicit configuration.
    pub fn render_with(&self, config: &TagConfig) -> TagResult<String> {
        tag::gql_with(config, &self.segments(), &self.values_ref())
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for Template {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Template {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("segments", &self.segments())
            .field("values", &self.values)
            .finish()
    }
}
