//! Convenient imports for typical `gql-tag` usage.
//!
//! ```ignore
//! use gql_tag::prelude::*;
//! ```

pub use crate::{Interpolate, TagConfig, TagError, TagResult, Template, Text, gql, gql_with};
