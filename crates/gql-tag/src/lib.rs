//! # gql-tag
//!
//! A template tag for GraphQL query bodies.
//!
//! Literal segments and interpolated values are interleaved into one string.
//! Nothing is escaped, parsed or validated: the output is exactly the text you wrote
//! with the values dropped in.
//!
//! ## Calling conventions
//!
//! - **Macro**: `gql!("...${expr}...")` splits the literal at compile time
//! - **Function**: `gql(&segments, &values)` with `segments.len() == values.len() + 1`
//! - **Builder**: [`Template`] for queries assembled piece by piece
//!
//! ```ignore
//! use gql_tag::gql;
//!
//! let id = 12345;
//! let query = gql!(r#"
//!     query {
//!       product(id: "${id}") {
//!         displayName
//!       }
//!     }
//! "#);
//! ```
//!
//! ## Falsy values
//!
//! [`gql`] and `gql!` render falsy values (`0`, `false`, `""`, `None`) as the empty
//! string. Use [`gql_with`] and [`TagConfig::nullish`] to keep `0` and `false`.

// Lets `gql!` expansions (`::gql_tag::...`) resolve inside this crate's own tests.
extern crate self as gql_tag;

pub mod config;
pub mod error;
pub mod prelude;
pub mod tag;
pub mod template;
pub mod value;

#[cfg(feature = "tracing")]
mod trace;

pub use config::{ArityCheck, Substitution, TagConfig};
pub use error::{TagError, TagResult};
pub use tag::{gql, gql_with, render_into};
pub use template::Template;
pub use value::{Interpolate, Text};

#[cfg(feature = "macros")]
pub use gql_tag_macros::gql;
