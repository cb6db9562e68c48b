//! Procedural macros for gql-tag
//!
//! Provides the `gql!` template macro.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod gql;
mod split;

/// Build a query string from a template literal.
///
/// # Example
///
/// ```ignore
/// use gql_tag::gql;
///
/// let id = 12345;
/// let query = gql!(r#"query { product(id: "${id}") { displayName } }"#);
/// assert_eq!(query, r#"query { product(id: "12345") { displayName } }"#);
/// ```
///
/// # Syntax
///
/// - `${expr}` - interpolate any expression at this position
/// - `${}` - interpolate the next trailing argument: `gql!("first: ${}", n)`
/// - `$${` - a literal `${`
///
/// Everything else, including `$variables` and all whitespace, is copied verbatim.
/// Interpolated values must implement `gql_tag::Interpolate`; falsy values
/// (`0`, `false`, `""`, `None`) render as the empty string.
#[proc_macro]
pub fn gql(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as gql::GqlInput);
    gql::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
