use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Error, Expr, LitStr, Result, Token};

use crate::split::{Slot, split_template};

/// `gql!("template", args...)`
pub(crate) struct GqlInput {
    template: LitStr,
    args: Punctuated<Expr, Token![,]>,
}

impl Parse for GqlInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let template: LitStr = input.parse().map_err(|e| {
            Error::new(e.span(), "gql! expects a string literal template")
        })?;
        let args = if input.is_empty() {
            Punctuated::new()
        } else {
            input.parse::<Token![,]>()?;
            Punctuated::parse_terminated(input)?
        };
        Ok(Self { template, args })
    }
}

pub(crate) fn expand(input: GqlInput) -> Result<TokenStream> {
    let GqlInput { template, args } = input;
    let split = split_template(&template.value()).map_err(|msg| Error::new(template.span(), msg))?;

    let mut positional = args.into_iter();
    let mut values: Vec<Expr> = Vec::with_capacity(split.slots.len());
    for slot in &split.slots {
        let expr = match slot {
            Slot::Inline(source) => syn::parse_str::<Expr>(source).map_err(|e| {
                Error::new(
                    template.span(),
                    format!("invalid expression in `${{{source}}}`: {e}"),
                )
            })?,
            Slot::Positional => positional.next().ok_or_else(|| {
                Error::new(
                    template.span(),
                    "gql! template has more `${}` slots than arguments",
                )
            })?,
        };
        values.push(expr);
    }

    if let Some(extra) = positional.next() {
        return Err(Error::new_spanned(
            extra,
            "gql! argument is not used by any `${}` slot",
        ));
    }

    let segments = &split.segments;
    Ok(quote! {
        ::gql_tag::gql(
            &[#(#segments),*],
            &[#(&(#values)),*],
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_str(tokens: TokenStream) -> Result<String> {
        let input: GqlInput = syn::parse2(tokens)?;
        expand(input).map(|ts| ts.to_string())
    }

    #[test]
    fn expands_to_gql_call() {
        let out = expand_str(quote! { "a${x}b" }).unwrap();
        assert!(out.contains(":: gql_tag :: gql"));
        assert!(out.contains("\"a\""));
        assert!(out.contains("\"b\""));
        assert!(out.contains("& (x)"));
    }

    #[test]
    fn positional_args_fill_empty_slots() {
        let out = expand_str(quote! { "first: ${}", limit + 1 }).unwrap();
        assert!(out.contains("& (limit + 1)"));
    }

    #[test]
    fn trailing_comma_is_accepted() {
        assert!(expand_str(quote! { "a${}", n, }).is_ok());
    }

    #[test]
    fn missing_positional_arg_is_an_error() {
        let err = expand_str(quote! { "a${}b${}" , x }).unwrap_err();
        assert!(err.to_string().contains("more `${}` slots"));
    }

    #[test]
    fn unused_arg_is_an_error() {
        let err = expand_str(quote! { "a${x}", y }).unwrap_err();
        assert!(err.to_string().contains("not used"));
    }

    #[test]
    fn bad_expression_is_an_error() {
        let err = expand_str(quote! { "a${1 +}" }).unwrap_err();
        assert!(err.to_string().contains("invalid expression"));
    }

    #[test]
    fn non_literal_template_is_an_error() {
        assert!(expand_str(quote! { template }).is_err());
    }
}
