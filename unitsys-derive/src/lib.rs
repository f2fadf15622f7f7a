//! Derive macro implementation used by `unitsys-core`.
//!
//! `unitsys-derive` is an implementation detail of this workspace. The `Kind` derive expands in terms of
//! `crate::Kind` and `crate::Quantity`, so it is intended to be used by `unitsys-core` (or by crates that
//! expose an identical crate-root API).
//!
//! Most users should depend on `unitsys` instead and use the predefined quantity kinds.
//!
//! # Generated impls
//!
//! For a kind marker type `MyKind`, the derive implements:
//!
//! - `crate::Kind for MyKind`
//! - `core::fmt::Display for crate::Quantity<MyKind>` (formats as `<base-unit value> <symbol>`)
//!
//! # Attributes
//!
//! The derive reads a required `#[kind(...)]` attribute:
//!
//! - `symbol = "m"`: printable symbol of the kind's SI base unit

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Ident, LitStr, Token,
};

/// Derive `crate::Kind` and a `Display` impl for `crate::Quantity<ThisKind>`.
///
/// The derive must be paired with a `#[kind(...)]` attribute providing `symbol`.
///
/// This macro is intended for use by `unitsys-core`.
#[proc_macro_derive(Kind, attributes(kind))]
pub fn derive_kind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_kind_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_kind_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    // Parse the #[kind(...)] attribute
    let kind_attr = parse_kind_attribute(&input.attrs)?;

    let symbol = &kind_attr.symbol;

    let expanded = quote! {
        impl crate::Kind for #name {
            const SYMBOL: &'static str = #symbol;
        }

        impl ::core::fmt::Display for crate::Quantity<#name> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::write!(f, "{} {}", self.base_value(), <#name as crate::Kind>::SYMBOL)
            }
        }
    };

    Ok(expanded)
}

/// Parsed contents of the `#[kind(...)]` attribute.
struct KindAttribute {
    symbol: LitStr,
    // Future extensions:
    // long_name: Option<LitStr>,
    // plural: Option<LitStr>,
}

impl Parse for KindAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            // Consume trailing comma if present
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;

        Ok(KindAttribute { symbol })
    }
}

fn parse_kind_attribute(attrs: &[Attribute]) -> syn::Result<KindAttribute> {
    for attr in attrs {
        if attr.path().is_ident("kind") {
            return attr.parse_args::<KindAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[kind(...)] attribute",
    ))
}
