//! Member-name to type-level key encoding.
//!
//! Every macro that mentions a member name funnels through
//! [`key_type_tokens`], so the derive, the attribute, and `member_key!`
//! cannot disagree on how a name encodes.

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};

/// Input to `member_key!`: a bare identifier or a string literal.
pub struct KeyInput {
    pub name: String,
    pub span: Span,
}

impl Parse for KeyInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lookahead = input.lookahead1();
        if lookahead.peek(syn::LitStr) {
            let lit: syn::LitStr = input.parse()?;
            Ok(KeyInput {
                name: lit.value(),
                span: lit.span(),
            })
        } else if lookahead.peek(syn::Ident) {
            let ident: syn::Ident = input.parse()?;
            Ok(KeyInput {
                name: ident.to_string(),
                span: ident.span(),
            })
        } else {
            Err(lookahead.error())
        }
    }
}

pub fn expand_member_key(input: KeyInput) -> TokenStream {
    match key_type_tokens(&input.name, input.span) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

/// Encode an ASCII member name as nested `KCons<Byte<Xh, Xl>, ...>` tokens.
///
/// Raw identifiers encode without their `r#` prefix, so `r#type` and a
/// field the compiler happens to accept as `type` name the same member.
pub fn key_type_tokens(name: &str, span: Span) -> syn::Result<TokenStream> {
    let name = name.strip_prefix("r#").unwrap_or(name);
    if name.is_empty() {
        return Err(syn::Error::new(span, "member name must not be empty"));
    }
    if !name.is_ascii() {
        return Err(syn::Error::new(
            span,
            "member keys are ASCII-only; rename the member or declare it via a manual impl",
        ));
    }

    let mut out = quote! { ::member_probe::KNil };
    for byte in name.bytes().rev() {
        let hi = nibble_ident(byte >> 4);
        let lo = nibble_ident(byte & 0xF);
        out = quote! {
            ::member_probe::KCons<
                ::member_probe::Byte<::member_probe::#hi, ::member_probe::#lo>,
                #out
            >
        };
    }
    Ok(out)
}

fn nibble_ident(nibble: u8) -> syn::Ident {
    format_ident!("X{:X}", nibble)
}
