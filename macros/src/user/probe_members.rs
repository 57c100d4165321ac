//! `#[probe_members]` attribute expansion.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{ImplItem, ItemImpl, Visibility};

use crate::common::key::key_type_tokens;

/// Re-emit the impl block unchanged and add one `HasMember<key>` impl per
/// pub method and pub associated const.
///
/// A method and a field of the same name on one type would produce
/// overlapping `HasMember` impls; coherence rejects that, which is the
/// crate's ambiguity policy surfacing as a diagnostic.
pub fn expand_probe_members(attr: TokenStream, item: ItemImpl) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new_spanned(attr, "#[probe_members] takes no arguments")
            .to_compile_error();
    }
    if item.trait_.is_some() {
        return syn::Error::new(
            Span::call_site(),
            "#[probe_members] applies to inherent impl blocks only",
        )
        .to_compile_error();
    }

    let self_ty = &item.self_ty;
    let (impl_generics, _, where_clause) = item.generics.split_for_impl();

    let mut member_impls = Vec::new();
    for sub in &item.items {
        let (name, span, vis) = match sub {
            ImplItem::Fn(method) => (
                method.sig.ident.to_string(),
                method.sig.ident.span(),
                &method.vis,
            ),
            ImplItem::Const(konst) => (konst.ident.to_string(), konst.ident.span(), &konst.vis),
            _ => continue,
        };
        if !matches!(vis, Visibility::Public(_)) {
            continue;
        }
        match key_type_tokens(&name, span) {
            Ok(key) => member_impls.push(quote! {
                impl #impl_generics ::member_probe::HasMember<#key>
                    for #self_ty #where_clause {}
            }),
            Err(err) => return err.to_compile_error(),
        }
    }

    quote! {
        #item
        #(#member_impls)*
    }
}
