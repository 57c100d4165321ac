//! `#[derive(Members)]` expansion.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Data, DeriveInput, Fields, Visibility};

use crate::common::key::key_type_tokens;

/// Emit one `HasMember<key>` impl per pub named field, plus the `Fields`
/// key list in declaration order.
///
/// Non-pub fields are skipped on purpose: accessibility, not mere
/// existence, gates detection. Unit structs, tuple structs, enums, and
/// unions have no nameable members in this model and get the empty list.
pub fn expand_derive_members(input: DeriveInput) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let names: Vec<(String, Span)> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named
                .named
                .iter()
                .filter(|field| matches!(field.vis, Visibility::Public(_)))
                .filter_map(|field| field.ident.as_ref())
                .map(|ident| (ident.to_string(), ident.span()))
                .collect(),
            Fields::Unnamed(_) | Fields::Unit => Vec::new(),
        },
        Data::Enum(_) | Data::Union(_) => Vec::new(),
    };

    let mut keys = Vec::new();
    for (name, span) in &names {
        match key_type_tokens(name, *span) {
            Ok(key) => keys.push(key),
            Err(err) => return err.to_compile_error(),
        }
    }

    let has_member_impls = keys.iter().map(|key| {
        quote! {
            impl #impl_generics ::member_probe::HasMember<#key>
                for #ident #ty_generics #where_clause {}
        }
    });

    // Fields list: fold the keys into a KCons chain, declaration order first.
    let mut list = quote! { ::member_probe::KNil };
    for key in keys.iter().rev() {
        list = quote! { ::member_probe::KCons<#key, #list> };
    }

    quote! {
        #(#has_member_impls)*

        impl #impl_generics ::member_probe::Fields for #ident #ty_generics #where_clause {
            type Names = #list;
        }
    }
}
