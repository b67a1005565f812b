//! # Better Parametrize Derive
//!
//! Procedural macro for the better-parametrize test extension.
//!
//! This crate provides `#[derive(TestCase)]`, which implements the record
//! capability for a named-field struct: an ordered field list, per-field
//! value access, and the optional explicit `id` label.
//!
//! The macro is automatically re-exported by the main `better-parametrize`
//! crate, so users typically don't need to import this crate directly.

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DataStruct, DeriveInput, Fields, Ident};

/// Implements `TestCase` for a named-field struct and emits an inherent
/// `FIELDS` constant listing the declared fields in declaration order.
///
/// # Usage
///
/// ```rust,ignore
/// #[derive(Clone, TestCase)]
/// struct Case {
///     route: &'static str,
///     status: u16,
///     id: Option<&'static str>,
/// }
/// ```
///
/// Every field type must be `Clone + Debug + Send + Sync + 'static` so the
/// value can be type-erased for the host engine. A field literally named
/// `id` becomes the testcase's explicit display label; its "set" semantics
/// come from the `CaseId` trait, so `None` and empty strings fall back to
/// the synthesized label.
#[proc_macro_derive(TestCase)]
pub fn derive_test_case(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let fields = field_idents(input)?;
    let names = fields
        .iter()
        .map(|field| field.to_string())
        .collect::<Vec<_>>();

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let value_arms = fields.iter().zip(&names).map(|(field, name)| {
        quote! {
            #name => ::std::option::Option::Some(
                ::std::sync::Arc::new(self.#field.clone()) as ::better_parametrize::Value
            ),
        }
    });

    let id_fn = if names.iter().any(|name| name == "id") {
        quote! {
            fn id(&self) -> ::std::option::Option<::std::string::String> {
                ::better_parametrize::CaseId::case_id(&self.id)
            }
        }
    } else {
        quote! {}
    };

    Ok(quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            /// Ordered field names declared by this record type.
            pub const FIELDS: ::better_parametrize::FieldList =
                ::better_parametrize::FieldList(&[#(#names),*]);
        }

        impl #impl_generics ::better_parametrize::TestCase for #ident #ty_generics #where_clause {
            fn field_names(&self) -> ::better_parametrize::FieldList {
                Self::FIELDS
            }

            fn value(
                &self,
                field: &str,
            ) -> ::std::option::Option<::better_parametrize::Value> {
                match field {
                    #(#value_arms)*
                    _ => ::std::option::Option::None,
                }
            }

            #id_fn
        }
    })
}

/// Returns the struct's field identifiers in declaration order, rejecting
/// anything that is not a struct with named fields.
fn field_idents(input: &DeriveInput) -> syn::Result<Vec<&Ident>> {
    let Data::Struct(DataStruct {
        fields: Fields::Named(fields),
        ..
    }) = &input.data
    else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "TestCase can only be derived for structs with named fields",
        ));
    };

    Ok(fields
        .named
        .iter()
        .map(|field| field.ident.as_ref().expect("named field without ident"))
        .collect())
}
