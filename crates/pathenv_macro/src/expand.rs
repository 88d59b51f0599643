//! Code generation for `#[derive(EnvBind)]`.
//!
//! # Generated Code Pattern
//!
//! ```rust,ignore
//! impl ::pathenv::EnvBind for Config {
//!     fn bind_env(&mut self, env: &dyn ::pathenv::EnvSource, prefix: &str)
//!         -> Result<bool, ::pathenv::Error>
//!     {
//!         let mut changed = false;
//!         changed |= ::pathenv::EnvField::bind_field(
//!             &mut self.port,
//!             env,
//!             &::pathenv::FieldSpec::new(
//!                 ::pathenv::field_name_to_var(prefix, "port"),
//!                 false,
//!                 Some("8080"),
//!             ),
//!         )?;
//!         Ok(changed)
//!     }
//! }
//!
//! impl ::pathenv::EnvField for Config {
//!     fn bind_field(&mut self, env: &dyn ::pathenv::EnvSource, spec: &::pathenv::FieldSpec<'_>)
//!         -> Result<bool, ::pathenv::Error>
//!     {
//!         ::pathenv::EnvBind::bind_env(self, env, &spec.nested_prefix())
//!     }
//! }
//! ```
//!
//! The field walk short-circuits on the first error through `?`.

use proc_macro2::TokenStream as QuoteStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DataStruct, DeriveInput, Field, Fields};

use crate::parse::EnvAttr;

/// Orchestrates expansion of one derive input.
pub struct Expander;

impl Expander {
    /// Expands the derive, or explains why the input cannot be bound.
    pub fn expand(input: DeriveInput) -> syn::Result<QuoteStream> {
        let fields = Self::named_fields(&input)?;

        let mut binds = Vec::with_capacity(fields.len());
        for field in fields {
            if let Some(bind) = Self::field_bind(field)? {
                binds.push(bind);
            }
        }

        let name = &input.ident;
        let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

        let body = if binds.is_empty() {
            quote! {
                let _ = (env, prefix);
                ::core::result::Result::Ok(false)
            }
        } else {
            quote! {
                let mut changed = false;
                #(#binds)*
                ::core::result::Result::Ok(changed)
            }
        };

        Ok(quote! {
            #[automatically_derived]
            impl #impl_generics ::pathenv::EnvBind for #name #type_generics #where_clause {
                fn bind_env(
                    &mut self,
                    env: &dyn ::pathenv::EnvSource,
                    prefix: &str,
                ) -> ::core::result::Result<bool, ::pathenv::Error> {
                    #body
                }
            }

            #[automatically_derived]
            impl #impl_generics ::pathenv::EnvField for #name #type_generics #where_clause {
                fn bind_field(
                    &mut self,
                    env: &dyn ::pathenv::EnvSource,
                    spec: &::pathenv::FieldSpec<'_>,
                ) -> ::core::result::Result<bool, ::pathenv::Error> {
                    ::pathenv::EnvBind::bind_env(self, env, &spec.nested_prefix())
                }
            }
        })
    }

    /// Only structs with named fields (or no fields) carry the names that
    /// variables are derived from.
    fn named_fields(input: &DeriveInput) -> syn::Result<Vec<&Field>> {
        match &input.data {
            Data::Struct(DataStruct {
                fields: Fields::Named(named),
                ..
            }) => Ok(named.named.iter().collect()),

            Data::Struct(DataStruct {
                fields: Fields::Unit,
                ..
            }) => Ok(Vec::new()),

            Data::Struct(DataStruct {
                fields: fields @ Fields::Unnamed(_),
                ..
            }) => Err(syn::Error::new_spanned(
                fields,
                "EnvBind requires named fields; tuple structs have no names to derive variables from",
            )),

            Data::Enum(data) => Err(syn::Error::new(
                data.enum_token.span,
                "EnvBind can only be derived for structs, not enums",
            )),

            Data::Union(data) => Err(syn::Error::new(
                data.union_token.span,
                "EnvBind can only be derived for structs, not unions",
            )),
        }
    }

    /// The statement binding one field, or `None` for skipped fields.
    fn field_bind(field: &Field) -> syn::Result<Option<QuoteStream>> {
        let attr = EnvAttr::from_field(field)?;
        if attr.skip {
            return Ok(None);
        }

        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "EnvBind requires named fields"));
        };

        let field_name = ident.unraw().to_string();
        let required = attr.required;
        let default = match &attr.default {
            Some(value) => quote! { ::core::option::Option::Some(#value) },
            None => quote! { ::core::option::Option::None },
        };

        Ok(Some(quote! {
            changed |= ::pathenv::EnvField::bind_field(
                &mut self.#ident,
                env,
                &::pathenv::FieldSpec::new(
                    ::pathenv::field_name_to_var(prefix, #field_name),
                    #required,
                    #default,
                ),
            )?;
        }))
    }
}
