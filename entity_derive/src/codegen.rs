//! Code generation for the Entity and FromRow implementations

use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use crate::parsing::EntityFields;

pub fn generate_entity_impl(
    name: &Ident,
    table_name: &str,
    entity: &EntityFields,
) -> TokenStream {
    let column_names: Vec<String> = entity.columns.iter().map(|c| c.to_string()).collect();
    let field_idents = &entity.columns;
    let primary_key = &entity.primary_key;
    let primary_key_name = primary_key.to_string();
    let primary_key_ty = &entity.primary_key_ty;

    quote! {
        impl dao_core::Entity for #name {
            type Id = #primary_key_ty;

            fn table_name() -> &'static str {
                #table_name
            }

            fn columns() -> &'static [&'static str] {
                &[#(#column_names),*]
            }

            fn primary_key_column() -> &'static str {
                #primary_key_name
            }

            fn primary_key(&self) -> &Self::Id {
                &self.#primary_key
            }

            fn to_params(
                &self,
            ) -> ::std::result::Result<
                ::std::vec::Vec<dao_core::rusqlite::types::Value>,
                dao_core::rusqlite::Error,
            > {
                ::std::result::Result::Ok(::std::vec![
                    #(dao_core::row::owned_value(&self.#field_idents)?),*
                ])
            }
        }
    }
}

pub fn generate_from_row_impl(name: &Ident, fields: &[Ident]) -> TokenStream {
    let assignments = fields.iter().map(|field| {
        let column = field.to_string();
        quote! {
            #field: dao_core::row::column_or_default(row, #column)?
        }
    });

    quote! {
        impl dao_core::FromRow for #name {
            fn from_row(
                row: &dao_core::rusqlite::Row<'_>,
            ) -> ::std::result::Result<Self, dao_core::rusqlite::Error> {
                ::std::result::Result::Ok(Self {
                    #(#assignments),*
                })
            }
        }
    }
}
