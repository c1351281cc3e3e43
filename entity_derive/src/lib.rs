//! Procedural macros deriving table metadata and row mapping for entity types
//!
//! `#[derive(Entity)]` implements `dao_core::Entity` (and `dao_core::FromRow`)
//! for a struct with named fields: the column list follows field declaration
//! order, exactly one field must carry `#[primary_key]`, and the table name is
//! the optional `#[table(prefix = "...")]` followed by the lowercased type
//! name. `#[derive(FromRow)]` implements only the row-mapping half, for ad-hoc
//! query result types that map no table of their own.
//!
//! ```rust,ignore
//! use entity_derive::Entity;
//!
//! #[derive(Debug, Clone, Default, Entity)]
//! #[table(prefix = "tb_")]
//! pub struct Student {
//!     #[primary_key]
//!     pub id: i64,
//!     pub name: String,
//!     pub age: i64,
//! }
//! // maps to table "tb_student" with columns (id, name, age)
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod codegen;
mod parsing;

#[proc_macro_derive(Entity, attributes(table, primary_key))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let table_name = match parsing::parse_table_name(&input) {
        Ok(name) => name,
        Err(e) => return e.to_compile_error().into(),
    };

    let entity = match parsing::parse_entity_fields(&input) {
        Ok(entity) => entity,
        Err(e) => return e.to_compile_error().into(),
    };

    let entity_impl = codegen::generate_entity_impl(&input.ident, &table_name, &entity);
    let from_row_impl = codegen::generate_from_row_impl(&input.ident, &entity.columns);

    let expanded = quote::quote! {
        #entity_impl
        #from_row_impl
    };
    TokenStream::from(expanded)
}

#[proc_macro_derive(FromRow)]
pub fn derive_from_row(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let fields = match parsing::parse_named_fields(&input) {
        Ok(fields) => fields,
        Err(e) => return e.to_compile_error().into(),
    };

    let from_row_impl = codegen::generate_from_row_impl(&input.ident, &fields);
    TokenStream::from(quote::quote! { #from_row_impl })
}
