//! Parsing of table and field attributes
//!
//! Handles `#[table(prefix = "...")]` and `#[primary_key]`, and validates the
//! resulting table and column identifiers at macro expansion time so invalid
//! names never reach generated SQL.

use syn::{Data, DeriveInput, Error, Fields, Ident, LitStr, Result, Type};

/// Fields of an entity struct, in declaration order, plus its primary key.
pub struct EntityFields {
    pub columns: Vec<Ident>,
    pub primary_key: Ident,
    pub primary_key_ty: Type,
}

/// Derive the table name: optional prefix + lowercased type name.
///
/// The simple name is lowercased as-is; camelCase type names are not
/// snake_cased.
pub fn parse_table_name(input: &DeriveInput) -> Result<String> {
    let mut prefix: Option<String> = None;

    for attr in &input.attrs {
        if attr.path().is_ident("table") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("prefix") {
                    let lit: LitStr = meta.value()?.parse()?;
                    prefix = Some(lit.value());
                    Ok(())
                } else {
                    Err(meta.error("unsupported table attribute, expected `prefix`"))
                }
            })?;
        }
    }

    let table_name = format!(
        "{}{}",
        prefix.unwrap_or_default(),
        input.ident.to_string().to_lowercase()
    );
    validate_identifier(&table_name)
        .map_err(|e| Error::new(input.ident.span(), format!("invalid table name `{table_name}`: {e}")))?;
    Ok(table_name)
}

/// Collect the named fields of a struct, validating each as a column name.
pub fn parse_named_fields(input: &DeriveInput) -> Result<Vec<Ident>> {
    let Data::Struct(data_struct) = &input.data else {
        return Err(Error::new_spanned(
            input,
            "can only be derived for structs with named fields",
        ));
    };
    let Fields::Named(fields_named) = &data_struct.fields else {
        return Err(Error::new_spanned(
            input,
            "can only be derived for structs with named fields",
        ));
    };

    let mut columns = Vec::new();
    for field in &fields_named.named {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| Error::new_spanned(field, "field must have a name"))?;
        let name = ident.to_string();
        validate_identifier(&name)
            .map_err(|e| Error::new(ident.span(), format!("invalid column name `{name}`: {e}")))?;
        columns.push(ident);
    }
    Ok(columns)
}

/// Collect the entity's fields and its single `#[primary_key]` field.
pub fn parse_entity_fields(input: &DeriveInput) -> Result<EntityFields> {
    let columns = parse_named_fields(input)?;

    let Data::Struct(data_struct) = &input.data else {
        unreachable!("parse_named_fields accepts structs only");
    };
    let Fields::Named(fields_named) = &data_struct.fields else {
        unreachable!("parse_named_fields accepts named fields only");
    };

    let mut primary_key: Option<(Ident, Type)> = None;
    for field in &fields_named.named {
        if field.attrs.iter().any(|a| a.path().is_ident("primary_key")) {
            if primary_key.is_some() {
                return Err(Error::new_spanned(
                    field,
                    "only one field may be marked #[primary_key]",
                ));
            }
            primary_key = Some((
                field.ident.clone().expect("named field"),
                field.ty.clone(),
            ));
        }
    }

    let (primary_key, primary_key_ty) = primary_key.ok_or_else(|| {
        Error::new(
            input.ident.span(),
            "exactly one field must be marked #[primary_key]",
        )
    })?;

    Ok(EntityFields {
        columns,
        primary_key,
        primary_key_ty,
    })
}

/// SQL identifier validation shared by table and column names.
fn validate_identifier(name: &str) -> std::result::Result<(), String> {
    if name.is_empty() {
        return Err("name cannot be empty".to_string());
    }

    if name.len() > 63 {
        return Err(format!(
            "name is too long: {} characters (max 63)",
            name.len()
        ));
    }

    let first_char = name.chars().next().expect("non-empty");
    if !first_char.is_ascii_alphabetic() && first_char != '_' {
        return Err("name must start with a letter or underscore".to_string());
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(
            "only alphanumeric characters and underscores are allowed".to_string(),
        );
    }

    if is_reserved_keyword(name) {
        return Err("name is a reserved SQL keyword".to_string());
    }

    Ok(())
}

fn is_reserved_keyword(name: &str) -> bool {
    const RESERVED_KEYWORDS: &[&str] = &[
        "SELECT", "INSERT", "UPDATE", "DELETE", "FROM", "WHERE", "JOIN", "INNER", "LEFT",
        "RIGHT", "FULL", "OUTER", "ON", "AS", "AND", "OR", "NOT", "NULL", "CASE", "WHEN",
        "THEN", "ELSE", "END", "IF", "EXISTS", "IN", "LIKE", "BETWEEN", "ORDER", "BY",
        "GROUP", "HAVING", "LIMIT", "OFFSET", "UNION", "ALL", "DISTINCT", "CREATE", "DROP",
        "ALTER", "TABLE", "INDEX", "VIEW", "PRIMARY", "KEY", "FOREIGN", "REFERENCES",
        "UNIQUE", "CHECK", "DEFAULT", "CONSTRAINT", "COLUMN", "ADD", "RENAME", "TO",
        "TRANSACTION", "BEGIN", "COMMIT", "ROLLBACK", "INTEGER", "TEXT", "REAL", "BLOB",
        "NUMERIC", "BOOLEAN",
    ];

    RESERVED_KEYWORDS.contains(&name.to_ascii_uppercase().as_str())
}
