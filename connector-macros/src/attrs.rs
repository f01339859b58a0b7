//! Parsing of the `#[neo4j(...)]` field attributes shared by both derives.

use syn::{Expr, ExprLit, Lit};

#[derive(Default)]
pub struct FieldAttrs {
    pub rename: Option<String>,
    pub skip: bool,
    pub flatten: bool,
}

pub fn parse(f: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();

    for attr in &f.attrs {
        if !attr.path().is_ident("neo4j") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                out.skip = true;
            } else if meta.path.is_ident("flatten") {
                out.flatten = true;
            } else if meta.path.is_ident("rename") {
                let value = meta.value()?;
                let expr: Expr = value.parse()?;
                match expr {
                    Expr::Lit(ExprLit { lit: Lit::Str(s), .. }) => out.rename = Some(s.value()),
                    other => return Err(syn::Error::new_spanned(other, "rename expects a string literal")),
                }
            } else {
                return Err(meta.error("unknown neo4j attribute, expected skip, flatten or rename"));
            }
            Ok(())
        })?;
    }

    Ok(out)
}

/// Named fields of a struct, or a spanned error naming the derive.
pub fn named_fields<'a>(ast: &'a syn::DeriveInput, derive: &str) -> syn::Result<Vec<&'a syn::Field>> {
    match &ast.data {
        syn::Data::Struct(s) => match &s.fields {
            syn::Fields::Named(named) => Ok(named.named.iter().collect()),
            _ => Err(syn::Error::new_spanned(
                ast,
                format!("{derive} only supports structs with named fields"),
            )),
        },
        _ => Err(syn::Error::new_spanned(ast, format!("{derive} only supports structs"))),
    }
}
