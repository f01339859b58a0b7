use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

use crate::attrs;

pub fn expand(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    match expand_inner(&ast) {
        Ok(ts) => ts.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand_inner(ast: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &ast.ident;
    let struct_name = name.to_string();
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let mut inits = Vec::new();

    for f in attrs::named_fields(ast, "FromRow")? {
        let info = attrs::parse(f)?;
        let ident = f.ident.as_ref().expect("named field");
        let key = info.rename.unwrap_or_else(|| ident.to_string());
        let ty = &f.ty;

        if info.skip {
            inits.push(quote! { #ident: ::core::default::Default::default() });
            continue;
        }

        if info.flatten {
            inits.push(quote! {
                #ident: <#ty as ::neo4j_connector::__core::traits::FromRow>::from_row(row)?
            });
            continue;
        }

        // If field type is Option<...>, allow missing column => None.
        // We do a *syntactic* check to keep it lightweight.
        let is_option = match ty {
            syn::Type::Path(p) => p.path.segments.last().map(|s| s.ident == "Option").unwrap_or(false),
            _ => false,
        };

        if is_option {
            inits.push(quote! {
                #ident: {
                    match ::neo4j_connector::__core::row::get_value(row, #key) {
                        ::core::option::Option::None => ::core::option::Option::None,
                        ::core::option::Option::Some(v) => <#ty as ::neo4j_connector::__core::traits::FromValue>::from_value(v)
                            .map_err(|e| e.with_context(::std::format!("{}::{}", #struct_name, #key)))?,
                    }
                }
            });
        } else {
            inits.push(quote! {
                #ident: {
                    let v = ::neo4j_connector::__core::row::get_value(row, #key)
                        .ok_or_else(|| ::neo4j_connector::__core::error::ConnectorError::missing_field(#key, #struct_name))?;
                    <#ty as ::neo4j_connector::__core::traits::FromValue>::from_value(v)
                        .map_err(|e| e.with_context(::std::format!("{}::{}", #struct_name, #key)))?
                }
            });
        }
    }

    Ok(quote! {
        impl #impl_generics ::neo4j_connector::__core::traits::FromRow for #name #ty_generics #where_clause {
            fn from_row(row: &::neo4j_connector::__core::row::Row) -> ::core::result::Result<Self, ::neo4j_connector::__core::error::ConnectorError> {
                ::core::result::Result::Ok(Self {
                    #(#inits,)*
                })
            }
        }
    })
}
