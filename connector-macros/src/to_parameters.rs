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

    let mut inserts = Vec::new();

    for f in attrs::named_fields(ast, "ToParameters")? {
        let info = attrs::parse(f)?;
        if info.skip {
            continue;
        }
        if info.flatten {
            return Err(syn::Error::new_spanned(f, "ToParameters does not support flatten"));
        }
        let ident = f.ident.as_ref().expect("named field");
        let key = info.rename.unwrap_or_else(|| ident.to_string());
        inserts.push(quote! {
            map.insert(
                ::std::string::ToString::to_string(#key),
                ::neo4j_connector::__core::serde_json::to_value(&self.#ident).map_err(|e| {
                    ::neo4j_connector::__core::error::ConnectorError::from(e)
                        .with_context(::std::format!("{}::{}", #struct_name, #key))
                })?,
            );
        });
    }

    Ok(quote! {
        impl #impl_generics ::neo4j_connector::__core::traits::ToParameters for #name #ty_generics #where_clause {
            fn to_parameters(self) -> ::core::result::Result<::neo4j_connector::__core::statement::Parameters, ::neo4j_connector::__core::error::ConnectorError> {
                let mut map = ::neo4j_connector::__core::statement::Parameters::new();
                #(#inserts)*
                ::core::result::Result::Ok(map)
            }
        }
    })
}
