use proc_macro::TokenStream;
use quote::quote;

use crate::normalize;

/// Convert a token stream like:
///   MATCH (u:User) RETURN u
/// into a &'static str with normalized whitespace.
pub fn expand(input: TokenStream) -> TokenStream {
    let out = normalize::cypher_text(&input.to_string());
    quote! { #out }.into()
}
