//! Whitespace normalization shared by `cypher!` and `statement!`.

/// `TokenStream::to_string()` inserts spaces around punctuation; undo the
/// ones that make the Cypher harder to read. Keep it simple and predictable.
pub fn cypher_text(tokens: &str) -> String {
    tokens
        .replace(" ,", ",")
        .replace(" :", ":")
        .replace(": ", ":")
        .replace("( ", "(")
        .replace(" )", ")")
        .replace("[ ", "[")
        .replace(" ]", "]")
        .replace("{ ", "{")
        .replace(" }", "}")
        .replace(" . ", ".")
        .replace("$ ", "$")
        .replace("  ", " ")
        .trim()
        .to_string()
}
