const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "union", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Inserts an underscore at the beginning of the string if the string is a
/// reserved keyword or starts with a digit.
pub fn unkeywordize(mut ident: String) -> String {
    let digit = ident.chars().next().map_or(false, |c| c.is_ascii_digit());
    if digit || KEYWORDS.contains(&ident.as_str()) {
        ident.insert(0, '_');
    }
    ident
}
