/// Parses an identifier with a specific value, or throws an error otherwise.
#[macro_export]
macro_rules! parse_ident {
    ($input:ident, $value:expr) => {
        if $input.parse::<::syn::Ident>()? != $value {
            return Err($input.error(format!("Expected `{}`", $value)));
        }
    };
}
