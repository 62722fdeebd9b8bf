use syn::parse::{Parse, ParseStream, Result};
use syn::{Attribute, Ident, Token, Visibility};

/// Declaration of a new module named by a sequence of identifiers:
/// `pub mod FOO BAR;`.
pub struct NewMod {
    /// Attributes, including doc comments.
    pub attrs: Vec<Attribute>,
    /// Visibility of the module.
    pub vis: Visibility,
    /// Name components, at least one.
    pub idents: Vec<Ident>,
}

impl NewMod {
    /// Returns the name components joined with underscores.
    pub fn joined(&self) -> String {
        self.idents.iter().map(ToString::to_string).collect::<Vec<_>>().join("_")
    }
}

impl Parse for NewMod {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis = input.parse()?;
        input.parse::<Token![mod]>()?;
        let mut idents = vec![input.parse()?];
        while !input.peek(Token![;]) {
            idents.push(input.parse()?);
        }
        input.parse::<Token![;]>()?;
        Ok(Self { attrs, vis, idents })
    }
}
