//! Procedural macros base for mmreg.
//!
//! This crate provides shared parsing and code generation helpers for the
//! `mmreg-macros` crate.

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod macros;
mod new_mod;
mod unkeywordize;

pub use self::{new_mod::NewMod, unkeywordize::unkeywordize};

use syn::{parse::Result, LitInt};

/// Parses an unsuffixed integer literal into `u64`, reporting the error at the
/// literal.
pub fn lit_u64(lit: &LitInt) -> Result<u64> {
    if !lit.suffix().is_empty() {
        return Err(syn::Error::new(lit.span(), "integer suffixes are not allowed"));
    }
    lit.base10_parse()
}
