//! Procedural macros for mmreg.
//!
//! This crate is not meant to be used directly. Use the re-exports of the
//! `mmreg` crate instead.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod reg;

use proc_macro::TokenStream;

#[proc_macro]
pub fn reg(input: TokenStream) -> TokenStream {
    reg::proc_macro(input)
}
