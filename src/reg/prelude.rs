//! Memory-mapped registers prelude.

pub use super::{
    FieldSet, RFieldSet, RReg, RRegField, Reg, RegField, RoReg, RoRegField, RwReg, RwRegField,
    StoreMasked, WFieldSet, WReg, WRegField, WoReg, WoRegField,
};
pub use crate::token::Token;
