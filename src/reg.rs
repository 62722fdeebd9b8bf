//! Memory-mapped registers.
//!
//! # Mappings and Tokens
//!
//! Registers are declared with the [`reg!`](crate::reg!) macro. Most of them
//! should come from per-chip definition crates generated from vendor
//! description files.
//!
//! ```
//! use core::mem::size_of_val;
//! use mmreg::reg::prelude::*;
//!
//! mmreg::reg! {
//!     /// SysTick control and status register.
//!     pub mod STK CTRL; // register block and name
//!
//!     0xE000_E010 // memory address
//!     0x20 // bit size
//!     0x0000_0000 // reset value
//!     RReg WReg; // list of marker traits for the register
//!
//!     /// Counter enable.
//!     ENABLE { // field name
//!         0 // offset
//!         1 // width
//!         RRegField WRegField // list of marker traits for the field
//!     }
//!     /// Clock source selection.
//!     CLKSOURCE { 2 1 RRegField WRegField }
//! }
//!
//! fn main() {
//!     let reg = unsafe { stk_ctrl::Reg::take() };
//!     assert_eq!(size_of_val(&reg.enable), 0);
//!     assert_eq!(size_of_val(&reg), 0);
//!     let start = reg.enable.val::<1>().combine(reg.clksource.val::<1>());
//!     assert_eq!(size_of_val(&start), 0);
//! }
//! ```
//!
//! # Access
//!
//! Every operation is statically resolved: the address, the field masks and
//! the bit patterns of field-values are constants. Operations a register or a
//! field doesn't permit are missing methods; applying a field-value to a
//! register it doesn't belong to is an unsatisfied [`OwnedBy`] bound.
//!
//! Plain operations ([`RwReg::set_clear_bits`], [`WRegField::set`],
//! [`WFieldSet::set`]) compile to a load and a store. Their `atomic_` versions
//! go through the [`atomic`](crate::atomic) engine and are safe against
//! interrupt handlers modifying the same register.

pub mod prelude;

mod field;
mod layout;
mod reg;
mod set;
mod val;

pub use self::{field::*, layout::*, reg::*, set::*, val::*};

mod compile_tests {
    //! ```compile_fail
    //! use mmreg::reg::prelude::*;
    //! mmreg::reg! {
    //!     pub mod TST TST_RO_REG;
    //!     0xDEAD_BEEC 0x20 0xBEEF_CACE RReg RoReg;
    //!     TST_BIT { 0 1 RRegField RoRegField }
    //! }
    //! fn main() {
    //!     let reg = unsafe { tst_tst_ro_reg::Reg::take() };
    //!     reg.write(0);
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use mmreg::reg::prelude::*;
    //! mmreg::reg! {
    //!     pub mod TST TST_RO_REG;
    //!     0xDEAD_BEEC 0x20 0xBEEF_CACE RReg RoReg;
    //!     TST_BIT { 0 1 RRegField RoRegField }
    //! }
    //! fn main() {
    //!     let reg = unsafe { tst_tst_ro_reg::Reg::take() };
    //!     reg.tst_bit.set(1);
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use mmreg::reg::prelude::*;
    //! mmreg::reg! {
    //!     pub mod TST TST_WO_REG;
    //!     0xDEAD_BEEC 0x20 0xBEEF_CACE WReg WoReg;
    //!     TST_BIT { 0 1 WRegField WoRegField }
    //! }
    //! fn main() {
    //!     let reg = unsafe { tst_tst_wo_reg::Reg::take() };
    //!     let _ = reg.read();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use mmreg::reg::prelude::*;
    //! mmreg::reg! {
    //!     pub mod TST TST_WO_REG;
    //!     0xDEAD_BEEC 0x20 0xBEEF_CACE WReg WoReg;
    //!     TST_BIT { 0 1 WRegField WoRegField }
    //! }
    //! fn main() {
    //!     let reg = unsafe { tst_tst_wo_reg::Reg::take() };
    //!     reg.tst_bit.toggle();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use mmreg::reg::prelude::*;
    //! mmreg::reg! {
    //!     pub mod TST TST_WO_REG;
    //!     0xDEAD_BEEC 0x20 0 WReg WoReg;
    //!     TST_KEY { 0 16 WRegField WoRegField }
    //!     TST_START { 16 1 WRegField WoRegField }
    //! }
    //! fn main() {
    //!     let reg = unsafe { tst_tst_wo_reg::Reg::take() };
    //!     reg.apply(reg.tst_key.val::<0xAA>());
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use mmreg::reg::prelude::*;
    //! mmreg::reg! {
    //!     pub mod TST TST_A_REG;
    //!     0xDEAD_BEEC 0x20 0 RReg WReg;
    //!     TST_BIT { 0 1 RRegField WRegField }
    //! }
    //! mmreg::reg! {
    //!     pub mod TST TST_B_REG;
    //!     0xDEAD_BEF0 0x20 0 RReg WReg;
    //!     TST_BIT { 0 1 RRegField WRegField }
    //! }
    //! fn main() {
    //!     let a = unsafe { tst_tst_a_reg::Reg::take() };
    //!     let b = unsafe { tst_tst_b_reg::Reg::take() };
    //!     b.apply(a.tst_bit.val::<1>());
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use mmreg::reg::prelude::*;
    //! mmreg::reg! {
    //!     pub mod TST TST_A_REG;
    //!     0xDEAD_BEEC 0x20 0 RReg WReg;
    //!     TST_BIT { 0 1 RRegField WRegField }
    //! }
    //! mmreg::reg! {
    //!     pub mod TST TST_B_REG;
    //!     0xDEAD_BEF0 0x20 0 RReg WReg;
    //!     TST_BIT { 0 1 RRegField WRegField }
    //! }
    //! fn main() {
    //!     let a = unsafe { tst_tst_a_reg::Reg::take() };
    //!     let b = unsafe { tst_tst_b_reg::Reg::take() };
    //!     let _ = b.all_set(a.tst_bit.val::<1>());
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use mmreg::reg::prelude::*;
    //! mmreg::reg! {
    //!     pub mod TST TST_RW_REG;
    //!     0xDEAD_BEEC 0x20 0 RReg WReg;
    //!     TST_BITS { 0 2 RRegField WRegField }
    //! }
    //! fn main() {
    //!     let reg = unsafe { tst_tst_rw_reg::Reg::take() };
    //!     let value = reg.tst_bits.val::<4>();
    //!     let _ = core::hint::black_box(value);
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use mmreg::reg::prelude::*;
    //! mmreg::reg! {
    //!     pub mod TST TST_RW_REG;
    //!     0xDEAD_BEEC 0x20 0 RReg WReg;
    //!     TST_BITS { 0 2 RRegField WRegField }
    //! }
    //! fn main() {
    //!     let reg = unsafe { tst_tst_rw_reg::Reg::take() };
    //!     reg.apply(reg.tst_bits.val::<1>().combine(reg.tst_bits.val::<2>()));
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use mmreg::reg::prelude::*;
    //! mmreg::reg! {
    //!     pub mod TST TST_RW_REG;
    //!     0xDEAD_BEEC 0x20 0 RReg WReg;
    //!     TST_BITS { 30 4 RRegField WRegField }
    //! }
    //! fn main() {}
    //! ```
    //!
    //! ```
    //! use mmreg::reg::prelude::*;
    //! use mmreg::reg::{Combine, FieldVal, OwnedBy};
    //! mmreg::reg! {
    //!     pub mod TST TST_RW_REG;
    //!     0xDEAD_BEEC 0x20 0 RReg WReg;
    //!     TST_LOW { 0 2 RRegField WRegField }
    //!     TST_HIGH { 2 2 RRegField WRegField }
    //! }
    //! fn assert_rw_reg<T: RwReg>() {}
    //! fn assert_rw_field<T: RwRegField>() {}
    //! fn assert_owned<S: WFieldSet + OwnedBy<R>, R: Reg>() {}
    //! fn main() {
    //!     assert_rw_reg::<tst_tst_rw_reg::Reg>();
    //!     assert_rw_field::<tst_tst_rw_reg::TstLow>();
    //!     assert_owned::<
    //!         Combine<
    //!             FieldVal<tst_tst_rw_reg::TstLow, 1>,
    //!             FieldVal<tst_tst_rw_reg::TstHigh, 3>,
    //!         >,
    //!         tst_tst_rw_reg::Reg,
    //!     >();
    //! }
    //! ```
}
