//! The [`Token`] trait.
//!
//! A token is a zero-sized handle standing for a statically described hardware
//! resource: a register, a field of a register, a field-value, a GPIO pin.
//! Tokens carry no data. Everything an operation needs is in the token's type:
//! addresses, offsets, widths, access capabilities. Holding a token is the
//! permission to perform the operations its type allows.
//!
//! Unlike ownership tokens, these are [`Copy`]. The hardware word is the only
//! shared state, and the discipline for it is the choice between plain and
//! atomic operations, not exclusive ownership of the handle.
//!
//! Since tokens are zero-sized, [`Token::take`] is no-op from the assembly
//! perspective. Passing a token around doesn't consume the stack, and storing
//! it inside other types doesn't consume memory.

/// A zero-sized handle to a statically described hardware resource.
pub trait Token: Sized + Copy + Send + Sync + 'static {
    /// Creates the token instance.
    ///
    /// # Safety
    ///
    /// The operations of the token access memory at the addresses declared by
    /// its type. The caller must ensure those addresses belong to the intended
    /// device on the running target.
    unsafe fn take() -> Self;
}

/// The empty set of field-values.
impl Token for () {
    #[inline]
    unsafe fn take() -> Self {}
}
