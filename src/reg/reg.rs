use super::{OwnedBy, RFieldSet, WFieldSet};
use crate::atomic;
use crate::bits::Bits;
use crate::mem::{BitBand, Memory};
use crate::token::Token;
use core::marker::PhantomData;

/// Memory-mapped register token.
///
/// Types which implement this trait are zero-sized. Everything about the
/// register is in its associated items, so the token compiles down to the
/// accesses it performs.
pub trait Reg: Token {
    /// Raw word of the register.
    type Bits: Bits;

    /// Backend performing the accesses.
    type Memory: Memory;

    /// Memory address of the register.
    const ADDRESS: usize;

    /// Value of the register after a hardware reset.
    const RESET: Self::Bits;

    /// Bit-band region the register lies in, if single-bit fields should use
    /// the alias words.
    const BIT_BAND: Option<BitBand> = None;
}

/// Register that can read its value.
pub trait RReg: Reg {
    /// Reads the raw value from the register's memory address.
    #[inline]
    fn read(&self) -> Self::Bits {
        unsafe { Self::Memory::load(Self::ADDRESS) }
    }

    /// Returns `true` if every field-value of `values` is currently present in
    /// the register. The register is read once.
    #[inline]
    fn all_set<S: RFieldSet + OwnedBy<Self>>(&self, values: S) -> bool {
        let _ = values;
        let layout = S::LAYOUT;
        match layout.position(Self::ADDRESS) {
            Some(index) => {
                let entry = layout.entry(index);
                self.read().to_u64() & entry.clear == entry.set
            }
            None => true,
        }
    }
}

/// Register that can write its value.
pub trait WReg: Reg {
    /// Writes the raw `value` to the register's memory address.
    #[inline]
    fn write(&self, value: Self::Bits) {
        unsafe { Self::Memory::store(Self::ADDRESS, value) };
    }

    /// Writes the reset value.
    #[inline]
    fn reset(&self) {
        self.write(Self::RESET);
    }
}

/// Read-only register.
pub trait RoReg: RReg {}

/// Write-only register.
pub trait WoReg: WReg {}

/// Register that can read and write its value.
///
/// Automatically implemented for every register with both [`RReg`] and
/// [`WReg`].
pub trait RwReg: RReg + WReg {
    /// Clears the bits of `clear`, then sets the bits of `set` with a plain
    /// load and store.
    #[inline]
    fn set_clear_bits(&self, set: Self::Bits, clear: Self::Bits) {
        self.write(self.read() & !clear | set);
    }

    /// Inverts the bits of `mask` with a plain load and store.
    #[inline]
    fn toggle_bits(&self, mask: Self::Bits) {
        self.write(self.read() ^ mask);
    }

    /// Atomic version of [`set_clear_bits`](RwReg::set_clear_bits).
    #[inline]
    fn atomic_set_clear_bits(&self, set: Self::Bits, clear: Self::Bits) {
        unsafe { atomic::set_clear::<Self::Memory, Self::Bits>(Self::ADDRESS, set, clear) };
    }

    /// Atomic version of [`toggle_bits`](RwReg::toggle_bits).
    #[inline]
    fn atomic_toggle_bits(&self, mask: Self::Bits) {
        unsafe { atomic::toggle::<Self::Memory, Self::Bits>(Self::ADDRESS, mask) };
    }

    /// Reads the register, passes the value to `f` and writes the result back.
    #[inline]
    fn modify<F: FnOnce(Self::Bits) -> Self::Bits>(&self, f: F) {
        self.write(f(self.read()));
    }

    /// Atomic version of [`modify`](RwReg::modify). `f` is called once per
    /// attempt.
    #[inline]
    fn atomic_modify<F: Fn(Self::Bits) -> Self::Bits>(&self, f: F) {
        unsafe { atomic::modify::<Self::Memory, Self::Bits, F>(Self::ADDRESS, f) };
    }

    /// Writes `new` if the register holds `expected`, in a single attempt.
    /// See [`atomic::compare_exchange`].
    #[inline]
    fn compare_exchange(
        &self,
        expected: Self::Bits,
        new: Self::Bits,
    ) -> Result<Self::Bits, Self::Bits> {
        unsafe {
            atomic::compare_exchange::<Self::Memory, Self::Bits>(Self::ADDRESS, expected, new)
        }
    }
}

impl<R: RReg + WReg> RwReg for R {}

/// Register that can store a masked bit pattern.
///
/// This is the seam between field-values and registers: read-write registers
/// store by read-modify-write, write-only registers store the pattern with all
/// other bits zero. Implemented by [`reg!`](crate::reg!).
///
/// A write-only register can't preserve what it doesn't store, so
/// [`apply`](StoreMasked::apply) on it only builds for sets assigning every
/// declared field.
pub trait StoreMasked: WReg {
    /// Bits an applied set must assign in full. Zero for registers that store
    /// by read-modify-write.
    const FIELDS_MASK: u64 = 0;

    /// Stores `set` into the bits of `clear`.
    fn store_masked(&self, set: Self::Bits, clear: Self::Bits);

    /// Stores `set` into the bits of `clear`, atomically with respect to
    /// interrupt handlers.
    fn atomic_store_masked(&self, set: Self::Bits, clear: Self::Bits);

    /// Applies the field-values of `values` with a single store.
    #[inline]
    fn apply<S: WFieldSet + OwnedBy<Self>>(&self, values: S) {
        let () = Complete::<Self, S>::CHECK;
        values.set();
    }

    /// Atomic version of [`apply`](StoreMasked::apply).
    #[inline]
    fn atomic_apply<S: WFieldSet + OwnedBy<Self>>(&self, values: S) {
        let () = Complete::<Self, S>::CHECK;
        values.atomic_set();
    }
}

struct Complete<R, S>(PhantomData<(R, S)>);

impl<R: StoreMasked, S: WFieldSet> Complete<R, S> {
    const CHECK: () = assert!(
        S::LAYOUT.covers(R::ADDRESS, R::FIELDS_MASK),
        "write-only register needs every field assigned"
    );
}
