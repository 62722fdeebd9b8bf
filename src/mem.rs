//! Memory access backends.
//!
//! Every register operation ends in a call to a [`Memory`] implementation.
//! Registers of a real device use [`Mmio`]; host-side tests declare their
//! registers with a simulated backend instead (see the `memory` option of
//! [`reg!`](crate::reg!)).

mod bit_band;

pub use self::bit_band::{BitBand, PERIPHERAL_BIT_BAND};

use crate::bits::{sealed::Word, Bits};
use core::ptr::{read_volatile, write_volatile};

/// Access to the words behind register addresses.
///
/// The exclusive pair follows the load-linked/store-conditional shape of
/// LDREX/STREX: [`store_exclusive`](Memory::store_exclusive) succeeds only if
/// nothing touched the word since the matching
/// [`load_exclusive`](Memory::load_exclusive). `loaded` is the value that load
/// returned; a hardware monitor ignores it, a compare-and-swap backend uses it
/// as the expected value.
pub trait Memory: 'static {
    /// Reads the word at `address`.
    ///
    /// # Safety
    ///
    /// `address` must be a valid and aligned address of `T`.
    unsafe fn load<T: Bits>(address: usize) -> T;

    /// Writes `value` to the word at `address`.
    ///
    /// # Safety
    ///
    /// `address` must be a valid and aligned address of `T`.
    unsafe fn store<T: Bits>(address: usize, value: T);

    /// Reads the word at `address` and opens an exclusive reservation on it.
    ///
    /// # Safety
    ///
    /// `address` must be a valid and aligned address of `T`.
    unsafe fn load_exclusive<T: Bits>(address: usize) -> T;

    /// Writes `value` if the reservation opened by the last
    /// [`load_exclusive`](Memory::load_exclusive) still holds. Returns `true`
    /// on success.
    ///
    /// # Safety
    ///
    /// `address` must be a valid and aligned address of `T`, and `loaded` must
    /// be the value returned by the paired `load_exclusive`.
    unsafe fn store_exclusive<T: Bits>(address: usize, loaded: T, value: T) -> bool;

    /// Drops an outstanding exclusive reservation.
    fn clear_exclusive();
}

/// Memory-mapped I/O through volatile accesses and the core's exclusive
/// access instructions.
///
/// On ARMv7-M and later the exclusive pair is LDREX/STREX (with the byte and
/// halfword forms for narrower registers) and the reservation is cleared with
/// CLREX. On other targets the pair is emulated with a compare-and-swap, which
/// requires native atomics of the register width.
pub struct Mmio;

impl Memory for Mmio {
    #[inline(always)]
    unsafe fn load<T: Bits>(address: usize) -> T {
        unsafe { read_volatile(address as *const T) }
    }

    #[inline(always)]
    unsafe fn store<T: Bits>(address: usize, value: T) {
        unsafe { write_volatile(address as *mut T, value) };
    }

    #[inline(always)]
    unsafe fn load_exclusive<T: Bits>(address: usize) -> T {
        unsafe { <T as Word>::load_exclusive(address) }
    }

    #[inline(always)]
    unsafe fn store_exclusive<T: Bits>(address: usize, loaded: T, value: T) -> bool {
        unsafe { <T as Word>::store_exclusive(address, loaded, value) }
    }

    #[inline(always)]
    fn clear_exclusive() {
        #[cfg(all(target_arch = "arm", target_feature = "v7"))]
        unsafe {
            core::arch::asm!("clrex", options(nostack, preserves_flags));
        }
    }
}
