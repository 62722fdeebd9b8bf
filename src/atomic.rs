//! Lock-free read-modify-write of a single word.
//!
//! Every function here is a retry loop around an exclusive load/store pair of
//! the [`Memory`] backend: the word is loaded exclusively, the new value is
//! computed, and the exclusive store is attempted. If anything touched the word
//! in between (an interrupt handler, another core), the store fails and the
//! sequence starts over with a fresh load. The loop has no bound. Under
//! pathological contention it can spin forever; a single interrupt handler
//! competing with thread code can't make it do so. Callers that need their own
//! retry policy use [`compare_exchange`].
//!
//! Plain load/store access to a word that is concurrently updated through this
//! module voids the guarantee.

use crate::bits::Bits;
use crate::mem::Memory;

/// Atomically clears the bits of `clear` and then sets the bits of `set` in
/// the word at `address`.
///
/// # Safety
///
/// `address` must be a valid and aligned address of `T` for the backend `M`.
#[inline]
pub unsafe fn set_clear<M: Memory, T: Bits>(address: usize, set: T, clear: T) {
    unsafe { modify::<M, T, _>(address, |value| value & !clear | set) };
}

/// Atomically inverts the bits of `mask` in the word at `address`.
///
/// # Safety
///
/// `address` must be a valid and aligned address of `T` for the backend `M`.
#[inline]
pub unsafe fn toggle<M: Memory, T: Bits>(address: usize, mask: T) {
    unsafe { modify::<M, T, _>(address, |value| value ^ mask) };
}

/// Atomically replaces the word at `address` with the result of `f` applied to
/// its current value.
///
/// `f` runs once per attempt, so it may be called multiple times and must not
/// have side effects.
///
/// # Safety
///
/// `address` must be a valid and aligned address of `T` for the backend `M`.
#[inline]
pub unsafe fn modify<M: Memory, T: Bits, F: Fn(T) -> T>(address: usize, f: F) {
    loop {
        let old = unsafe { M::load_exclusive::<T>(address) };
        if unsafe { M::store_exclusive(address, old, f(old)) } {
            break;
        }
    }
}

/// Stores `new` to the word at `address` if it currently holds `expected`.
///
/// Makes exactly one attempt. Returns `Ok(expected)` if the word was replaced,
/// or `Err(actual)` with the observed value otherwise. A mismatch releases the
/// exclusive reservation. A store that fails because of contention reports the
/// value it loaded, which equals `expected`; retrying is up to the caller.
///
/// # Safety
///
/// `address` must be a valid and aligned address of `T` for the backend `M`.
#[inline]
pub unsafe fn compare_exchange<M: Memory, T: Bits>(
    address: usize,
    expected: T,
    new: T,
) -> Result<T, T> {
    let current = unsafe { M::load_exclusive::<T>(address) };
    if current != expected {
        M::clear_exclusive();
        trace!("compare_exchange mismatch at {:#x}", address);
        return Err(current);
    }
    if unsafe { M::store_exclusive(address, current, new) } {
        Ok(current)
    } else {
        trace!("compare_exchange contention at {:#x}", address);
        Err(current)
    }
}
