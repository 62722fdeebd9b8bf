//! Raw register words.

use core::fmt::Debug;
use core::mem::size_of;
use core::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

/// Underlying integer of a memory-mapped register.
///
/// Implemented for `u8`, `u16` and `u32`, the widths a 32-bit core can access
/// with a single exclusive load/store pair.
pub trait Bits
where
    Self: Sized
        + sealed::Word
        + Debug
        + Copy
        + Eq
        + Send
        + Sync
        + Not<Output = Self>
        + BitOr<Output = Self>
        + BitXor<Output = Self>
        + BitAnd<Output = Self>
        + Shl<u32, Output = Self>
        + Shr<u32, Output = Self>
        + 'static,
{
    /// Width of the type in bits.
    const WIDTH: u32;

    /// Truncates `bits` to the width of the type.
    fn from_u64(bits: u64) -> Self;

    /// Zero-extends the value to `u64`.
    fn to_u64(self) -> u64;
}

/// Returns a mask of `width` low order bits.
///
/// # Panics
///
/// If `width` is greater than 64. In `const` context this is a compile-time
/// error.
#[inline]
pub const fn low_mask(width: u32) -> u64 {
    assert!(width <= 64, "bit width out of range");
    if width == 64 { u64::MAX } else { (1 << width) - 1 }
}

pub(crate) mod sealed {
    /// Exclusive access instructions for the raw word.
    ///
    /// Used only by [`Mmio`](crate::mem::Mmio).
    pub trait Word: Sized {
        /// # Safety
        ///
        /// `address` must be a valid and aligned address of `Self`.
        unsafe fn load_exclusive(address: usize) -> Self;

        /// Returns `true` if the store succeeded.
        ///
        /// # Safety
        ///
        /// `address` must be a valid and aligned address of `Self`, and the
        /// call must be paired with a preceding [`Word::load_exclusive`] that
        /// returned `loaded`.
        unsafe fn store_exclusive(address: usize, loaded: Self, value: Self) -> bool;
    }
}

macro_rules! bits {
    ($type:ty, $atomic:ident, $ldrex:literal, $strex:literal) => {
        impl Bits for $type {
            const WIDTH: u32 = size_of::<$type>() as u32 * 8;

            #[inline(always)]
            fn from_u64(bits: u64) -> Self {
                bits as $type
            }

            #[inline(always)]
            fn to_u64(self) -> u64 {
                u64::from(self)
            }
        }

        impl sealed::Word for $type {
            #[cfg(all(target_arch = "arm", target_feature = "v7"))]
            #[inline(always)]
            unsafe fn load_exclusive(address: usize) -> Self {
                let value: u32;
                unsafe {
                    core::arch::asm!(
                        concat!($ldrex, " {0}, [{1}]"),
                        out(reg) value,
                        in(reg) address,
                        options(nostack, preserves_flags),
                    );
                }
                value as $type
            }

            #[cfg(all(target_arch = "arm", target_feature = "v7"))]
            #[inline(always)]
            unsafe fn store_exclusive(address: usize, _loaded: Self, value: Self) -> bool {
                let status: u32;
                unsafe {
                    core::arch::asm!(
                        concat!($strex, " {0}, {1}, [{2}]"),
                        out(reg) status,
                        in(reg) u32::from(value),
                        in(reg) address,
                        options(nostack, preserves_flags),
                    );
                }
                status == 0
            }

            #[cfg(not(all(target_arch = "arm", target_feature = "v7")))]
            #[inline(always)]
            unsafe fn load_exclusive(address: usize) -> Self {
                use core::sync::atomic::{$atomic, Ordering};
                unsafe { $atomic::from_ptr(address as *mut $type) }.load(Ordering::Relaxed)
            }

            #[cfg(not(all(target_arch = "arm", target_feature = "v7")))]
            #[inline(always)]
            unsafe fn store_exclusive(address: usize, loaded: Self, value: Self) -> bool {
                use core::sync::atomic::{$atomic, Ordering};
                unsafe { $atomic::from_ptr(address as *mut $type) }
                    .compare_exchange(loaded, value, Ordering::Relaxed, Ordering::Relaxed)
                    .is_ok()
            }
        }
    };
}

bits!(u8, AtomicU8, "ldrexb", "strexb");
bits!(u16, AtomicU16, "ldrexh", "strexh");
bits!(u32, AtomicU32, "ldrex", "strex");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths() {
        assert_eq!(u8::WIDTH, 8);
        assert_eq!(u16::WIDTH, 16);
        assert_eq!(u32::WIDTH, 32);
    }

    #[test]
    fn low_masks() {
        assert_eq!(low_mask(0), 0);
        assert_eq!(low_mask(1), 0b1);
        assert_eq!(low_mask(3), 0b111);
        assert_eq!(low_mask(32), 0xFFFF_FFFF);
        assert_eq!(low_mask(64), u64::MAX);
    }

    #[test]
    #[should_panic]
    fn low_mask_too_wide() {
        low_mask(65);
    }

    #[test]
    fn from_u64_truncates() {
        assert_eq!(u8::from_u64(0x1FF), 0xFF);
        assert_eq!(u16::from_u64(0x1_2345), 0x2345);
        assert_eq!(u32::from_u64(0xDEAD_BEEF), 0xDEAD_BEEF);
        assert_eq!(0xBEEF_u16.to_u64(), 0xBEEF);
    }
}
