use super::{
    field::store_alias, FieldSet, FieldStrategy, Layout, OwnedBy, RFieldSet, RReg, RRegField, Reg,
    RegField, StoreMasked, WFieldSet, WRegField,
};
use crate::bits::{low_mask, Bits};
use crate::token::Token;
use core::fmt;
use core::marker::PhantomData;

/// Statically known value `V` of the field `F`.
///
/// The value is unshifted: `FieldVal<Mode, 0b10>` stands for `0b10 <<
/// Mode::OFFSET` in the register. Building a field-value that doesn't fit the
/// field width is a compile-time error.
pub struct FieldVal<F: RegField, const V: u64> {
    _field: PhantomData<F>,
}

impl<F: RegField, const V: u64> FieldVal<F, V> {
    const IN_RANGE: () = assert!(V <= low_mask(F::WIDTH), "field-value doesn't fit the field");

    /// The unshifted value.
    pub const VALUE: u64 = V;

    /// The value shifted into place.
    pub const BITS: u64 = V << F::OFFSET;

    /// Returns the field this value belongs to.
    #[inline]
    pub fn field(self) -> F {
        unsafe { F::take() }
    }
}

impl<F: RegField, const V: u64> Clone for FieldVal<F, V> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: RegField, const V: u64> Copy for FieldVal<F, V> {}

impl<F: RegField, const V: u64> fmt::Debug for FieldVal<F, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldVal")
            .field("address", &<F::Reg as Reg>::ADDRESS)
            .field("offset", &F::OFFSET)
            .field("width", &F::WIDTH)
            .field("value", &V)
            .finish()
    }
}

impl<F: RegField, const V: u64> Token for FieldVal<F, V> {
    #[inline]
    unsafe fn take() -> Self {
        let () = Self::IN_RANGE;
        Self { _field: PhantomData }
    }
}

impl<F: RegField, const V: u64> FieldSet for FieldVal<F, V> {
    const LAYOUT: Layout = Layout::single(<F::Reg as Reg>::ADDRESS, F::MASK, V << F::OFFSET);
}

impl<F: RegField, const V: u64> OwnedBy<F::Reg> for FieldVal<F, V> {}

impl<F: WRegField, const V: u64> WFieldSet for FieldVal<F, V> {
    fn store_each(layout: &Layout, stored: &mut u8, atomic: bool) {
        let Some(index) = layout.position(<F::Reg as Reg>::ADDRESS) else { return };
        if *stored & 1 << index != 0 {
            return;
        }
        *stored |= 1 << index;
        let entry = layout.entry(index);
        if entry.clear == F::MASK {
            if let FieldStrategy::BitBand(alias) = F::STRATEGY {
                store_alias::<F>(alias, Bits::from_u64(V));
                return;
            }
        }
        let reg = unsafe { F::Reg::take() };
        let (set, clear) = (Bits::from_u64(entry.set), Bits::from_u64(entry.clear));
        if atomic {
            reg.atomic_store_masked(set, clear);
        } else {
            reg.store_masked(set, clear);
        }
    }
}

impl<F: RRegField, const V: u64> RFieldSet for FieldVal<F, V> {
    fn check_each(layout: &Layout, checked: &mut u8) -> bool {
        let Some(index) = layout.position(<F::Reg as Reg>::ADDRESS) else { return true };
        if *checked & 1 << index != 0 {
            return true;
        }
        *checked |= 1 << index;
        let entry = layout.entry(index);
        unsafe { F::Reg::take() }.read().to_u64() & entry.clear == entry.set
    }
}
