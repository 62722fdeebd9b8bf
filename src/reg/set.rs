use super::{Layout, Reg};
use crate::token::Token;

/// Set of field-values, possibly spanning several registers.
///
/// Implemented by [`FieldVal`](super::FieldVal), by the empty set `()`, and by
/// [`Combine`] of two sets.
pub trait FieldSet: Token {
    /// The set grouped by register.
    const LAYOUT: Layout;

    /// Returns the union of `self` and `other`.
    ///
    /// Fails to build if the sets assign overlapping bits of one register, in
    /// particular if they contain two values of the same field.
    #[inline]
    fn combine<B: FieldSet>(self, other: B) -> Combine<Self, B> {
        let _layout = <Combine<Self, B> as FieldSet>::LAYOUT;
        Combine(self, other)
    }
}

/// Field-value set that can be stored.
pub trait WFieldSet: FieldSet {
    /// Applies the set with a plain read-modify-write of every register it
    /// spans. Each register is stored once.
    #[inline]
    fn set(self) {
        let layout = Self::LAYOUT;
        let mut stored = 0;
        Self::store_each(&layout, &mut stored, false);
    }

    /// Applies the set with one atomic read-modify-write per register.
    ///
    /// The set as a whole is not atomic: an interrupt may observe some
    /// registers updated and others not.
    #[inline]
    fn atomic_set(self) {
        let layout = Self::LAYOUT;
        let mut stored = 0;
        Self::store_each(&layout, &mut stored, true);
    }

    #[doc(hidden)]
    fn store_each(layout: &Layout, stored: &mut u8, atomic: bool);
}

/// Field-value set that can be checked.
pub trait RFieldSet: FieldSet {
    /// Returns `true` if every field-value of the set is currently present.
    /// Each register is read once.
    #[inline]
    fn is_set(self) -> bool {
        let layout = Self::LAYOUT;
        let mut checked = 0;
        Self::check_each(&layout, &mut checked)
    }

    #[doc(hidden)]
    fn check_each(layout: &Layout, checked: &mut u8) -> bool;
}

/// Field-value set whose every member belongs to the register `R`.
pub trait OwnedBy<R: Reg>: FieldSet {}

/// Union of two field-value sets. Built with [`FieldSet::combine`].
#[derive(Clone, Copy, Debug)]
pub struct Combine<A: FieldSet, B: FieldSet>(A, B);

/// Returns the union of `a` and `b`. See [`FieldSet::combine`].
#[inline]
pub fn combine<A: FieldSet, B: FieldSet>(a: A, b: B) -> Combine<A, B> {
    a.combine(b)
}

impl<A: FieldSet, B: FieldSet> Token for Combine<A, B> {
    #[inline]
    unsafe fn take() -> Self {
        unsafe { Self(A::take(), B::take()) }
    }
}

impl<A: FieldSet, B: FieldSet> FieldSet for Combine<A, B> {
    const LAYOUT: Layout = A::LAYOUT.merge(B::LAYOUT);
}

impl<A: WFieldSet, B: WFieldSet> WFieldSet for Combine<A, B> {
    #[inline]
    fn store_each(layout: &Layout, stored: &mut u8, atomic: bool) {
        A::store_each(layout, stored, atomic);
        B::store_each(layout, stored, atomic);
    }
}

impl<A: RFieldSet, B: RFieldSet> RFieldSet for Combine<A, B> {
    #[inline]
    fn check_each(layout: &Layout, checked: &mut u8) -> bool {
        A::check_each(layout, checked) && B::check_each(layout, checked)
    }
}

impl<R: Reg, A: OwnedBy<R>, B: OwnedBy<R>> OwnedBy<R> for Combine<A, B> {}

impl FieldSet for () {
    const LAYOUT: Layout = Layout::EMPTY;
}

impl WFieldSet for () {
    #[inline]
    fn store_each(_layout: &Layout, _stored: &mut u8, _atomic: bool) {}
}

impl RFieldSet for () {
    #[inline]
    fn check_each(_layout: &Layout, _checked: &mut u8) -> bool {
        true
    }
}

impl<R: Reg> OwnedBy<R> for () {}
