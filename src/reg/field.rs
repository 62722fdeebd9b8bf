use super::{FieldVal, RReg, Reg, RwReg, StoreMasked, WReg};
use crate::bits::{low_mask, Bits};
use crate::mem::{BitBand, Memory};
use crate::token::Token;

/// Raw word type of the register owning the field `F`.
pub type FieldBits<F> = <<F as RegField>::Reg as Reg>::Bits;

/// How a single-field store reaches the register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldStrategy {
    /// Masked store to the register word.
    Masked,
    /// Single write of `0` or `1` to the bit-band alias word at the address.
    BitBand(usize),
}

impl FieldStrategy {
    /// Selects the strategy for a field of `width` bits at `offset` of the
    /// register at `address`.
    ///
    /// Only single-bit fields inside the bit-band region use the alias.
    pub const fn select(width: u32, offset: u32, address: usize, band: Option<BitBand>) -> Self {
        if width != 1 {
            return Self::Masked;
        }
        match band {
            Some(band) => match band.alias(address, offset) {
                Some(alias) => Self::BitBand(alias),
                None => Self::Masked,
            },
            None => Self::Masked,
        }
    }
}

/// Register field token.
pub trait RegField: Token {
    /// Parent register type.
    type Reg: Reg;

    /// Bit offset of the field.
    const OFFSET: u32;

    /// Bit width of the field.
    const WIDTH: u32;

    /// Unshifted mask of the field value.
    const VALUE_MASK: u64 = low_mask(Self::WIDTH);

    /// Mask of the field bits in the register word.
    const MASK: u64 = Self::VALUE_MASK << Self::OFFSET;

    /// Store path of [`WRegField::set`].
    const STRATEGY: FieldStrategy = FieldStrategy::select(
        Self::WIDTH,
        Self::OFFSET,
        <Self::Reg as Reg>::ADDRESS,
        <Self::Reg as Reg>::BIT_BAND,
    );

    /// Returns the field-value `V` of this field.
    ///
    /// Fails to build if `V` doesn't fit the field.
    #[inline]
    fn val<const V: u64>(&self) -> FieldVal<Self, V> {
        unsafe { FieldVal::take() }
    }

    /// Extracts the field from the register value `word`.
    #[inline]
    fn read_from(word: FieldBits<Self>) -> FieldBits<Self> {
        Bits::from_u64((word.to_u64() >> Self::OFFSET) & Self::VALUE_MASK)
    }

    /// Returns `word` with the field replaced by `value`. Bits of `value`
    /// beyond the field width are dropped.
    #[inline]
    fn write_into(word: FieldBits<Self>, value: FieldBits<Self>) -> FieldBits<Self> {
        Bits::from_u64(word.to_u64() & !Self::MASK | Self::shift(value))
    }

    #[doc(hidden)]
    #[inline]
    fn shift(value: FieldBits<Self>) -> u64 {
        (value.to_u64() & Self::VALUE_MASK) << Self::OFFSET
    }
}

/// Register field that can read its value.
pub trait RRegField: RegField<Reg: RReg> {
    /// Reads the field from the register.
    #[inline]
    fn get(&self) -> FieldBits<Self> {
        Self::read_from(unsafe { Self::Reg::take() }.read())
    }
}

/// Register field that can write its value.
pub trait WRegField: RegField<Reg: StoreMasked> {
    /// Replaces the field with `value`, leaving other fields intact. On a
    /// write-only register this is [`write`](WRegField::write).
    #[inline]
    fn set(&self, value: FieldBits<Self>) {
        match Self::STRATEGY {
            FieldStrategy::BitBand(alias) => store_alias::<Self>(alias, value),
            FieldStrategy::Masked => {
                let reg = unsafe { Self::Reg::take() };
                reg.store_masked(Bits::from_u64(Self::shift(value)), Bits::from_u64(Self::MASK));
            }
        }
    }

    /// Atomic version of [`set`](WRegField::set).
    #[inline]
    fn atomic_set(&self, value: FieldBits<Self>) {
        match Self::STRATEGY {
            FieldStrategy::BitBand(alias) => store_alias::<Self>(alias, value),
            FieldStrategy::Masked => {
                let reg = unsafe { Self::Reg::take() };
                reg.atomic_store_masked(
                    Bits::from_u64(Self::shift(value)),
                    Bits::from_u64(Self::MASK),
                );
            }
        }
    }

    /// Writes `value` shifted into place, with every other bit of the register
    /// zero.
    #[inline]
    fn write(&self, value: FieldBits<Self>) {
        unsafe { Self::Reg::take() }.write(Bits::from_u64(Self::shift(value)));
    }
}

/// Register field that can only read its value.
pub trait RoRegField: RRegField {}

/// Register field that can only write its value.
pub trait WoRegField: WRegField {}

/// Register field that can read and write its value.
///
/// Automatically implemented for every field with both [`RRegField`] and
/// [`WRegField`].
pub trait RwRegField: RRegField + WRegField {
    /// Inverts every bit of the field with a plain load and store.
    #[inline]
    fn toggle(&self) {
        unsafe { Self::Reg::take() }.toggle_bits(Bits::from_u64(Self::MASK));
    }

    /// Atomic version of [`toggle`](RwRegField::toggle).
    #[inline]
    fn atomic_toggle(&self) {
        unsafe { Self::Reg::take() }.atomic_toggle_bits(Bits::from_u64(Self::MASK));
    }
}

impl<F: RRegField + WRegField> RwRegField for F {}

#[allow(clippy::cast_possible_truncation)]
#[inline]
pub(crate) fn store_alias<F: RegField>(alias: usize, value: FieldBits<F>) {
    let bit = (value.to_u64() & 1) as u32;
    unsafe { <<F::Reg as Reg>::Memory as Memory>::store::<u32>(alias, bit) };
}
