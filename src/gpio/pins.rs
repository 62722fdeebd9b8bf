use super::{CanInput, CanOutput, Pin, PinConfig, PinInterface, PinToggle};
use crate::reg::{FieldSet, WFieldSet};
use crate::token::Token;

/// Group of pins driven together.
///
/// `T` is a tuple of [`Pin`]s. [`set_high`](Pins::set_high) and
/// [`set_low`](Pins::set_low) combine the drive field-values of all pins, so
/// pins sharing an output register are updated by a single store to it. The
/// same pin can't appear twice: its field-values would overlap.
#[derive(Clone, Copy, Debug)]
pub struct Pins<T> {
    pins: T,
}

impl<T: Token> Token for Pins<T> {
    #[inline]
    unsafe fn take() -> Self {
        Self { pins: unsafe { T::take() } }
    }
}

impl<T> Pins<T> {
    /// Groups `pins`.
    pub fn new(pins: T) -> Self {
        Self { pins }
    }

    /// Returns the pins.
    pub fn free(self) -> T {
        self.pins
    }
}

macro_rules! pins {
    ($(($I:ident, $C:ident, $idx:tt)),+) => {
        impl<$($I: PinInterface, $C: PinConfig<$I>),+> Token for ($(Pin<$I, $C>,)+) {
            #[inline]
            unsafe fn take() -> Self {
                unsafe { ($(Pin::<$I, $C>::take(),)+) }
            }
        }

        impl<$($I: PinInterface, $C: PinConfig<$I>),+> Pins<($(Pin<$I, $C>,)+)> {
            /// Drives all outputs high.
            pub fn set_high(&self)
            where
                $($C: CanOutput,)+
            {
                unsafe { ()$(.combine($I::DriveHigh::take()))+ }.atomic_set();
            }

            /// Drives all outputs low.
            pub fn set_low(&self)
            where
                $($C: CanOutput,)+
            {
                unsafe { ()$(.combine($I::DriveLow::take()))+ }.atomic_set();
            }

            /// Inverts all output latches, one pin at a time.
            pub fn toggle_output(&self)
            where
                $($C: CanOutput, $I: PinToggle,)+
            {
                $(self.pins.$idx.toggle_output();)+
            }

            /// Returns all pins to floating input, one pin at a time.
            pub fn reset(&self)
            where
                $($C: CanInput,)+
            {
                $(self.pins.$idx.reset();)+
            }
        }
    };
}

pins!((I0, C0, 0));
pins!((I0, C0, 0), (I1, C1, 1));
pins!((I0, C0, 0), (I1, C1, 1), (I2, C2, 2));
pins!((I0, C0, 0), (I1, C1, 1), (I2, C2, 2), (I3, C3, 3));
pins!((I0, C0, 0), (I1, C1, 1), (I2, C2, 2), (I3, C3, 3), (I4, C4, 4));
pins!((I0, C0, 0), (I1, C1, 1), (I2, C2, 2), (I3, C3, 3), (I4, C4, 4), (I5, C5, 5));
pins!((I0, C0, 0), (I1, C1, 1), (I2, C2, 2), (I3, C3, 3), (I4, C4, 4), (I5, C5, 5), (I6, C6, 6));
pins!(
    (I0, C0, 0),
    (I1, C1, 1),
    (I2, C2, 2),
    (I3, C3, 3),
    (I4, C4, 4),
    (I5, C5, 5),
    (I6, C6, 6),
    (I7, C7, 7)
);
