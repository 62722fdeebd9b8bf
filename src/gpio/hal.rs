//! `embedded-hal` 1.0 digital traits.

use super::{CanInput, CanOutput, Pin, PinConfig, PinInterface};
use core::convert::Infallible;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};

impl<I: PinInterface, C: PinConfig<I>> ErrorType for Pin<I, C> {
    type Error = Infallible;
}

impl<I: PinInterface, C: PinConfig<I> + CanOutput> OutputPin for Pin<I, C> {
    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Pin::set_low(self);
        Ok(())
    }

    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        Pin::set_high(self);
        Ok(())
    }
}

impl<I: PinInterface, C: PinConfig<I> + CanOutput> StatefulOutputPin for Pin<I, C> {
    #[inline]
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.output_latch())
    }

    #[inline]
    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.output_latch())
    }
}

impl<I: PinInterface, C: PinConfig<I> + CanInput> InputPin for Pin<I, C> {
    #[inline]
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.input())
    }

    #[inline]
    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.input())
    }
}
