use super::{
    transition, AltOpenDrain, AltPushPull, CanAnalog, CanInput, CanOutput, Configurable,
    DriveStrength, Floating, InputMode, OpenDrain, OutputMode, PinAltOpenDrain, PinAltPushPull,
    PinConfig, PinInterface, PinMode, PinOpenDrain, PinToggle, PullDown, PullUp, PushPull,
    Strength,
};
use crate::reg::{RFieldSet, RwRegField};
use crate::token::Token;
use core::fmt;
use core::marker::PhantomData;

/// GPIO pin token.
///
/// `I` describes the pin registers, `C` is the configuration policy.
pub struct Pin<I: PinInterface, C: PinConfig<I> = Configurable> {
    _marker: PhantomData<(I, C)>,
}

impl<I: PinInterface, C: PinConfig<I>> Clone for Pin<I, C> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: PinInterface, C: PinConfig<I>> Copy for Pin<I, C> {}

impl<I: PinInterface, C: PinConfig<I>> fmt::Debug for Pin<I, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pin").field("name", &I::NAME).field("mode", &C::MODE).finish()
    }
}

impl<I: PinInterface, C: PinConfig<I>> Token for Pin<I, C> {
    #[inline]
    unsafe fn take() -> Self {
        Self { _marker: PhantomData }
    }
}

impl<I: PinInterface, C: PinConfig<I>> Pin<I, C> {
    /// Applies the startup configuration of the policy: the fixed mode, or
    /// floating input for configurable pins.
    pub fn init(&self) {
        debug!("{}: init", I::NAME);
        C::init();
    }

    /// Returns the pin to floating input, the reset state of most ports.
    pub fn reset(&self)
    where
        C: CanInput,
    {
        self.set_floating_input();
    }

    /// Switches to analog mode.
    pub fn set_analog(&self)
    where
        C: CanAnalog,
    {
        trace!("{}: {:?}", I::NAME, PinMode::AnalogInput);
        transition::analog::<I>();
    }

    /// Switches to digital input without pull resistor.
    pub fn set_floating_input(&self)
    where
        C: CanInput,
    {
        self.configure_input::<Floating>();
    }

    /// Switches to digital input with pull-up resistor.
    pub fn set_pull_up_input(&self)
    where
        C: CanInput,
    {
        self.configure_input::<PullUp>();
    }

    /// Switches to digital input with pull-down resistor.
    pub fn set_pull_down_input(&self)
    where
        C: CanInput,
    {
        self.configure_input::<PullDown>();
    }

    /// Switches to push-pull output with the drive strength `S`.
    pub fn set_push_pull_output<S: DriveStrength>(&self)
    where
        C: CanOutput,
    {
        self.configure_output::<PushPull, S>();
    }

    /// Switches to open-drain output with the drive strength `S`.
    pub fn set_open_drain_output<S: DriveStrength>(&self)
    where
        C: CanOutput,
        I: PinOpenDrain,
    {
        self.configure_output::<OpenDrain, S>();
    }

    /// Switches to peripheral-driven push-pull output with the drive strength
    /// `S`.
    pub fn set_alt_push_pull<S: DriveStrength>(&self)
    where
        C: CanOutput,
        I: PinAltPushPull,
    {
        self.configure_output::<AltPushPull, S>();
    }

    /// Switches to peripheral-driven open-drain output with the drive strength
    /// `S`.
    pub fn set_alt_open_drain<S: DriveStrength>(&self)
    where
        C: CanOutput,
        I: PinAltOpenDrain,
    {
        self.configure_output::<AltOpenDrain, S>();
    }

    /// Changes the drive strength, keeping the output mode.
    pub fn set_strength<S: DriveStrength>(&self)
    where
        C: CanOutput,
    {
        trace!("{}: {:?} strength", I::NAME, S::STRENGTH);
        S::apply::<I>();
    }

    /// Switches to the digital input mode `M`.
    pub fn configure_input<M: InputMode>(&self)
    where
        C: CanInput,
    {
        trace!("{}: {:?}", I::NAME, M::MODE);
        M::apply::<I>();
    }

    /// Switches to the output mode `M` with the drive strength `S`.
    pub fn configure_output<M: OutputMode<I>, S: DriveStrength>(&self)
    where
        C: CanOutput,
    {
        trace!("{}: {:?}, {:?} strength", I::NAME, M::MODE, S::STRENGTH);
        transition::output::<I, M::Values, S>();
    }

    /// Drives the output high.
    #[inline]
    pub fn set_high(&self)
    where
        C: CanOutput,
    {
        transition::step::<I::DriveHigh>();
    }

    /// Drives the output low.
    #[inline]
    pub fn set_low(&self)
    where
        C: CanOutput,
    {
        transition::step::<I::DriveLow>();
    }

    /// Returns `true` if the output latch is high.
    #[inline]
    pub fn output_latch(&self) -> bool
    where
        C: CanOutput,
    {
        unsafe { I::OutputLatch::take() }.is_set()
    }

    /// Returns `true` if the output is driven high. Same as
    /// [`output_latch`](Pin::output_latch).
    #[inline]
    pub fn is_set_high(&self) -> bool
    where
        C: CanOutput,
    {
        self.output_latch()
    }

    /// Returns `true` if the input level is high.
    #[inline]
    pub fn input(&self) -> bool
    where
        C: CanInput,
    {
        unsafe { I::Input::take() }.is_set()
    }

    /// Inverts the output latch.
    #[inline]
    pub fn toggle_output(&self)
    where
        C: CanOutput,
        I: PinToggle,
    {
        unsafe { I::OutputField::take() }.atomic_toggle();
    }
}

impl<I> Pin<I, Configurable>
where
    I: PinOpenDrain + PinAltPushPull + PinAltOpenDrain,
{
    /// Switches to `mode` chosen at run time. `strength` applies to the output
    /// modes only.
    pub fn configure(&self, mode: PinMode, strength: Strength) {
        if mode.is_output() {
            trace!("{}: {:?}, {:?} strength", I::NAME, mode, strength);
        } else {
            trace!("{}: {:?}", I::NAME, mode);
        }
        match mode {
            PinMode::AnalogInput => transition::analog::<I>(),
            PinMode::FloatingInput => transition::floating_input::<I>(),
            PinMode::PullUpInput => transition::pull_up_input::<I>(),
            PinMode::PullDownInput => transition::pull_down_input::<I>(),
            PinMode::PushPullOutput => transition::output_with::<I, I::PushPull>(strength),
            PinMode::OpenDrainOutput => transition::output_with::<I, I::OpenDrain>(strength),
            PinMode::AltPushPullOutput => transition::output_with::<I, I::AltPushPull>(strength),
            PinMode::AltOpenDrainOutput => transition::output_with::<I, I::AltOpenDrain>(strength),
        }
    }
}
