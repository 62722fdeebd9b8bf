use super::{
    transition, PinAltOpenDrain, PinAltPushPull, PinInterface, PinMode, PinOpenDrain, Strength,
};
use crate::reg::WFieldSet;
use core::marker::PhantomData;

/// Configuration policy of a pin.
///
/// Decides which transitions the pin accepts and what
/// [`Pin::init`](super::Pin::init) applies.
pub trait PinConfig<I: PinInterface>: Send + Sync + 'static {
    /// The startup mode, or `None` for configurable pins.
    const MODE: Option<PinMode>;

    #[doc(hidden)]
    fn init();
}

/// Pin that may enter digital input modes.
pub trait CanInput {}

/// Pin that may enter output modes.
pub trait CanOutput {}

/// Pin that may enter analog mode.
pub trait CanAnalog {}

/// Pin that may enter any mode at any time. Starts as a floating input.
pub struct Configurable;

/// Pin fixed in the digital input mode `M`.
pub struct FixedInput<M: InputMode>(PhantomData<M>);

/// Pin fixed in analog mode.
pub struct FixedAnalog;

/// Pin fixed in the output mode `M` with the drive strength `S`.
pub struct FixedOutput<M, S: DriveStrength>(PhantomData<(M, S)>);

impl CanInput for Configurable {}
impl CanOutput for Configurable {}
impl CanAnalog for Configurable {}
impl<M: InputMode> CanInput for FixedInput<M> {}
impl CanAnalog for FixedAnalog {}
impl<M, S: DriveStrength> CanOutput for FixedOutput<M, S> {}

impl<I: PinInterface> PinConfig<I> for Configurable {
    const MODE: Option<PinMode> = None;

    fn init() {
        transition::floating_input::<I>();
    }
}

impl<I: PinInterface, M: InputMode> PinConfig<I> for FixedInput<M> {
    const MODE: Option<PinMode> = Some(M::MODE);

    fn init() {
        M::apply::<I>();
    }
}

impl<I: PinInterface> PinConfig<I> for FixedAnalog {
    const MODE: Option<PinMode> = Some(PinMode::AnalogInput);

    fn init() {
        transition::analog::<I>();
    }
}

impl<I: PinInterface, M: OutputMode<I>, S: DriveStrength> PinConfig<I> for FixedOutput<M, S> {
    const MODE: Option<PinMode> = Some(M::MODE);

    fn init() {
        transition::output::<I, M::Values, S>();
    }
}

/// Digital input mode marker.
pub trait InputMode: Send + Sync + 'static {
    /// The mode.
    const MODE: PinMode;

    #[doc(hidden)]
    fn apply<I: PinInterface>();
}

/// Output mode marker, implemented for the modes the pin interface `I`
/// supports.
pub trait OutputMode<I: PinInterface>: Send + Sync + 'static {
    /// The mode.
    const MODE: PinMode;

    #[doc(hidden)]
    type Values: WFieldSet;
}

/// Drive strength marker.
pub trait DriveStrength: Send + Sync + 'static {
    /// The strength level.
    const STRENGTH: Strength;

    #[doc(hidden)]
    fn apply<I: PinInterface>();
}

/// Input without pull resistor.
pub struct Floating;

/// Input with pull-up resistor.
pub struct PullUp;

/// Input with pull-down resistor.
pub struct PullDown;

/// Push-pull output.
pub struct PushPull;

/// Open-drain output.
pub struct OpenDrain;

/// Peripheral-driven push-pull output.
pub struct AltPushPull;

/// Peripheral-driven open-drain output.
pub struct AltOpenDrain;

/// Normal drive strength.
pub struct Normal;

/// Large drive strength.
pub struct Large;

/// Maximum drive strength.
pub struct Max;

impl InputMode for Floating {
    const MODE: PinMode = PinMode::FloatingInput;

    fn apply<I: PinInterface>() {
        transition::floating_input::<I>();
    }
}

impl InputMode for PullUp {
    const MODE: PinMode = PinMode::PullUpInput;

    fn apply<I: PinInterface>() {
        transition::pull_up_input::<I>();
    }
}

impl InputMode for PullDown {
    const MODE: PinMode = PinMode::PullDownInput;

    fn apply<I: PinInterface>() {
        transition::pull_down_input::<I>();
    }
}

impl<I: PinInterface> OutputMode<I> for PushPull {
    const MODE: PinMode = PinMode::PushPullOutput;
    type Values = I::PushPull;
}

impl<I: PinOpenDrain> OutputMode<I> for OpenDrain {
    const MODE: PinMode = PinMode::OpenDrainOutput;
    type Values = I::OpenDrain;
}

impl<I: PinAltPushPull> OutputMode<I> for AltPushPull {
    const MODE: PinMode = PinMode::AltPushPullOutput;
    type Values = I::AltPushPull;
}

impl<I: PinAltOpenDrain> OutputMode<I> for AltOpenDrain {
    const MODE: PinMode = PinMode::AltOpenDrainOutput;
    type Values = I::AltOpenDrain;
}

impl DriveStrength for Normal {
    const STRENGTH: Strength = Strength::Normal;

    fn apply<I: PinInterface>() {
        transition::step::<I::NormalDrive>();
        transition::step::<I::NormalStrength>();
    }
}

impl DriveStrength for Large {
    const STRENGTH: Strength = Strength::Large;

    fn apply<I: PinInterface>() {
        transition::step::<I::LargeDrive>();
        transition::step::<I::NormalStrength>();
    }
}

impl DriveStrength for Max {
    const STRENGTH: Strength = Strength::Max;

    fn apply<I: PinInterface>() {
        transition::step::<I::LargeDrive>();
        transition::step::<I::MaxStrength>();
    }
}
