//! GPIO pin configuration.
//!
//! A pin is described by a [`PinInterface`]: a set of field-value types
//! naming the bit patterns that drive the pin, select its mode, its pull
//! resistor and its drive strength. The field-values may span any registers of
//! the port, so one description style covers ports with a single
//! configuration register per pin as well as ports spreading the
//! configuration over several registers.
//!
//! The configuration state lives only in the hardware. Every transition is a
//! fresh sequence of atomic field-value applications, always in this order:
//!
//! 1. drive the output low, so the pin never shows a stale output level while
//!    the mode is changing;
//! 2. apply the field-values of the mode;
//! 3. for output modes, apply the drive strength.
//!
//! What a pin may do is fixed by its configuration policy, the second type
//! parameter of [`Pin`]: a [`Configurable`] pin may enter any mode, a pin
//! fixed with [`FixedInput`], [`FixedAnalog`] or [`FixedOutput`] may only
//! perform the operations of its mode. Anything else fails to build.
//!
//! ```
//! use mmreg::gpio::{FixedOutput, Max, Pin, PinInterface, PushPull};
//! use mmreg::reg::FieldVal;
//! use mmreg::token::Token;
//!
//! mmreg::reg! {
//!     pub mod GPIOX CFG;
//!     0x4800_0000 0x20 0 RReg WReg;
//!     MODE { 0 2 RRegField WRegField }
//!     PULL { 2 2 RRegField WRegField }
//!     DRIVE { 4 2 RRegField WRegField }
//! }
//!
//! mmreg::reg! {
//!     pub mod GPIOX DATA;
//!     0x4800_0004 0x20 0 RReg WReg;
//!     OUT { 0 1 RRegField WRegField }
//!     IN { 1 1 RRegField RoRegField }
//! }
//!
//! struct Px0;
//!
//! impl PinInterface for Px0 {
//!     const NAME: &'static str = "PX0";
//!     type DriveLow = FieldVal<gpiox_data::Out, 0>;
//!     type DriveHigh = FieldVal<gpiox_data::Out, 1>;
//!     type OutputLatch = FieldVal<gpiox_data::Out, 1>;
//!     type Input = FieldVal<gpiox_data::In, 1>;
//!     type InputMode = FieldVal<gpiox_cfg::Mode, 0b00>;
//!     type AnalogMode = FieldVal<gpiox_cfg::Mode, 0b11>;
//!     type PullDisable = FieldVal<gpiox_cfg::Pull, 0b00>;
//!     type PullEnable = ();
//!     type PullUp = FieldVal<gpiox_cfg::Pull, 0b01>;
//!     type PullDown = FieldVal<gpiox_cfg::Pull, 0b10>;
//!     type PushPull = FieldVal<gpiox_cfg::Mode, 0b01>;
//!     type NormalDrive = FieldVal<gpiox_cfg::Drive, 0b00>;
//!     type LargeDrive = FieldVal<gpiox_cfg::Drive, 0b01>;
//!     type NormalStrength = ();
//!     type MaxStrength = FieldVal<gpiox_cfg::Drive, 0b11>;
//! }
//!
//! fn assert_token<T: Token>() {}
//!
//! fn main() {
//!     assert_token::<Pin<Px0, FixedOutput<PushPull, Max>>>();
//! }
//! ```

mod config;
#[cfg(feature = "embedded-hal")]
mod hal;
mod interface;
mod pin;
mod pins;
mod transition;

pub use self::config::*;
pub use self::interface::*;
pub use self::pin::Pin;
pub use self::pins::Pins;

/// Pin modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Analog input, digital input buffer disabled.
    AnalogInput,
    /// Digital input without pull resistor.
    FloatingInput,
    /// Digital input with pull-up resistor.
    PullUpInput,
    /// Digital input with pull-down resistor.
    PullDownInput,
    /// Push-pull output.
    PushPullOutput,
    /// Open-drain output.
    OpenDrainOutput,
    /// Push-pull output driven by a peripheral.
    AltPushPullOutput,
    /// Open-drain output driven by a peripheral.
    AltOpenDrainOutput,
}

impl PinMode {
    /// Returns `true` for the digital input modes.
    pub const fn is_input(self) -> bool {
        matches!(self, Self::FloatingInput | Self::PullUpInput | Self::PullDownInput)
    }

    /// Returns `true` for the output modes.
    pub const fn is_output(self) -> bool {
        matches!(
            self,
            Self::PushPullOutput
                | Self::OpenDrainOutput
                | Self::AltPushPullOutput
                | Self::AltOpenDrainOutput
        )
    }
}

/// Output drive strength levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Strength {
    /// Normal output drive, normal strength.
    #[default]
    Normal,
    /// Large output drive, normal strength.
    Large,
    /// Large output drive, maximum strength.
    Max,
}

mod compile_tests {
    //! ```compile_fail
    //! use mmreg::gpio::*;
    //! use mmreg::reg::FieldVal;
    //! use mmreg::token::Token;
    //!
    //! mmreg::reg! {
    //!     pub mod GPIOX CFG;
    //!     0x4800_0000 0x20 0 RReg WReg;
    //!     MODE { 0 2 RRegField WRegField }
    //!     PULL { 2 2 RRegField WRegField }
    //! }
    //!
    //! mmreg::reg! {
    //!     pub mod GPIOX DATA;
    //!     0x4800_0004 0x20 0 RReg WReg;
    //!     OUT { 0 1 RRegField WRegField }
    //!     IN { 1 1 RRegField RoRegField }
    //! }
    //!
    //! struct Px0;
    //!
    //! impl PinInterface for Px0 {
    //!     const NAME: &'static str = "PX0";
    //!     type DriveLow = FieldVal<gpiox_data::Out, 0>;
    //!     type DriveHigh = FieldVal<gpiox_data::Out, 1>;
    //!     type OutputLatch = FieldVal<gpiox_data::Out, 1>;
    //!     type Input = FieldVal<gpiox_data::In, 1>;
    //!     type InputMode = FieldVal<gpiox_cfg::Mode, 0b00>;
    //!     type AnalogMode = FieldVal<gpiox_cfg::Mode, 0b11>;
    //!     type PullDisable = FieldVal<gpiox_cfg::Pull, 0b00>;
    //!     type PullEnable = ();
    //!     type PullUp = FieldVal<gpiox_cfg::Pull, 0b01>;
    //!     type PullDown = FieldVal<gpiox_cfg::Pull, 0b10>;
    //!     type PushPull = FieldVal<gpiox_cfg::Mode, 0b01>;
    //!     type NormalDrive = ();
    //!     type LargeDrive = ();
    //!     type NormalStrength = ();
    //!     type MaxStrength = ();
    //! }
    //!
    //! fn main() {
    //!     let pin = unsafe { Pin::<Px0, FixedInput<Floating>>::take() };
    //!     pin.set_high();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use mmreg::gpio::*;
    //! use mmreg::reg::FieldVal;
    //! use mmreg::token::Token;
    //!
    //! mmreg::reg! {
    //!     pub mod GPIOX CFG;
    //!     0x4800_0000 0x20 0 RReg WReg;
    //!     MODE { 0 2 RRegField WRegField }
    //!     PULL { 2 2 RRegField WRegField }
    //! }
    //!
    //! mmreg::reg! {
    //!     pub mod GPIOX DATA;
    //!     0x4800_0004 0x20 0 RReg WReg;
    //!     OUT { 0 1 RRegField WRegField }
    //!     IN { 1 1 RRegField RoRegField }
    //! }
    //!
    //! struct Px0;
    //!
    //! impl PinInterface for Px0 {
    //!     const NAME: &'static str = "PX0";
    //!     type DriveLow = FieldVal<gpiox_data::Out, 0>;
    //!     type DriveHigh = FieldVal<gpiox_data::Out, 1>;
    //!     type OutputLatch = FieldVal<gpiox_data::Out, 1>;
    //!     type Input = FieldVal<gpiox_data::In, 1>;
    //!     type InputMode = FieldVal<gpiox_cfg::Mode, 0b00>;
    //!     type AnalogMode = FieldVal<gpiox_cfg::Mode, 0b11>;
    //!     type PullDisable = FieldVal<gpiox_cfg::Pull, 0b00>;
    //!     type PullEnable = ();
    //!     type PullUp = FieldVal<gpiox_cfg::Pull, 0b01>;
    //!     type PullDown = FieldVal<gpiox_cfg::Pull, 0b10>;
    //!     type PushPull = FieldVal<gpiox_cfg::Mode, 0b01>;
    //!     type NormalDrive = ();
    //!     type LargeDrive = ();
    //!     type NormalStrength = ();
    //!     type MaxStrength = ();
    //! }
    //!
    //! fn main() {
    //!     let pin = unsafe { Pin::<Px0>::take() };
    //!     pin.set_open_drain_output::<Normal>();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use mmreg::gpio::*;
    //! use mmreg::reg::FieldVal;
    //! use mmreg::token::Token;
    //!
    //! mmreg::reg! {
    //!     pub mod GPIOX CFG;
    //!     0x4800_0000 0x20 0 RReg WReg;
    //!     MODE { 0 2 RRegField WRegField }
    //!     PULL { 2 2 RRegField WRegField }
    //! }
    //!
    //! mmreg::reg! {
    //!     pub mod GPIOX DATA;
    //!     0x4800_0004 0x20 0 RReg WReg;
    //!     OUT { 0 1 RRegField WRegField }
    //!     IN { 1 1 RRegField RoRegField }
    //! }
    //!
    //! struct Px0;
    //!
    //! impl PinInterface for Px0 {
    //!     const NAME: &'static str = "PX0";
    //!     type DriveLow = FieldVal<gpiox_data::Out, 0>;
    //!     type DriveHigh = FieldVal<gpiox_data::Out, 1>;
    //!     type OutputLatch = FieldVal<gpiox_data::Out, 1>;
    //!     type Input = FieldVal<gpiox_data::In, 1>;
    //!     type InputMode = FieldVal<gpiox_cfg::Mode, 0b00>;
    //!     type AnalogMode = FieldVal<gpiox_cfg::Mode, 0b11>;
    //!     type PullDisable = FieldVal<gpiox_cfg::Pull, 0b00>;
    //!     type PullEnable = ();
    //!     type PullUp = FieldVal<gpiox_cfg::Pull, 0b01>;
    //!     type PullDown = FieldVal<gpiox_cfg::Pull, 0b10>;
    //!     type PushPull = FieldVal<gpiox_cfg::Mode, 0b01>;
    //!     type NormalDrive = ();
    //!     type LargeDrive = ();
    //!     type NormalStrength = ();
    //!     type MaxStrength = ();
    //! }
    //!
    //! fn main() {
    //!     let pin = unsafe { Pin::<Px0, FixedOutput<PushPull, Normal>>::take() };
    //!     let _ = pin.input();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use mmreg::gpio::*;
    //! use mmreg::reg::FieldVal;
    //! use mmreg::token::Token;
    //!
    //! mmreg::reg! {
    //!     pub mod GPIOX CFG;
    //!     0x4800_0000 0x20 0 RReg WReg;
    //!     MODE { 0 2 RRegField WRegField }
    //!     PULL { 2 2 RRegField WRegField }
    //! }
    //!
    //! mmreg::reg! {
    //!     pub mod GPIOX DATA;
    //!     0x4800_0004 0x20 0 RReg WReg;
    //!     OUT { 0 1 RRegField WRegField }
    //!     IN { 1 1 RRegField RoRegField }
    //! }
    //!
    //! struct Px0;
    //!
    //! impl PinInterface for Px0 {
    //!     const NAME: &'static str = "PX0";
    //!     type DriveLow = FieldVal<gpiox_data::Out, 0>;
    //!     type DriveHigh = FieldVal<gpiox_data::Out, 1>;
    //!     type OutputLatch = FieldVal<gpiox_data::Out, 1>;
    //!     type Input = FieldVal<gpiox_data::In, 1>;
    //!     type InputMode = FieldVal<gpiox_cfg::Mode, 0b00>;
    //!     type AnalogMode = FieldVal<gpiox_cfg::Mode, 0b11>;
    //!     type PullDisable = FieldVal<gpiox_cfg::Pull, 0b00>;
    //!     type PullEnable = ();
    //!     type PullUp = FieldVal<gpiox_cfg::Pull, 0b01>;
    //!     type PullDown = FieldVal<gpiox_cfg::Pull, 0b10>;
    //!     type PushPull = FieldVal<gpiox_cfg::Mode, 0b01>;
    //!     type NormalDrive = ();
    //!     type LargeDrive = ();
    //!     type NormalStrength = ();
    //!     type MaxStrength = ();
    //! }
    //!
    //! fn main() {
    //!     let pin = unsafe { Pin::<Px0, FixedOutput<PushPull, Normal>>::take() };
    //!     pin.toggle_output();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use mmreg::gpio::*;
    //! use mmreg::reg::FieldVal;
    //! use mmreg::token::Token;
    //!
    //! mmreg::reg! {
    //!     pub mod GPIOX CFG;
    //!     0x4800_0000 0x20 0 RReg WReg;
    //!     MODE { 0 2 RRegField WRegField }
    //!     PULL { 2 2 RRegField WRegField }
    //! }
    //!
    //! mmreg::reg! {
    //!     pub mod GPIOX DATA;
    //!     0x4800_0004 0x20 0 RReg WReg;
    //!     OUT { 0 1 RRegField WRegField }
    //!     IN { 1 1 RRegField RoRegField }
    //! }
    //!
    //! struct Px0;
    //!
    //! impl PinInterface for Px0 {
    //!     const NAME: &'static str = "PX0";
    //!     type DriveLow = FieldVal<gpiox_data::Out, 0>;
    //!     type DriveHigh = FieldVal<gpiox_data::Out, 1>;
    //!     type OutputLatch = FieldVal<gpiox_data::Out, 1>;
    //!     type Input = FieldVal<gpiox_data::In, 1>;
    //!     type InputMode = FieldVal<gpiox_cfg::Mode, 0b00>;
    //!     type AnalogMode = FieldVal<gpiox_cfg::Mode, 0b11>;
    //!     type PullDisable = FieldVal<gpiox_cfg::Pull, 0b00>;
    //!     type PullEnable = ();
    //!     type PullUp = FieldVal<gpiox_cfg::Pull, 0b01>;
    //!     type PullDown = FieldVal<gpiox_cfg::Pull, 0b10>;
    //!     type PushPull = FieldVal<gpiox_cfg::Mode, 0b01>;
    //!     type NormalDrive = ();
    //!     type LargeDrive = ();
    //!     type NormalStrength = ();
    //!     type MaxStrength = ();
    //! }
    //!
    //! fn main() {
    //!     let pin = unsafe { Pin::<Px0, FixedInput<Floating>>::take() };
    //!     pin.set_strength::<Max>();
    //! }
    //! ```
}
