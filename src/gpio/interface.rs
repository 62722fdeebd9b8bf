use crate::reg::{RFieldSet, RwRegField, WFieldSet};

/// Register-level description of a GPIO pin.
///
/// Every associated type is a field-value set: a single
/// [`FieldVal`](crate::reg::FieldVal), a [`Combine`](crate::reg::Combine) of
/// several, or `()` where the hardware needs no write for the step.
pub trait PinInterface: Send + Sync + 'static {
    /// Pin name used in log messages.
    const NAME: &'static str;

    /// Drives the output low.
    type DriveLow: WFieldSet;
    /// Drives the output high.
    type DriveHigh: WFieldSet;
    /// Present while the output latch is high.
    type OutputLatch: RFieldSet;
    /// Present while the input level is high.
    type Input: RFieldSet;

    /// Selects digital input mode.
    type InputMode: WFieldSet;
    /// Selects analog mode.
    type AnalogMode: WFieldSet;
    /// Disconnects the pull resistor.
    type PullDisable: WFieldSet;
    /// Connects the pull resistor.
    type PullEnable: WFieldSet;
    /// Selects pull-up.
    type PullUp: WFieldSet;
    /// Selects pull-down.
    type PullDown: WFieldSet;

    /// Selects push-pull output mode.
    type PushPull: WFieldSet;

    /// Selects the normal output drive.
    type NormalDrive: WFieldSet;
    /// Selects the large output drive.
    type LargeDrive: WFieldSet;
    /// Selects the normal strength.
    type NormalStrength: WFieldSet;
    /// Selects the maximum strength. Only meaningful with the large drive.
    type MaxStrength: WFieldSet;
}

/// Pin with an open-drain output mode.
pub trait PinOpenDrain: PinInterface {
    /// Selects open-drain output mode.
    type OpenDrain: WFieldSet;
}

/// Pin with a peripheral-driven push-pull output mode.
pub trait PinAltPushPull: PinInterface {
    /// Selects alternate function push-pull output mode.
    type AltPushPull: WFieldSet;
}

/// Pin with a peripheral-driven open-drain output mode.
pub trait PinAltOpenDrain: PinInterface {
    /// Selects alternate function open-drain output mode.
    type AltOpenDrain: WFieldSet;
}

/// Pin with a dedicated output field that can be toggled.
pub trait PinToggle: PinInterface {
    /// Output latch field.
    type OutputField: RwRegField;
}
