//! Transition sequences, without capability checks.

use super::{DriveStrength, PinInterface, Strength};
use crate::reg::WFieldSet;
use crate::token::Token;

#[inline]
pub(super) fn step<S: WFieldSet>() {
    unsafe { S::take() }.atomic_set();
}

pub(super) fn analog<I: PinInterface>() {
    step::<I::DriveLow>();
    step::<I::PullDisable>();
    step::<I::AnalogMode>();
}

pub(super) fn floating_input<I: PinInterface>() {
    step::<I::DriveLow>();
    step::<I::PullDisable>();
    step::<I::InputMode>();
}

pub(super) fn pull_up_input<I: PinInterface>() {
    floating_input::<I>();
    step::<I::PullEnable>();
    step::<I::PullUp>();
}

pub(super) fn pull_down_input<I: PinInterface>() {
    floating_input::<I>();
    step::<I::PullEnable>();
    step::<I::PullDown>();
}

pub(super) fn output<I: PinInterface, M: WFieldSet, S: DriveStrength>() {
    step::<I::DriveLow>();
    step::<M>();
    S::apply::<I>();
}

pub(super) fn output_with<I: PinInterface, M: WFieldSet>(strength: Strength) {
    step::<I::DriveLow>();
    step::<M>();
    self::strength::<I>(strength);
}

pub(super) fn strength<I: PinInterface>(strength: Strength) {
    match strength {
        Strength::Normal => super::Normal::apply::<I>(),
        Strength::Large => super::Large::apply::<I>(),
        Strength::Max => super::Max::apply::<I>(),
    }
}
