mod support;

use mmreg::gpio::{
    AltOpenDrain, Configurable, FixedAnalog, FixedInput, FixedOutput, Large, Max, Normal,
    OpenDrain, Pin, PinAltOpenDrain, PinAltPushPull, PinInterface, PinMode, PinOpenDrain,
    PinToggle, Pins, PullDown, PullUp, PushPull, Strength,
};
use mmreg::reg::{Combine, FieldVal};
use mmreg::token::Token;
use support::{Access, Write};

mmreg::reg! {
    pub mod GPIOX MODER;
    0x4001_0800 0x20 0 RReg WReg;
    memory support::Sim;
    MODE0 { 0 2 RRegField WRegField }
    MODE1 { 2 2 RRegField WRegField }
}

mmreg::reg! {
    pub mod GPIOX OTYPER;
    0x4001_0804 0x20 0 RReg WReg;
    memory support::Sim;
    OT0 { 0 1 RRegField WRegField }
    OT1 { 1 1 RRegField WRegField }
}

mmreg::reg! {
    pub mod GPIOX OSPEEDR;
    0x4001_0808 0x20 0 RReg WReg;
    memory support::Sim;
    DRV0 { 0 1 RRegField WRegField }
    DRV1 { 1 1 RRegField WRegField }
}

mmreg::reg! {
    pub mod GPIOX PUPDR;
    0x4001_080C 0x20 0 RReg WReg;
    memory support::Sim;
    PUPD0 { 0 2 RRegField WRegField }
    PUPD1 { 2 2 RRegField WRegField }
}

mmreg::reg! {
    pub mod GPIOX IDR;
    0x4001_0810 0x20 0 RReg RoReg;
    memory support::Sim;
    ID0 { 0 1 RRegField RoRegField }
    ID1 { 1 1 RRegField RoRegField }
}

mmreg::reg! {
    pub mod GPIOX ODR;
    0x4001_0814 0x20 0 RReg WReg;
    memory support::Sim;
    bit_band 0x4000_0000 0x4200_0000;
    OD0 { 0 1 RRegField WRegField }
    OD1 { 1 1 RRegField WRegField }
}

mmreg::reg! {
    pub mod GPIOX HDRV;
    0x4001_0818 0x20 0 RReg WReg;
    memory support::Sim;
    HD0 { 0 1 RRegField WRegField }
    HD1 { 1 1 RRegField WRegField }
}

const MODER: usize = 0x4001_0800;
const OTYPER: usize = 0x4001_0804;
const OSPEEDR: usize = 0x4001_0808;
const PUPDR: usize = 0x4001_080C;
const IDR: usize = 0x4001_0810;
const ODR: usize = 0x4001_0814;
const HDRV: usize = 0x4001_0818;
const OD0_ALIAS: usize = 0x4221_0280;

macro_rules! pin {
    ($pin:ident, $mode:ident, $ot:ident, $drv:ident, $pupd:ident, $id:ident, $od:ident, $hd:ident) => {
        struct $pin;

        impl PinInterface for $pin {
            const NAME: &'static str = stringify!($pin);
            type DriveLow = FieldVal<gpiox_odr::$od, 0>;
            type DriveHigh = FieldVal<gpiox_odr::$od, 1>;
            type OutputLatch = FieldVal<gpiox_odr::$od, 1>;
            type Input = FieldVal<gpiox_idr::$id, 1>;
            type InputMode = FieldVal<gpiox_moder::$mode, 0b00>;
            type AnalogMode = FieldVal<gpiox_moder::$mode, 0b11>;
            type PullDisable = FieldVal<gpiox_pupdr::$pupd, 0b00>;
            type PullEnable = ();
            type PullUp = FieldVal<gpiox_pupdr::$pupd, 0b01>;
            type PullDown = FieldVal<gpiox_pupdr::$pupd, 0b10>;
            type PushPull =
                Combine<FieldVal<gpiox_moder::$mode, 0b01>, FieldVal<gpiox_otyper::$ot, 0>>;
            type NormalDrive = FieldVal<gpiox_ospeedr::$drv, 0>;
            type LargeDrive = FieldVal<gpiox_ospeedr::$drv, 1>;
            type NormalStrength = FieldVal<gpiox_hdrv::$hd, 0>;
            type MaxStrength = FieldVal<gpiox_hdrv::$hd, 1>;
        }

        impl PinOpenDrain for $pin {
            type OpenDrain =
                Combine<FieldVal<gpiox_moder::$mode, 0b01>, FieldVal<gpiox_otyper::$ot, 1>>;
        }

        impl PinAltPushPull for $pin {
            type AltPushPull =
                Combine<FieldVal<gpiox_moder::$mode, 0b10>, FieldVal<gpiox_otyper::$ot, 0>>;
        }

        impl PinAltOpenDrain for $pin {
            type AltOpenDrain =
                Combine<FieldVal<gpiox_moder::$mode, 0b10>, FieldVal<gpiox_otyper::$ot, 1>>;
        }

        impl PinToggle for $pin {
            type OutputField = gpiox_odr::$od;
        }
    };
}

pin!(Px0, Mode0, Ot0, Drv0, Pupd0, Id0, Od0, Hd0);
pin!(Px1, Mode1, Ot1, Drv1, Pupd1, Id1, Od1, Hd1);

fn pin<C: mmreg::gpio::PinConfig<Px0>>() -> Pin<Px0, C> {
    support::reset();
    unsafe { Pin::take() }
}

fn addresses() -> Vec<usize> {
    support::journal().iter().map(|write| write.address).collect()
}

#[test]
fn push_pull_drive_and_toggle() {
    let pin = pin::<Configurable>();
    pin.set_push_pull_output::<Normal>();
    pin.set_high();
    assert!(pin.output_latch());
    assert!(pin.is_set_high());
    pin.set_low();
    assert!(!pin.output_latch());
    pin.toggle_output();
    assert!(pin.output_latch());
    pin.toggle_output();
    assert!(!pin.output_latch());
}

#[test]
fn drive_uses_bit_band() {
    let pin = pin::<Configurable>();
    support::poke(ODR, 0b10);
    pin.set_high();
    pin.set_low();
    assert_eq!(support::journal(), [
        Write { address: OD0_ALIAS, value: 1, access: Access::BitBand },
        Write { address: OD0_ALIAS, value: 0, access: Access::BitBand },
    ]);
    assert_eq!(support::peek(ODR), 0b10);
}

#[test]
fn output_drives_low_first() {
    let pin = pin::<Configurable>();
    support::poke(ODR, 0b01);
    pin.set_push_pull_output::<Normal>();
    assert_eq!(addresses(), [OD0_ALIAS, MODER, OTYPER, OSPEEDR, HDRV]);
    assert_eq!(support::journal()[0].value, 0);
    assert_eq!(support::peek(ODR), 0);
    assert_eq!(support::peek(MODER), 0b01);
    assert_eq!(support::peek(OTYPER), 0);
}

#[test]
fn input_drives_low_first() {
    let pin = pin::<Configurable>();
    support::poke(ODR, 0b01);
    support::poke(MODER, 0b01);
    pin.set_pull_down_input();
    assert_eq!(addresses(), [OD0_ALIAS, PUPDR, MODER, PUPDR]);
    assert_eq!(support::peek(ODR), 0);
    assert_eq!(support::peek(MODER), 0b00);
    assert_eq!(support::peek(PUPDR), 0b10);
}

#[test]
fn input_modes() {
    let pin = pin::<Configurable>();
    support::poke(PUPDR, 0b1111);
    pin.set_pull_up_input();
    assert_eq!(support::peek(PUPDR), 0b1101);
    pin.set_floating_input();
    assert_eq!(support::peek(PUPDR), 0b1100);
    pin.configure_input::<PullDown>();
    assert_eq!(support::peek(PUPDR), 0b1110);
    assert_eq!(support::peek(MODER), 0);
    support::poke(IDR, 0b01);
    assert!(pin.input());
    support::poke(IDR, 0b10);
    assert!(!pin.input());
}

#[test]
fn analog_mode() {
    let pin = pin::<Configurable>();
    support::poke(PUPDR, 0b01);
    pin.set_analog();
    assert_eq!(support::peek(MODER), 0b11);
    assert_eq!(support::peek(PUPDR), 0);
    assert_eq!(addresses()[0], OD0_ALIAS);
}

#[test]
fn output_modes() {
    let pin = pin::<Configurable>();
    pin.set_open_drain_output::<Large>();
    assert_eq!(support::peek(MODER), 0b01);
    assert_eq!(support::peek(OTYPER), 1);
    assert_eq!(support::peek(OSPEEDR), 1);
    assert_eq!(support::peek(HDRV), 0);
    pin.set_alt_push_pull::<Max>();
    assert_eq!(support::peek(MODER), 0b10);
    assert_eq!(support::peek(OTYPER), 0);
    assert_eq!(support::peek(OSPEEDR), 1);
    assert_eq!(support::peek(HDRV), 1);
    pin.set_alt_open_drain::<Normal>();
    assert_eq!(support::peek(MODER), 0b10);
    assert_eq!(support::peek(OTYPER), 1);
    assert_eq!(support::peek(OSPEEDR), 0);
    assert_eq!(support::peek(HDRV), 0);
    pin.configure_output::<AltOpenDrain, Large>();
    assert_eq!(support::peek(OSPEEDR), 1);
}

#[test]
fn strength_keeps_mode() {
    let pin = pin::<Configurable>();
    pin.set_push_pull_output::<Normal>();
    support::take_journal();
    pin.set_strength::<Max>();
    assert_eq!(addresses(), [OSPEEDR, HDRV]);
    assert_eq!(support::peek(MODER), 0b01);
    assert_eq!(support::peek(OSPEEDR), 1);
    assert_eq!(support::peek(HDRV), 1);
    pin.set_strength::<Normal>();
    assert_eq!(support::peek(OSPEEDR), 0);
    assert_eq!(support::peek(HDRV), 0);
}

#[test]
fn transitions_are_idempotent() {
    let pin = pin::<Configurable>();
    pin.set_pull_up_input();
    let first = [MODER, OTYPER, OSPEEDR, PUPDR, ODR, HDRV].map(support::peek);
    let writes = support::take_journal();
    pin.set_pull_up_input();
    assert_eq!([MODER, OTYPER, OSPEEDR, PUPDR, ODR, HDRV].map(support::peek), first);
    assert_eq!(support::journal(), writes);
}

#[test]
fn runtime_configure() {
    let pin = pin::<Configurable>();
    pin.configure(PinMode::OpenDrainOutput, Strength::Large);
    assert_eq!(support::peek(MODER), 0b01);
    assert_eq!(support::peek(OTYPER), 1);
    assert_eq!(support::peek(OSPEEDR), 1);
    assert_eq!(support::peek(HDRV), 0);
    pin.configure(PinMode::PullUpInput, Strength::Max);
    assert_eq!(support::peek(MODER), 0b00);
    assert_eq!(support::peek(PUPDR), 0b01);
    assert_eq!(support::peek(HDRV), 0);
    pin.configure(PinMode::AnalogInput, Strength::default());
    assert_eq!(support::peek(MODER), 0b11);
    assert_eq!(support::peek(PUPDR), 0);
    pin.configure(PinMode::AltPushPullOutput, Strength::Max);
    assert_eq!(support::peek(MODER), 0b10);
    assert_eq!(support::peek(HDRV), 1);
}

#[test]
fn reset_to_floating_input() {
    let pin = pin::<Configurable>();
    pin.set_push_pull_output::<Max>();
    pin.set_high();
    pin.reset();
    assert_eq!(support::peek(ODR), 0);
    assert_eq!(support::peek(MODER), 0);
    assert_eq!(support::peek(PUPDR), 0);
}

#[test]
fn configurable_init() {
    let pin = pin::<Configurable>();
    support::poke(MODER, 0b11);
    pin.init();
    assert_eq!(support::peek(MODER), 0);
}

#[test]
fn fixed_output_init() {
    let pin = pin::<FixedOutput<PushPull, Max>>();
    pin.init();
    assert_eq!(addresses(), [OD0_ALIAS, MODER, OTYPER, OSPEEDR, HDRV]);
    assert_eq!(support::peek(MODER), 0b01);
    assert_eq!(support::peek(HDRV), 1);
    pin.set_high();
    assert!(pin.output_latch());
    pin.set_strength::<Normal>();
    assert_eq!(support::peek(HDRV), 0);
}

#[test]
fn fixed_open_drain_init() {
    let pin = pin::<FixedOutput<OpenDrain, Normal>>();
    pin.init();
    assert_eq!(support::peek(OTYPER), 1);
}

#[test]
fn fixed_input_init() {
    let pin = pin::<FixedInput<PullUp>>();
    pin.init();
    assert_eq!(support::peek(PUPDR), 0b01);
    pin.set_pull_down_input();
    assert_eq!(support::peek(PUPDR), 0b10);
    support::poke(IDR, 1);
    assert!(pin.input());
}

#[test]
fn fixed_analog_init() {
    let pin = pin::<FixedAnalog>();
    pin.init();
    assert_eq!(support::peek(MODER), 0b11);
}

#[test]
fn pins_drive_together() {
    support::reset();
    let pins: Pins<(Pin<Px0>, Pin<Px1>)> = unsafe { Pins::take() };
    pins.set_high();
    assert_eq!(support::journal(), [Write { address: ODR, value: 0b11, access: Access::Exclusive }]);
    support::take_journal();
    pins.set_low();
    assert_eq!(support::journal(), [Write { address: ODR, value: 0, access: Access::Exclusive }]);
    pins.toggle_output();
    assert_eq!(support::peek(ODR), 0b11);
    let (a, b) = pins.free();
    assert!(a.output_latch());
    assert!(b.output_latch());
}

#[test]
fn pins_reset() {
    support::reset();
    let (a, b) = unsafe { (Pin::<Px0>::take(), Pin::<Px1>::take()) };
    a.set_push_pull_output::<Normal>();
    b.set_alt_open_drain::<Large>();
    assert_eq!(support::peek(MODER), 0b1001);
    let pins = Pins::new((a, b));
    pins.reset();
    assert_eq!(support::peek(MODER), 0);
}

#[test]
fn debug_output() {
    let pin = pin::<FixedOutput<PushPull, Normal>>();
    let debug = format!("{pin:?}");
    assert!(debug.contains("Px0"), "{debug}");
    assert!(debug.contains("PushPullOutput"), "{debug}");
}

#[cfg(feature = "embedded-hal")]
#[test]
fn embedded_hal() {
    use embedded_hal::digital::{InputPin, OutputPin, StatefulOutputPin};

    let mut pin = pin::<Configurable>();
    pin.set_push_pull_output::<Normal>();
    OutputPin::set_high(&mut pin).unwrap();
    assert!(StatefulOutputPin::is_set_high(&mut pin).unwrap());
    OutputPin::set_low(&mut pin).unwrap();
    assert!(StatefulOutputPin::is_set_low(&mut pin).unwrap());
    support::poke(IDR, 1);
    assert!(InputPin::is_high(&mut pin).unwrap());
}
