#![allow(dead_code)]

use mmreg::bits::Bits;
use mmreg::mem::{Memory, PERIPHERAL_BIT_BAND};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Simulated memory of the current test thread.
pub struct Sim;

/// How a word was written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Store,
    Exclusive,
    BitBand,
}

/// Journal entry. For bit-band writes `address` is the alias word and `value`
/// is the bit written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Write {
    pub address: usize,
    pub value: u64,
    pub access: Access,
}

#[derive(Default)]
struct State {
    words: BTreeMap<usize, u64>,
    journal: Vec<Write>,
    reservation: Option<usize>,
    failures: usize,
    clears: usize,
    interrupt: Option<Box<dyn FnOnce()>>,
}

thread_local! {
    static STATE: RefCell<State> = RefCell::new(State::default());
}

/// Resets the simulated memory to all zeros and empties the journal.
pub fn reset() {
    STATE.with(|state| *state.borrow_mut() = State::default());
}

/// Returns the word at `address` without recording anything.
pub fn peek(address: usize) -> u64 {
    STATE.with(|state| state.borrow().words.get(&address).copied().unwrap_or(0))
}

/// Sets the word at `address` without recording anything.
pub fn poke(address: usize, value: u64) {
    STATE.with(|state| {
        state.borrow_mut().words.insert(address, value);
    });
}

/// Returns the writes recorded since the last [`reset`] or [`take_journal`].
pub fn journal() -> Vec<Write> {
    STATE.with(|state| state.borrow().journal.clone())
}

/// Returns and clears the journal.
pub fn take_journal() -> Vec<Write> {
    STATE.with(|state| std::mem::take(&mut state.borrow_mut().journal))
}

/// Makes the next `count` exclusive stores fail as if contended.
pub fn fail_exclusive_stores(count: usize) {
    STATE.with(|state| state.borrow_mut().failures = count);
}

/// Number of reservations dropped with `clear_exclusive`.
pub fn clear_exclusive_count() -> usize {
    STATE.with(|state| state.borrow().clears)
}

/// Runs `handler` right after the next load, like an interrupt preempting the
/// code between its load and store. The handler breaks any reservation.
pub fn interrupt_after_next_load(handler: impl FnOnce() + 'static) {
    STATE.with(|state| state.borrow_mut().interrupt = Some(Box::new(handler)));
}

fn alias_target(address: usize) -> Option<(usize, u32)> {
    let band = PERIPHERAL_BIT_BAND;
    let offset = address.checked_sub(band.alias_base)?;
    if offset >= band.size * 32 {
        return None;
    }
    let byte = offset / 32;
    let bit = (byte & 3) as u32 * 8 + (offset % 32 / 4) as u32;
    Some((band.peripheral_base + (byte & !3), bit))
}

fn read(address: usize) -> u64 {
    match alias_target(address) {
        Some((word, bit)) => peek(word) >> bit & 1,
        None => peek(address),
    }
}

fn record(word: usize, address: usize, value: u64, access: Access) {
    STATE.with(|state| {
        let mut state = state.borrow_mut();
        if state.reservation == Some(word) {
            state.reservation = None;
        }
        state.journal.push(Write { address, value, access });
    });
}

fn preempt() {
    let handler = STATE.with(|state| state.borrow_mut().interrupt.take());
    if let Some(handler) = handler {
        handler();
        STATE.with(|state| state.borrow_mut().reservation = None);
    }
}

impl Memory for Sim {
    unsafe fn load<T: Bits>(address: usize) -> T {
        let value = T::from_u64(read(address));
        preempt();
        value
    }

    unsafe fn store<T: Bits>(address: usize, value: T) {
        let value = value.to_u64();
        match alias_target(address) {
            Some((word, bit)) => {
                let old = peek(word);
                poke(word, if value & 1 == 0 { old & !(1 << bit) } else { old | 1 << bit });
                record(word, address, value & 1, Access::BitBand);
            }
            None => {
                poke(address, value);
                record(address, address, value, Access::Store);
            }
        }
    }

    unsafe fn load_exclusive<T: Bits>(address: usize) -> T {
        let value = T::from_u64(read(address));
        STATE.with(|state| state.borrow_mut().reservation = Some(address));
        preempt();
        value
    }

    unsafe fn store_exclusive<T: Bits>(address: usize, _loaded: T, value: T) -> bool {
        let reserved = STATE.with(|state| {
            let mut state = state.borrow_mut();
            if state.failures > 0 {
                state.failures -= 1;
                state.reservation = None;
                false
            } else {
                state.reservation == Some(address)
            }
        });
        if reserved {
            poke(address, value.to_u64());
            record(address, address, value.to_u64(), Access::Exclusive);
        }
        reserved
    }

    fn clear_exclusive() {
        STATE.with(|state| {
            let mut state = state.borrow_mut();
            state.reservation = None;
            state.clears += 1;
        });
    }
}
