use loom::sync::atomic::{AtomicU32, AtomicUsize};
use mmreg::bits::Bits;
use mmreg::mem::Memory;
use std::collections::BTreeMap;
use std::sync::atomic::Ordering::SeqCst;

loom::lazy_static! {
    static ref WORD: AtomicU32 = AtomicU32::new(0);
    static ref FAILED_STORES: AtomicUsize = AtomicUsize::new(0);
}

/// A single 32-bit word shared by model threads, whatever the address.
///
/// The exclusive pair is a compare-and-swap against the loaded value, like
/// [`Mmio`](mmreg::mem::Mmio) on targets without LDREX/STREX.
pub struct LoomWord;

impl LoomWord {
    pub fn value() -> u32 {
        WORD.load(SeqCst)
    }

    pub fn failed_stores() -> usize {
        FAILED_STORES.load(SeqCst)
    }
}

#[allow(clippy::cast_possible_truncation)]
impl Memory for LoomWord {
    unsafe fn load<T: Bits>(_address: usize) -> T {
        T::from_u64(u64::from(WORD.load(SeqCst)))
    }

    unsafe fn store<T: Bits>(_address: usize, value: T) {
        WORD.store(value.to_u64() as u32, SeqCst);
    }

    unsafe fn load_exclusive<T: Bits>(address: usize) -> T {
        unsafe { Self::load(address) }
    }

    unsafe fn store_exclusive<T: Bits>(_address: usize, loaded: T, value: T) -> bool {
        let stored = WORD
            .compare_exchange(loaded.to_u64() as u32, value.to_u64() as u32, SeqCst, SeqCst)
            .is_ok();
        if !stored {
            FAILED_STORES.fetch_add(1, SeqCst);
        }
        stored
    }

    fn clear_exclusive() {}
}

macro_rules! statemap {
    ($($key:literal => [$($value:literal),*$(,)?]),*$(,)?) => {{
        #[allow(unused_mut)]
        let mut map = std::collections::BTreeMap::new();
        $(
            map.insert($key, {
                #[allow(unused_mut)]
                let mut inner = std::collections::BTreeMap::new();
                $(inner.insert($value, std::sync::atomic::AtomicUsize::new(0));)*
                inner
            });
        )*
        let map: &'static _ = Box::leak(Box::new(map));
        map
    }};
}

pub type StateMap = BTreeMap<usize, BTreeMap<usize, std::sync::atomic::AtomicUsize>>;

/// Counts an observed `key => value` outcome. Panics on an outcome missing
/// from the map.
#[track_caller]
pub fn statemap_put(statemap: &'static StateMap, key: usize, value: usize) {
    match statemap.get(&key).and_then(|map| map.get(&value)) {
        Some(counter) => {
            counter.fetch_add(1, SeqCst);
        }
        None => panic!("unexpected outcome {key:#x} => {value}"),
    }
}

/// Panics if some outcome of the map was never observed.
#[track_caller]
pub fn statemap_check_exhaustive(statemap: &'static StateMap) {
    for (key, state) in statemap {
        for (value, counter) in state {
            assert!(counter.load(SeqCst) != 0, "{key:#x} => {value} not observed");
        }
    }
}
