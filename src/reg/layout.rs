/// Maximum number of distinct registers a single field-value set may span.
pub const LAYOUT_CAPACITY: usize = 8;

/// Bit pattern of a field-value set for one register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutEntry {
    /// Address of the register.
    pub address: usize,
    /// Union of the masks of the fields present in the set.
    pub clear: u64,
    /// Union of the shifted values.
    pub set: u64,
}

/// Compile-time description of a field-value set, grouped by register.
///
/// Built in `const` context by merging the layouts of individual
/// field-values. A merge that would assign the same bits twice, or would
/// exceed [`LAYOUT_CAPACITY`] registers, panics, which turns into a build
/// error for the offending set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    entries: [LayoutEntry; LAYOUT_CAPACITY],
    len: usize,
}

const VACANT: LayoutEntry = LayoutEntry { address: 0, clear: 0, set: 0 };

impl Layout {
    /// Layout of the empty set.
    pub const EMPTY: Self = Self { entries: [VACANT; LAYOUT_CAPACITY], len: 0 };

    /// Layout of a single field-value.
    pub const fn single(address: usize, clear: u64, set: u64) -> Self {
        Self::EMPTY.insert(LayoutEntry { address, clear, set })
    }

    /// Returns the union of two layouts.
    ///
    /// # Panics
    ///
    /// If the layouts assign overlapping bits of one register, or together span
    /// more than [`LAYOUT_CAPACITY`] registers.
    pub const fn merge(self, other: Self) -> Self {
        let mut result = self;
        let mut i = 0;
        while i < other.len {
            result = result.insert(other.entries[i]);
            i += 1;
        }
        result
    }

    const fn insert(self, entry: LayoutEntry) -> Self {
        let mut result = self;
        let mut i = 0;
        while i < result.len {
            if result.entries[i].address == entry.address {
                if result.entries[i].clear & entry.clear != 0 {
                    panic!("field-values assign overlapping bits of one register");
                }
                result.entries[i].clear |= entry.clear;
                result.entries[i].set |= entry.set;
                return result;
            }
            i += 1;
        }
        if result.len == LAYOUT_CAPACITY {
            panic!("field-value set spans too many registers");
        }
        result.entries[result.len] = entry;
        result.len += 1;
        result
    }

    /// Number of distinct registers.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for the layout of the empty set.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the index of the entry for the register at `address`.
    pub const fn position(&self, address: usize) -> Option<usize> {
        let mut i = 0;
        while i < self.len {
            if self.entries[i].address == address {
                return Some(i);
            }
            i += 1;
        }
        None
    }

    /// Returns `true` if the set assigns every bit of `mask` in the register at
    /// `address`, or doesn't touch that register at all.
    pub const fn covers(&self, address: usize, mask: u64) -> bool {
        match self.position(address) {
            Some(index) => self.entries[index].clear & mask == mask,
            None => true,
        }
    }

    /// Returns the entry at `index`.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    pub const fn entry(&self, index: usize) -> LayoutEntry {
        assert!(index < self.len, "layout index out of bounds");
        self.entries[index]
    }

    /// Returns the entries in the order the registers first appear in the set.
    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries[..self.len]
    }
}
