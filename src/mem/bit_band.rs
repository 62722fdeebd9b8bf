//! Bit-banding aliases.

/// Bit-band region of a Cortex-M3/M4 peripheral space: the first megabyte
/// above `0x4000_0000` is aliased at `0x4200_0000`.
pub const PERIPHERAL_BIT_BAND: BitBand = BitBand::new(0x4000_0000, 0x4200_0000);

/// A memory region whose bits are mapped one-to-one to words of an alias
/// region.
///
/// Writing `0` or `1` to an alias word clears or sets the corresponding bit
/// in a single bus transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitBand {
    /// Start of the bit-band region.
    pub peripheral_base: usize,
    /// Start of the alias region.
    pub alias_base: usize,
    /// Size of the bit-band region in bytes.
    pub size: usize,
}

impl BitBand {
    /// Size of a standard bit-band region.
    pub const DEFAULT_SIZE: usize = 0x10_0000;

    /// Creates a region descriptor of the standard one megabyte size.
    pub const fn new(peripheral_base: usize, alias_base: usize) -> Self {
        Self { peripheral_base, alias_base, size: Self::DEFAULT_SIZE }
    }

    /// Returns `true` if `address` lies inside the bit-band region.
    pub const fn contains(&self, address: usize) -> bool {
        address >= self.peripheral_base && address - self.peripheral_base < self.size
    }

    /// Returns the alias word address of bit `bit` of the word at `address`, or
    /// `None` if the address is outside the region.
    pub const fn alias(&self, address: usize, bit: u32) -> Option<usize> {
        if self.contains(address) {
            Some(self.alias_base + 32 * (address - self.peripheral_base) + 4 * bit as usize)
        } else {
            None
        }
    }
}
