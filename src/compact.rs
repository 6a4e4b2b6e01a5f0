//! Compact array that stores all values with the bit width of the largest one.

use std::io;

use binout::{AsIs, Serializer};
use bitm::{bits_to_store, ceiling_div, BitAccess, BitVec};
use dyn_size_of::GetSize;

/// Array of unsigned integers, each stored with the number of bits required
/// to store the largest of them (but at least one bit).
///
/// Provides constant-time random access; a value may straddle the boundary of
/// two underlying 64-bit words.
#[derive(Clone)]
pub struct Compact {
    items: Box<[u64]>,
    item_size: u8,
}

impl Compact {
    /// Constructs a compact array holding a copy of the given `values`.
    pub fn new(values: &[u64]) -> Self {
        let item_size = bits_to_store(values.iter().copied().max().unwrap_or(0)).max(1);
        let mut items = Box::<[u64]>::with_zeroed_bits(values.len() * item_size as usize);
        for (index, value) in values.iter().copied().enumerate() {
            items.init_fragment(index, value, item_size);
        }
        Self { items, item_size }
    }

    /// Returns the `index`-th stored value.
    #[inline(always)] pub fn get(&self, index: usize) -> u64 {
        self.items.get_fragment(index, self.item_size)
    }

    /// Returns the number of bits used to store each value.
    #[inline(always)] pub fn item_size(&self) -> u8 { self.item_size }

    /// Returns the number of bits occupied by the whole array.
    #[inline] pub fn num_bits(&self) -> u64 { 8 * self.size_bytes() as u64 }

    /// Returns number of bytes which [`Self::write`] will write.
    pub fn write_bytes(&self) -> usize {
        AsIs::size(self.item_size) + AsIs::array_content_size(&self.items)
    }

    /// Writes `self` to the `output`.
    pub fn write(&self, output: &mut dyn io::Write) -> io::Result<()> {
        AsIs::write(output, self.item_size)?;
        AsIs::write_all(output, self.items.iter())
    }

    /// Reads from the `input` a compact array of `number_of_values` values.
    pub fn read(input: &mut dyn io::Read, number_of_values: usize) -> io::Result<Self> {
        let item_size: u8 = AsIs::read(input)?;
        let items = AsIs::read_n(input, ceiling_div(number_of_values * item_size as usize, 64))?;
        Ok(Self { items, item_size })
    }
}

impl GetSize for Compact {
    fn size_bytes_dyn(&self) -> usize { self.items.size_bytes_dyn() }
    fn size_bytes_content_dyn(&self) -> usize { self.items.size_bytes_content_dyn() }
    const USES_DYN_MEM: bool = true;
}
