//! Mapping of key hashes to buckets with deliberately unbalanced sizes.

use std::io;

use binout::{AsIs, Serializer};
use dyn_size_of::GetSize;

use crate::utils::FastMod64;

/// Maps 64-bit key hashes to bucket indices in `[0, num_buckets)`,
/// concentrating a configurable fraction of the hash space (and thus of the
/// keys) into a dense prefix of the buckets.
///
/// Hashes below the threshold go to the dense region `[0, first_len)`,
/// the rest to the sparse region `[first_len, num_buckets)`. With the default
/// fractions about 60% of the keys land in 30% of the buckets; those buckets
/// are large, get processed first during the displacement search, and are
/// thereby placed while free slots are still plentiful.
#[derive(Clone, Copy)]
pub struct UnbalancedBucketer {
    num_buckets: usize,
    seed: u64,
    /// Hashes below this value are routed to the dense region.
    hash_threshold: u64,
    first: FastMod64,
    second: FastMod64,
    second_offset: u64,
}

impl UnbalancedBucketer {
    /// Constructs a bucketer over `num_buckets` buckets (which must be nonzero),
    /// hashing with `seed` and routing `perc_keys_first_part` of the hash space
    /// to the first `perc_buckets_first_part` of the buckets.
    ///
    /// Percentages must have been validated to lie in `[0, 1]` by the caller.
    pub fn new(num_buckets: usize, seed: u64, perc_keys_first_part: f64, perc_buckets_first_part: f64) -> Self {
        debug_assert!(num_buckets > 0);
        let hash_threshold = (u64::MAX as f64 * perc_keys_first_part).round() as u64;
        let first_len = ((num_buckets as f64 * perc_buckets_first_part).round() as usize).min(num_buckets);
        let second_len = num_buckets - first_len;
        if first_len == 0 || second_len == 0 {
            // degenerate split: collapse both regions into one over all buckets,
            // so neither modulus is zero and both branches agree
            let whole = FastMod64::new(num_buckets as u64);
            Self { num_buckets, seed, hash_threshold, first: whole, second: whole, second_offset: 0 }
        } else {
            Self {
                num_buckets, seed, hash_threshold,
                first: FastMod64::new(first_len as u64),
                second: FastMod64::new(second_len as u64),
                second_offset: first_len as u64,
            }
        }
    }

    /// Returns the bucket of the key with the given `hash`,
    /// which must have been obtained with [`Self::seed`].
    #[inline(always)] pub fn bucket_of_hash(&self, hash: u64) -> usize {
        (if hash < self.hash_threshold {
            self.first.rem(hash)
        } else {
            self.second_offset + self.second.rem(hash)
        }) as usize
    }

    /// Returns the seed that key hashes fed to [`Self::bucket_of_hash`] must use.
    #[inline(always)] pub fn seed(&self) -> u64 { self.seed }

    /// Returns the total number of buckets.
    #[inline(always)] pub fn num_buckets(&self) -> usize { self.num_buckets }

    /// Returns the number of buckets in the dense region
    /// (0 when the split is degenerate and a single region covers all buckets).
    #[inline] pub fn first_part_len(&self) -> usize {
        if self.second_offset == 0 { 0 } else { self.first.divisor() as usize }
    }

    /// Returns number of bytes which [`Self::write`] will write.
    pub(crate) fn write_bytes(&self) -> usize {
        AsIs::size(self.num_buckets as u64) + AsIs::size(self.seed) + AsIs::size(self.hash_threshold)
            + AsIs::size(self.first.divisor()) + AsIs::size(self.second.divisor()) + AsIs::size(self.second_offset)
    }

    /// Writes `self` to the `output`. The fast-modulo magics are not written,
    /// as they are recomputed from the divisors at read time.
    pub(crate) fn write(&self, output: &mut dyn io::Write) -> io::Result<()> {
        AsIs::write(output, self.num_buckets as u64)?;
        AsIs::write(output, self.seed)?;
        AsIs::write(output, self.hash_threshold)?;
        AsIs::write(output, self.first.divisor())?;
        AsIs::write(output, self.second.divisor())?;
        AsIs::write(output, self.second_offset)
    }

    /// Reads `Self` from the `input`.
    pub(crate) fn read(input: &mut dyn io::Read) -> io::Result<Self> {
        let num_buckets: u64 = AsIs::read(input)?;
        let seed = AsIs::read(input)?;
        let hash_threshold = AsIs::read(input)?;
        let first_divisor: u64 = AsIs::read(input)?;
        let second_divisor: u64 = AsIs::read(input)?;
        let second_offset = AsIs::read(input)?;
        if num_buckets == 0 || first_divisor == 0 || second_divisor == 0 {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "bucketer sizes must be nonzero"));
        }
        Ok(Self {
            num_buckets: num_buckets as usize, seed, hash_threshold,
            first: FastMod64::new(first_divisor),
            second: FastMod64::new(second_divisor),
            second_offset,
        })
    }
}

impl GetSize for UnbalancedBucketer {}
