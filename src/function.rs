//! The FCH minimal perfect hash function and its builder.

use std::fmt;
use std::io;

use binout::{AsIs, Serializer};
use dyn_size_of::GetSize;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::bucketer::UnbalancedBucketer;
use crate::buckets::Buckets;
use crate::compact::Compact;
use crate::seedable_hash::{DefaultSeededHash, KeyBytes, SeededHash};
use crate::stats::BuildStatsCollector;
use crate::utils::FastMod64;

/// Reasons why constructing [`Function`] can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// `bits_per_key` was lower than [`Builder::MIN_BITS_PER_KEY`].
    BitsPerKeyTooLow,
    /// `perc_keys_first_part` was outside the `[0, 1]` interval.
    KeysPercentOutOfRange,
    /// `perc_buckets_first_part` was outside the `[0, 1]` interval.
    BucketsPercentOutOfRange,
    /// The input key collection was empty.
    NoKeys,
    /// Every candidate seed drawn within the reseed budget caused a collision
    /// inside some bucket. Certain if the input contains duplicate keys.
    InBucketCollisions,
    /// Some bucket could not be placed in the free slots in either attempt.
    ShiftNotFound,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BuildError::BitsPerKeyTooLow => "`bits_per_key` must be greater or equal to 1.45",
            BuildError::KeysPercentOutOfRange => "`perc_keys_first_part` must be between 0 and 1, boundaries included",
            BuildError::BucketsPercentOutOfRange => "`perc_buckets_first_part` must be between 0 and 1, boundaries included",
            BuildError::NoKeys => "at least one key is required",
            BuildError::InBucketCollisions => "the seed causes in-bucket collisions",
            BuildError::ShiftNotFound => "unable to find a satisfying shift",
        })
    }
}

impl std::error::Error for BuildError {}

/// The number of displacement attempts per bucket. Coupled to the single
/// attempt bit packed into the low bit of each stored shift.
const MAX_BUCKET_ATTEMPTS: u64 = 2;

/// Builds [`Function`] for a given key collection.
///
/// Configuration is validated when the builder is constructed or modified;
/// a builder in hand always holds admissible parameters and can be reused
/// for many [`build`](Builder::build) calls.
#[derive(Clone)]
pub struct Builder<S = DefaultSeededHash> {
    bits_per_key: f64,
    perc_keys_first_part: f64,
    perc_buckets_first_part: f64,
    num_restarts: u32,
    num_search_restarts: u32,
    num_search_reseeds: u32,
    hash_builder: S,
}

impl Builder {
    /// Returns a builder that will construct functions of about `bits_per_key`
    /// bits per key (at least [`Self::MIN_BITS_PER_KEY`]), using the default
    /// hash family and the default bucketing and retry parameters.
    pub fn new(bits_per_key: f64) -> Result<Self, BuildError> {
        Self::with_hash(bits_per_key, Default::default())
    }
}

impl<S> Builder<S> {
    /// The lowest admissible value of `bits_per_key`.
    pub const MIN_BITS_PER_KEY: f64 = 1.45;

    /// Like [`Builder::new`], but hashes with the given [`SeededHash`] family.
    pub fn with_hash(bits_per_key: f64, hash_builder: S) -> Result<Self, BuildError> {
        if !(bits_per_key >= Self::MIN_BITS_PER_KEY) { return Err(BuildError::BitsPerKeyTooLow); }
        Ok(Self {
            bits_per_key,
            perc_keys_first_part: 0.6,
            perc_buckets_first_part: 0.3,
            num_restarts: 5,
            num_search_restarts: 10,
            num_search_reseeds: 1000,
            hash_builder,
        })
    }

    /// Returns `self` routing `perc_keys_first_part` of the hash space to the
    /// first `perc_buckets_first_part` of the buckets; both must lie in `[0, 1]`.
    pub fn percents(mut self, perc_keys_first_part: f64, perc_buckets_first_part: f64) -> Result<Self, BuildError> {
        if !(0.0..=1.0).contains(&perc_keys_first_part) { return Err(BuildError::KeysPercentOutOfRange); }
        if !(0.0..=1.0).contains(&perc_buckets_first_part) { return Err(BuildError::BucketsPercentOutOfRange); }
        self.perc_keys_first_part = perc_keys_first_part;
        self.perc_buckets_first_part = perc_buckets_first_part;
        Ok(self)
    }

    /// Returns `self` with the given retry budgets: whole-pipeline restarts,
    /// search-phase restarts per pipeline attempt, and global-seed redraws
    /// per search attempt.
    pub fn restarts(mut self, num_restarts: u32, num_search_restarts: u32, num_search_reseeds: u32) -> Self {
        self.num_restarts = num_restarts;
        self.num_search_restarts = num_search_restarts;
        self.num_search_reseeds = num_search_reseeds;
        self
    }

    /// Returns a human-readable name of the method, including its parameters.
    pub fn name(&self) -> String {
        format!("FCH(bits_per_key={}, perc_keys_first_part={}, perc_buckets_first_part={})",
            self.bits_per_key, self.perc_keys_first_part, self.perc_buckets_first_part)
    }
}

impl<S: SeededHash + Clone> Builder<S> {
    /// Builds [`Function`] for the given `keys` (which must be distinct),
    /// drawing all randomness from `seed`.
    pub fn build<K: KeyBytes>(&self, keys: &[K], seed: u64) -> Result<Function<S>, BuildError> {
        self.build_with_stats(keys, seed, &mut ())
    }

    /// Builds [`Function`] for the given `keys` (which must be distinct),
    /// drawing all randomness from `seed` and reporting events to `stats`.
    pub fn build_with_stats<K, BS>(&self, keys: &[K], seed: u64, stats: &mut BS) -> Result<Function<S>, BuildError>
        where K: KeyBytes, BS: BuildStatsCollector
    {
        if keys.is_empty() { return Err(BuildError::NoKeys); }
        let num_keys = FastMod64::new(keys.len() as u64);
        let mut generator = ChaCha8Rng::seed_from_u64(seed);

        let num_buckets = (((self.bits_per_key * keys.len() as f64)
            / ((keys.len() as f64).log2() + 1.0).ceil()) as usize)
            .clamp(1, keys.len());

        let mut last_error = BuildError::ShiftNotFound;  // always overwritten before being returned
        for _fit_restart in 0..=self.num_restarts {
            // mapping
            let bucketer = UnbalancedBucketer::new(num_buckets, generator.gen(),
                self.perc_keys_first_part, self.perc_buckets_first_part);
            let buckets = Buckets::new(keys, &bucketer, &self.hash_builder);
            stats.bucketed(buckets.num_keys(), buckets.num_buckets(), buckets.size_biggest_bucket());

            // ordering
            let buckets_order = buckets.order_by_size();

            // searching
            for _search_restart in 0..=self.num_search_restarts {
                let seed = match self.seed_with_no_inbucket_collisions(keys, &buckets, &num_keys, &mut generator, stats) {
                    Ok(seed) => seed,
                    Err(error) => {
                        // reseed exhaustion is only recoverable by a fresh bucketer
                        last_error = error;
                        stats.retry(error);
                        break;
                    }
                };
                match self.search(keys, &buckets, &buckets_order, seed, &num_keys) {
                    Ok(shifts) => {
                        // encoding
                        let shifts = Compact::new(&shifts);
                        stats.end(shifts.item_size());
                        return Ok(Function {
                            hash_builder: self.hash_builder.clone(),
                            num_keys, seed, bucketer, shifts,
                        });
                    }
                    Err(error) => {
                        last_error = error;
                        stats.retry(error);
                    }
                }
            }
        }
        Err(last_error)
    }

    /// Returns a seed that does not cause collisions among the keys of any
    /// bucket, drawing up to `num_search_reseeds + 1` candidates from `generator`.
    fn seed_with_no_inbucket_collisions<K, BS>(&self, keys: &[K], buckets: &Buckets,
        num_keys: &FastMod64, generator: &mut ChaCha8Rng, stats: &mut BS) -> Result<u64, BuildError>
        where K: KeyBytes, BS: BuildStatsCollector
    {
        let mut pattern = Vec::with_capacity(buckets.size_biggest_bucket());
        for reseed in 0..=self.num_search_reseeds {
            let seed = generator.gen::<u64>();
            let mut collision = false;
            for bucket in 0..buckets.num_buckets() {
                // the pattern does not depend on the shift
                pattern.clear();
                pattern.extend(buckets.key_indices(bucket).iter()
                    .map(|&key_index| num_keys.rem(self.hash_builder.hash_key(&keys[key_index], seed))));
                pattern.sort_unstable();
                if pattern.windows(2).any(|w| w[0] == w[1]) {
                    collision = true;
                    break;
                }
            }
            if !collision {
                stats.seed_accepted(reseed + 1);
                return Ok(seed);
            }
        }
        Err(BuildError::InBucketCollisions)
    }

    /// Chooses a displacement (and one of two attempt seeds) for every
    /// non-empty bucket, in the given order, so that all keys land in
    /// pairwise-distinct slots of `[0, num_keys)`. Returns the packed
    /// `(shift << 1) | attempt` values indexed by bucket.
    fn search<K: KeyBytes>(&self, keys: &[K], buckets: &Buckets, buckets_order: &[usize],
        seed: u64, num_keys: &FastMod64) -> Result<Vec<u64>, BuildError>
    {
        let n = num_keys.divisor();

        // entries of buckets skipped as empty remain zero and are never read back
        let mut shifts = vec![0u64; buckets.num_buckets()];

        // a random permutation of [0, n) and its inverse; the still-free slots
        // are exactly random_table[filled_count..], so map_table[pos] >= filled_count
        // tests slot freedom in constant time
        let mut random_table: Vec<u64> = (0..n).collect();
        random_table.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        let mut map_table = vec![0u64; n as usize];
        for (i, &pos) in random_table.iter().enumerate() { map_table[pos as usize] = i as u64; }
        let mut filled_count = 0u64;

        let mut pattern = Vec::with_capacity(buckets.size_biggest_bucket());

        for &bucket in buckets_order {
            if buckets.size(bucket) == 0 { continue; }

            let mut shift = 0;
            let mut shift_found = false;
            let mut bucket_attempt = 0;
            while bucket_attempt < MAX_BUCKET_ATTEMPTS {
                let attempt_seed = seed.wrapping_add(bucket_attempt);

                // the pattern does not depend on the shift
                pattern.clear();
                pattern.extend(buckets.key_indices(bucket).iter()
                    .map(|&key_index| num_keys.rem(self.hash_builder.hash_key(&keys[key_index], attempt_seed))));

                // a duplicated pattern cannot be satisfied by any shift; under
                // attempt 0 duplicates were already excluded by the seed choice
                if bucket_attempt > 0 {
                    pattern.sort_unstable();
                    if pattern.windows(2).any(|w| w[0] == w[1]) {
                        bucket_attempt += 1;
                        continue;
                    }
                }

                // consider only the shifts that put the first pattern element
                // on one of the still-free slots
                for free in &random_table[filled_count as usize .. n as usize] {
                    shift = num_keys.rem(n - pattern[0] + free);

                    shift_found = pattern.iter()
                        .all(|&pos| map_table[num_keys.rem(pos + shift) as usize] >= filled_count);

                    if shift_found { break; }
                }

                if shift_found {
                    // claim the slots by swapping them into the filled prefix of random_table
                    for &pos in &pattern {
                        let pos = num_keys.rem(pos + shift);
                        let y = map_table[pos as usize];
                        let ry = random_table[y as usize];
                        random_table[y as usize] = random_table[filled_count as usize];
                        random_table[filled_count as usize] = ry;
                        map_table[random_table[y as usize] as usize] = y;
                        map_table[ry as usize] = filled_count;
                        filled_count += 1;
                    }
                    break;
                }
                bucket_attempt += 1;
            }

            if !shift_found { return Err(BuildError::ShiftNotFound); }
            shifts[bucket] = (shift << 1) | bucket_attempt;
        }

        Ok(shifts)
    }
}

/// Minimal perfect hash function of Fox, Chen and Heath (FCH) with unbalanced buckets.
///
/// See:
/// - E. A. Fox, Q. F. Chen, L. S. Heath, *A Faster Algorithm for Constructing
///   Minimal Perfect Hash Functions*, SIGIR 1992.
///
/// Once built (with [`Builder`]) the function is immutable and can be shared
/// freely between threads.
#[derive(Clone)]
pub struct Function<S = DefaultSeededHash> {
    hash_builder: S,
    /// number of keys, with the magic for modulo reduction
    num_keys: FastMod64,
    /// the global seed accepted by the displacement search
    seed: u64,
    bucketer: UnbalancedBucketer,
    /// per bucket: the displacement shifted left by one, packed with the attempt bit
    shifts: Compact,
}

impl<S> GetSize for Function<S> {
    fn size_bytes_dyn(&self) -> usize { self.shifts.size_bytes_dyn() }
    fn size_bytes_content_dyn(&self) -> usize { self.shifts.size_bytes_content_dyn() }
    const USES_DYN_MEM: bool = true;
}

impl<S: SeededHash> Function<S> {
    /// Gets the value associated with the given `key`.
    ///
    /// The returned value is in the range from `0` (inclusive) to the number
    /// of keys of the input collection (exclusive). If the `key` was not in
    /// the input collection given during construction, an undetermined value
    /// from that range is returned; the function cannot detect this case.
    #[inline] pub fn get<K: KeyBytes + ?Sized>(&self, key: &K) -> u64 {
        let bucket = self.bucketer.bucket_of_hash(self.hash_builder.hash_key(key, self.bucketer.seed()));
        let packed = self.shifts.get(bucket);
        let seed = self.seed.wrapping_add(packed & 1);
        self.num_keys.rem(self.hash_builder.hash_key(key, seed).wrapping_add(packed >> 1))
    }
}

impl<S> Function<S> {
    /// Returns the number of keys of the input collection given during construction.
    #[inline] pub fn len(&self) -> usize { self.num_keys.divisor() as usize }

    /// Returns the total number of bits occupied by `self`.
    #[inline] pub fn num_bits(&self) -> u64 { 8 * self.size_bytes() as u64 }

    /// Returns number of bytes which [`Self::write`] will write.
    pub fn write_bytes(&self) -> usize {
        AsIs::size(self.num_keys.divisor()) + AsIs::size(self.seed)
            + self.bucketer.write_bytes() + self.shifts.write_bytes()
    }

    /// Writes `self` to the `output`.
    pub fn write(&self, output: &mut dyn io::Write) -> io::Result<()> {
        AsIs::write(output, self.num_keys.divisor())?;
        AsIs::write(output, self.seed)?;
        self.bucketer.write(output)?;
        self.shifts.write(output)
    }

    /// Reads `Self` from the `input`.
    /// The hash family must be the same as the one used to build the written function.
    pub fn read_with_hasher(input: &mut dyn io::Read, hasher: S) -> io::Result<Self> {
        let num_keys: u64 = AsIs::read(input)?;
        if num_keys == 0 {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "the number of keys must be nonzero"));
        }
        let seed = AsIs::read(input)?;
        let bucketer = UnbalancedBucketer::read(input)?;
        let shifts = Compact::read(input, bucketer.num_buckets())?;
        Ok(Self { hash_builder: hasher, num_keys: FastMod64::new(num_keys), seed, bucketer, shifts })
    }
}

impl Function {
    /// Reads `Self` from the `input`.
    /// Only functions built with the default hash family can be read by this method.
    pub fn read(input: &mut dyn io::Read) -> io::Result<Self> {
        Self::read_with_hasher(input, Default::default())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::seedable_hash::Wy;
    use bitm::{BitAccess, BitVec};

    /// Infinite iterator over random u64 values generated by the xorshift64 algorithm.
    ///
    /// It must be initialized by a non-zero seed, never generates zero, and has period 2^64-1.
    pub(crate) struct XorShift64(pub u64);

    impl Iterator for XorShift64 {
        type Item = u64;

        fn next(&mut self) -> Option<Self::Item> {
            self.0 ^= self.0 << 13;
            self.0 ^= self.0 >> 7;
            self.0 ^= self.0 << 17;
            Some(self.0)
        }
    }

    /// Checks that `f` maps the (distinct) `keys` onto `[0, keys.len())` exactly.
    pub(crate) fn test_mphf<K: KeyBytes, S: SeededHash>(keys: &[K], f: &Function<S>) {
        assert_eq!(f.len(), keys.len());
        let mut seen = Box::<[u64]>::with_zeroed_bits(keys.len());
        for (i, key) in keys.iter().enumerate() {
            let index = f.get(key) as usize;
            assert!(index < keys.len(), "the value {} assigned to key #{} is not less than {}", index, i, keys.len());
            assert!(!seen.get_bit(index), "the value {} is assigned to key #{} and some earlier key", index, i);
            seen.set_bit(index);
        }
    }

    #[test]
    fn invalid_configurations() {
        assert_eq!(Builder::new(1.0).err(), Some(BuildError::BitsPerKeyTooLow));
        assert_eq!(Builder::new(1.44).err(), Some(BuildError::BitsPerKeyTooLow));
        assert_eq!(Builder::new(f64::NAN).err(), Some(BuildError::BitsPerKeyTooLow));
        assert!(Builder::new(1.45).is_ok());
        assert_eq!(Builder::new(3.0).unwrap().percents(-0.1, 0.3).err(), Some(BuildError::KeysPercentOutOfRange));
        assert_eq!(Builder::new(3.0).unwrap().percents(0.6, 1.5).err(), Some(BuildError::BucketsPercentOutOfRange));
        assert!(Builder::new(3.0).unwrap().percents(0.0, 1.0).is_ok());
    }

    #[test]
    fn name_shows_parameters() {
        assert_eq!(Builder::new(3.0).unwrap().name(),
            "FCH(bits_per_key=3, perc_keys_first_part=0.6, perc_buckets_first_part=0.3)");
    }

    #[test]
    fn empty_input() {
        assert_eq!(Builder::new(3.0).unwrap().build(&[] as &[u64], 0).err(), Some(BuildError::NoKeys));
    }

    #[test]
    fn single_key() {
        for bits_per_key in [1.45, 3.0, 8.0] {
            let f = Builder::new(bits_per_key).unwrap().build(&[12345u64], 0).unwrap();
            assert_eq!(f.get(&12345u64), 0);
            assert_eq!(f.len(), 1);
            assert!(f.num_bits() > 0);
        }
    }

    #[test]
    fn small_inputs() {
        for num_keys in [2, 3, 5, 10, 50] {
            let keys: Vec<u64> = XorShift64(789).take(num_keys).collect();
            let f = Builder::new(3.0).unwrap().build(&keys, 0).unwrap();
            test_mphf(&keys, &f);
        }
    }

    #[test]
    fn thousand_u64_keys_deterministic() {
        let keys: Vec<u64> = XorShift64(1234).take(1000).collect();
        let builder = Builder::new(3.0).unwrap();
        let f = builder.build(&keys, 0).unwrap();
        test_mphf(&keys, &f);

        let g = builder.build(&keys, 0).unwrap();
        assert_eq!(f.num_bits(), g.num_bits());
        for key in &keys { assert_eq!(f.get(key), g.get(key)); }
        let (mut fb, mut gb) = (Vec::new(), Vec::new());
        f.write(&mut fb).unwrap();
        g.write(&mut gb).unwrap();
        assert_eq!(fb, gb);
    }

    #[test]
    fn bits_per_key_range() {
        let keys: Vec<u64> = XorShift64(42).take(10_000).collect();
        for bits_per_key in [3.0, 4.0, 5.0, 6.0, 7.0] {
            let f = Builder::new(bits_per_key).unwrap().build(&keys, 42).unwrap();
            test_mphf(&keys, &f);
            let observed = f.num_bits() as f64 / keys.len() as f64;
            assert!((observed - bits_per_key).abs() <= 0.5,
                "{} bits/key requested, {} observed", bits_per_key, observed);
        }
    }

    #[test]
    fn hundred_thousand_u64_keys() {
        let keys: Vec<u64> = XorShift64(42).take(100_000).collect();
        for bits_per_key in [3.0, 7.0] {
            let f = Builder::new(bits_per_key).unwrap().build(&keys, 42).unwrap();
            test_mphf(&keys, &f);
            let observed = f.num_bits() as f64 / keys.len() as f64;
            assert!((observed - bits_per_key).abs() <= 0.5,
                "{} bits/key requested, {} observed", bits_per_key, observed);
        }
    }

    #[test]
    fn packed_shifts_in_range() {
        let keys: Vec<u64> = XorShift64(5).take(2000).collect();
        let f = Builder::new(4.0).unwrap().build(&keys, 3).unwrap();
        for bucket in 0..f.bucketer.num_buckets() {
            assert!(f.shifts.get(bucket) >> 1 < keys.len() as u64);
        }
    }

    #[test]
    fn duplicate_keys_fail() {
        // duplicates collide in every bucket pattern, under every seed
        let keys = [1u64, 2, 3, 1];
        let result = Builder::new(3.0).unwrap().restarts(1, 1, 10).build(&keys, 0);
        assert_eq!(result.err(), Some(BuildError::InBucketCollisions));
    }

    #[test]
    fn exhausted_budgets_recover_or_fail() {
        // a single attempt at everything either succeeds (and then the result
        // must be minimal) or reports the failure; never a non-minimal function
        let keys: Vec<u64> = XorShift64(77).take(3000).collect();
        for seed in 0..10 {
            match Builder::new(2.0).unwrap().restarts(0, 0, 0).build(&keys, seed) {
                Ok(f) => test_mphf(&keys, &f),
                Err(e) => assert!(e == BuildError::InBucketCollisions || e == BuildError::ShiftNotFound),
            }
        }
    }

    /// Generates `how_many` distinct lowercase words of 3 to 32 letters.
    fn random_words(how_many: usize, seed: u64) -> Vec<String> {
        let mut gen = XorShift64(seed);
        let mut words = Vec::with_capacity(2 * how_many);
        while words.len() < 2 * how_many {
            let v = gen.next().unwrap();
            let len = 3 + (v % 30) as usize;
            words.push((0..len).map(|_| b'a' + (gen.next().unwrap() % 26) as u8 ).map(char::from).collect::<String>());
        }
        words.sort_unstable();
        words.dedup();
        assert!(words.len() >= how_many);
        words.truncate(how_many);
        words
    }

    #[test]
    fn string_keys() {
        let keys = random_words(10_000, 1234);
        let builder = Builder::new(4.0).unwrap();
        let f = builder.build(&keys, 0).unwrap();
        test_mphf(&keys, &f);
        let g = builder.build(&keys, 0).unwrap();
        for key in &keys {
            assert_eq!(f.get(key), g.get(key));
            assert_eq!(f.get(key.as_str()), f.get(key));
        }
    }

    #[test]
    fn wy_hash_family() {
        let keys: Vec<u64> = XorShift64(9).take(1000).collect();
        let f = Builder::with_hash(3.0, Wy).unwrap().build(&keys, 0).unwrap();
        test_mphf(&keys, &f);
    }

    #[test]
    fn read_write() {
        let keys: Vec<u64> = XorShift64(321).take(1000).collect();
        let f = Builder::new(3.0).unwrap().build(&keys, 7).unwrap();
        let mut buff = Vec::new();
        f.write(&mut buff).unwrap();
        assert_eq!(buff.len(), f.write_bytes());
        let read = Function::read(&mut &buff[..]).unwrap();
        assert_eq!(read.len(), f.len());
        assert_eq!(read.num_bits(), f.num_bits());
        for key in &keys { assert_eq!(read.get(key), f.get(key)); }
    }

    #[test]
    fn stats_events() {
        #[derive(Default)]
        struct Counts { bucketed: u32, accepted: u32, ended: u32 }
        impl BuildStatsCollector for Counts {
            fn bucketed(&mut self, _: usize, _: usize, _: usize) { self.bucketed += 1; }
            fn seed_accepted(&mut self, _: u32) { self.accepted += 1; }
            fn end(&mut self, bits_per_shift: u8) { self.ended += 1; assert!(bits_per_shift > 0); }
        }
        let keys: Vec<u64> = XorShift64(15).take(500).collect();
        let mut stats = Counts::default();
        Builder::new(3.0).unwrap().build_with_stats(&keys, 0, &mut stats).unwrap();
        assert!(stats.bucketed >= 1);
        assert!(stats.accepted >= 1);
        assert_eq!(stats.ended, 1);
    }

    #[test]
    fn different_seeds() {
        let keys: Vec<u64> = XorShift64(2).take(800).collect();
        for seed in [0, 1, 42, u64::MAX] {
            let f = Builder::new(3.0).unwrap().build(&keys, seed).unwrap();
            test_mphf(&keys, &f);
        }
    }
}
