//! Grouping of keys into buckets in a flat layout.

use crate::bucketer::UnbalancedBucketer;
use crate::seedable_hash::{KeyBytes, SeededHash};

/// Keys of an input slice grouped by bucket.
///
/// Keys are represented by their indices into the caller-supplied slice;
/// indices of keys sharing a bucket are contiguous in `bucket_keys`, and
/// bucket `b` owns the range `bucket_offsets[b]..bucket_offsets[b+1]`.
pub struct Buckets {
    bucket_keys: Box<[usize]>,
    bucket_offsets: Box<[usize]>,
    size_biggest_bucket: usize,
}

impl Buckets {
    /// Groups the indices of `keys` by the bucket that `bucketer` assigns to
    /// each key's hash under the `hasher` family.
    pub fn new<S, K>(keys: &[K], bucketer: &UnbalancedBucketer, hasher: &S) -> Self
        where S: SeededHash, K: KeyBytes
    {
        let num_buckets = bucketer.num_buckets();
        let seed = bucketer.seed();
        let buckets: Vec<usize> = keys.iter()
            .map(|key| bucketer.bucket_of_hash(hasher.hash_key(key, seed)))
            .collect();

        // number of keys inside each bucket, then cumulative sums
        let mut bucket_offsets = vec![0usize; num_buckets + 1].into_boxed_slice();
        for &bucket in &buckets { bucket_offsets[bucket + 1] += 1; }
        let mut size_biggest_bucket = 0;
        for i in 1..=num_buckets {
            if bucket_offsets[i] > size_biggest_bucket { size_biggest_bucket = bucket_offsets[i]; }
            bucket_offsets[i] += bucket_offsets[i - 1];
        }

        // reorder the key indices so that each bucket's keys are contiguous
        let mut cursors: Vec<usize> = bucket_offsets[..num_buckets].to_vec();
        let mut bucket_keys = vec![0usize; keys.len()].into_boxed_slice();
        for (key_index, &bucket) in buckets.iter().enumerate() {
            bucket_keys[cursors[bucket]] = key_index;
            cursors[bucket] += 1;
        }

        Self { bucket_keys, bucket_offsets, size_biggest_bucket }
    }

    /// Returns the indices (into the input slice) of the keys of bucket `bucket`.
    #[inline] pub fn key_indices(&self, bucket: usize) -> &[usize] {
        &self.bucket_keys[self.bucket_offsets[bucket]..self.bucket_offsets[bucket + 1]]
    }

    /// Returns the number of keys of bucket `bucket`.
    #[inline] pub fn size(&self, bucket: usize) -> usize {
        self.bucket_offsets[bucket + 1] - self.bucket_offsets[bucket]
    }

    /// Returns the number of keys of the biggest bucket.
    #[inline] pub fn size_biggest_bucket(&self) -> usize { self.size_biggest_bucket }

    /// Returns the number of all keys.
    #[inline] pub fn num_keys(&self) -> usize { self.bucket_keys.len() }

    /// Returns the number of buckets.
    #[inline] pub fn num_buckets(&self) -> usize { self.bucket_offsets.len() - 1 }

    /// Returns the bucket indices ordered by descending bucket size,
    /// obtained with a counting sort over the sizes.
    pub fn order_by_size(&self) -> Box<[usize]> {
        let num_buckets = self.num_buckets();

        // occurrences of each size, then right-to-left cumulative sums,
        // so that offsets[size + 1] is the first output position of `size`
        let mut offsets = vec![0usize; self.size_biggest_bucket + 2];
        for bucket in 0..num_buckets { offsets[self.size(bucket)] += 1; }
        for i in (1..=self.size_biggest_bucket).rev() { offsets[i - 1] += offsets[i]; }

        let mut order = vec![0usize; num_buckets].into_boxed_slice();
        for bucket in 0..num_buckets {
            order[offsets[self.size(bucket) + 1]] = bucket;
            offsets[self.size(bucket) + 1] += 1;
        }
        order
    }
}
