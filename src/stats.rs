//! Collecting and reporting events that occur during construction.

use std::io::Write;

use crate::function::BuildError;

/// Trait for collecting (and summarizing or reporting) events during construction of the FCH function.
///
/// All methods have empty default implementations; the unit type `()` is the
/// collector that ignores everything.
pub trait BuildStatsCollector {
    /// Called once per fit attempt, after the keys have been grouped into buckets.
    #[inline(always)] fn bucketed(&mut self, _num_keys: usize, _num_buckets: usize, _size_biggest_bucket: usize) {}

    /// Called when a global seed free of in-bucket collisions has been accepted,
    /// with the number of candidate seeds drawn (including the accepted one).
    #[inline(always)] fn seed_accepted(&mut self, _candidates_drawn: u32) {}

    /// Called on every recoverable failure, just before the build is retried.
    #[inline(always)] fn retry(&mut self, _cause: BuildError) {}

    /// Called once at the end of a successful build with the number of bits
    /// used to encode each displacement.
    #[inline(always)] fn end(&mut self, _bits_per_shift: u8) {}
}

/// Ignores all events and does nothing.
impl BuildStatsCollector for () {}

/// Reports events occurred during construction to the wrapped writer.
pub struct BuildStatsPrinter<W: Write = std::io::Stderr>(W);

impl BuildStatsPrinter<std::io::Stderr> {
    /// Reports events occurred during construction to the standard error stream.
    pub fn stderr() -> Self { Self(std::io::stderr()) }
}

impl<W: Write> BuildStatsPrinter<W> {
    /// Reports events occurred during construction to `output`.
    pub fn new(output: W) -> Self { Self(output) }
}

impl<W: Write> BuildStatsCollector for BuildStatsPrinter<W> {
    fn bucketed(&mut self, num_keys: usize, num_buckets: usize, size_biggest_bucket: usize) {
        writeln!(self.0, "{} keys mapped to {} buckets, the biggest has {} keys",
            num_keys, num_buckets, size_biggest_bucket).unwrap();
    }

    fn seed_accepted(&mut self, candidates_drawn: u32) {
        writeln!(self.0, "seed free of in-bucket collisions found after drawing {} candidates", candidates_drawn).unwrap();
    }

    fn retry(&mut self, cause: BuildError) {
        writeln!(self.0, "restart caused by: {}", cause).unwrap();
    }

    fn end(&mut self, bits_per_shift: u8) {
        writeln!(self.0, "completed successfully, {} bits per displacement", bits_per_shift).unwrap();
    }
}
