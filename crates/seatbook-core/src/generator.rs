//! Collision-free booking reference generation.

use std::collections::HashSet;

use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::models::{BookingReference, REFERENCE_ALPHABET, REFERENCE_LENGTH};

/// Mints booking references that are unique for the life of the generator.
///
/// Every reference ever returned stays in the issued set, including those
/// whose booking has since been freed, so a reference never names two
/// different bookings.
#[derive(Debug)]
pub struct ReferenceGenerator {
    rng: StdRng,
    issued: HashSet<BookingReference>,
}

impl ReferenceGenerator {
    /// Creates a generator seeded from operating system entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Creates a generator with a fixed seed, for reproducible sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            issued: HashSet::new(),
        }
    }

    /// Returns a reference that has never been issued by this generator.
    ///
    /// Candidates are drawn uniformly from the 36-symbol alphabet and
    /// rejected while they collide with an issued reference.
    pub fn next_reference(&mut self) -> BookingReference {
        loop {
            let candidate = self.candidate();
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
            debug!("Reference {} already issued, drawing again", candidate.as_str());
        }
    }

    fn candidate(&mut self) -> BookingReference {
        let value: String = (0..REFERENCE_LENGTH)
            .map(|_| {
                let index = self.rng.gen_range(0..REFERENCE_ALPHABET.len());
                char::from(REFERENCE_ALPHABET[index])
            })
            .collect();
        BookingReference::from_generated(value)
    }

    /// Whether `reference` was ever issued, active or not.
    pub fn has_issued(&self, reference: &BookingReference) -> bool {
        self.issued.contains(reference)
    }

    /// Number of references issued so far.
    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }
}

impl Default for ReferenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for ReferenceGenerator {
    type Item = BookingReference;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_reference())
    }
}
