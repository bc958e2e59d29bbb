//! Synthetic training data.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::{Furnishing, Kitchen, Location, PropertyRecord, Sample, TrainingSet};

/// Source of labeled records for the default training.
pub trait SampleSource: Send + Sync {
    fn generate(&self, n_samples: usize) -> TrainingSet;
}

/// Seeded generator with a hand-written pricing rule.
///
/// The generator is re-seeded on every call, so equal sample counts always
/// produce equal training sets.
#[derive(Copy, Clone, Debug)]
pub struct SyntheticSamples {
    pub seed: u64,
}

impl SyntheticSamples {
    pub const DEFAULT_SEED: u64 = 42;

    pub const MIN_PRICE: f64 = 100000.0;

    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    fn sample<R: Rng>(rng: &mut R) -> Sample {
        let bedrooms: u32 = rng.gen_range(1..5);
        let neighborhood = 1.0 + rng.gen_range(0..4) as f64 + rng.gen::<f64>();
        let record = PropertyRecord {
            area: 1000.0 + rng.gen_range(0..2000) as f64,
            bedrooms,
            bathrooms: bedrooms,
            age: rng.gen_range(0..30),
            neighborhood: (neighborhood * 10.0).round() / 10.0,
            parking_spaces: rng.gen_range(0..4),
            location: *Location::ALL.choose(rng).unwrap_or(&Location::Suburb),
            furnishing: *Furnishing::ALL.choose(rng).unwrap_or(&Furnishing::Unfurnished),
            kitchen: *Kitchen::ALL.choose(rng).unwrap_or(&Kitchen::Closed),
        };
        let price = Self::price(&record);
        Sample { record, price }
    }

    /// Rule-of-thumb market price used to label the synthetic records.
    #[must_use]
    pub fn price(record: &PropertyRecord) -> f64 {
        let mut price = record.area * 150.0
            + record.bedrooms as f64 * 25000.0
            + record.bathrooms as f64 * 20000.0
            + record.parking_spaces as f64 * 15000.0
            + (record.neighborhood - 2.5) * 50000.0;
        price *= match record.location {
            Location::Beachside => 1.4,
            Location::Uptown => 1.3,
            Location::Downtown => 1.2,
            Location::Metropolitan => 1.1,
            Location::Rural => 0.8,
            Location::Suburb => 1.0,
        };
        price += match record.furnishing {
            Furnishing::Furnished => 30000.0,
            Furnishing::SemiFurnished => 15000.0,
            Furnishing::Unfurnished => 0.0,
        };
        if record.kitchen == Kitchen::Open {
            price += 20000.0;
        }
        price *= 1.0 - record.age as f64 * 0.01;
        price.max(Self::MIN_PRICE)
    }
}

impl Default for SyntheticSamples {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl SampleSource for SyntheticSamples {
    fn generate(&self, n_samples: usize) -> TrainingSet {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..n_samples).map(|_| Self::sample(&mut rng)).collect()
    }
}
