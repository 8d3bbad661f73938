//! Fake-data generation for request fields the caller leaves out
//!
//! Clients receive a [`Faker`] at construction time. [`RandomFaker`] is the
//! default; tests seed it or supply their own implementation for fixed values.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::OperationStatus;

const FIRST_NAMES: &[&str] = &[
    "Ivan", "Anna", "Pavel", "Olga", "Sergey", "Maria", "Dmitry", "Elena", "Nikita", "Irina",
];

const LAST_NAMES: &[&str] = &[
    "Petrov", "Ivanova", "Smirnov", "Kuznetsova", "Popov", "Sokolova", "Lebedev", "Novikova",
];

const MIDDLE_NAMES: &[&str] = &[
    "Ivanovich", "Petrovna", "Sergeevich", "Alekseevna", "Dmitrievich", "Andreevna",
];

const CATEGORIES: &[&str] = &[
    "gas",
    "taxi",
    "tolls",
    "water",
    "beauty",
    "mobile",
    "travel",
    "parking",
    "catalog",
    "internet",
    "satellite",
    "education",
    "government",
    "healthcare",
    "restaurants",
    "electricity",
    "supermarkets",
];

/// Source of plausible test values, one method per supported kind
pub trait Faker: Send + Sync {
    fn email(&self) -> String;
    fn first_name(&self) -> String;
    fn last_name(&self) -> String;
    fn middle_name(&self) -> String;
    fn phone_number(&self) -> String;
    /// Strictly positive, two decimal places
    fn amount(&self) -> f64;
    /// Never [`OperationStatus::Unspecified`]
    fn operation_status(&self) -> OperationStatus;
    /// Non-empty purchase category
    fn category(&self) -> String;
}

/// [`Faker`] backed by a standard RNG
pub struct RandomFaker {
    rng: Mutex<StdRng>,
}

impl RandomFaker {
    const MIN_AMOUNT: f64 = 1.0;
    const MAX_AMOUNT: f64 = 1000.0;

    /// Create a faker seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a reproducible faker
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Shared handle for injecting into clients
    pub fn shared() -> Arc<dyn Faker> {
        Arc::new(Self::new())
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A poisoned RNG is still a valid RNG
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut rng)
    }

    fn pick(&self, values: &[&str]) -> String {
        self.with_rng(|rng| values.choose(rng).copied().unwrap_or_default().to_string())
    }
}

impl Default for RandomFaker {
    fn default() -> Self {
        Self::new()
    }
}

impl Faker for RandomFaker {
    fn email(&self) -> String {
        let first = self.first_name().to_lowercase();
        let last = self.last_name().to_lowercase();
        let suffix: u32 = self.with_rng(|rng| rng.gen());
        // uuid keeps emails unique across independently seeded fakers
        let unique = uuid::Uuid::new_v4().simple().to_string();
        format!("{first}.{last}.{suffix:08x}{}@example.com", &unique[..8])
    }

    fn first_name(&self) -> String {
        self.pick(FIRST_NAMES)
    }

    fn last_name(&self) -> String {
        self.pick(LAST_NAMES)
    }

    fn middle_name(&self) -> String {
        self.pick(MIDDLE_NAMES)
    }

    fn phone_number(&self) -> String {
        let digits: u64 = self.with_rng(|rng| rng.gen_range(9_000_000_000..10_000_000_000));
        format!("+7{digits}")
    }

    fn amount(&self) -> f64 {
        let raw = self.with_rng(|rng| rng.gen_range(Self::MIN_AMOUNT..=Self::MAX_AMOUNT));
        let rounded = (raw * 100.0).round() / 100.0;
        rounded.max(Self::MIN_AMOUNT)
    }

    fn operation_status(&self) -> OperationStatus {
        self.with_rng(|rng| {
            *OperationStatus::REQUESTABLE
                .choose(rng)
                .unwrap_or(&OperationStatus::Completed)
        })
    }

    fn category(&self) -> String {
        self.pick(CATEGORIES)
    }
}
