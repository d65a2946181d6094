//! Feature synthesis for submitted transactions
//!
//! The scorer expects the 28 anonymised PCA components (`V1`..`V28`) of the
//! public credit-card fraud dataset. A payment form has no way to produce
//! those, so they are fabricated here: uniformly at random for ordinary
//! payments, or as a jittered copy of a known fraudulent record when the
//! merchant or amount hits a trigger.

use rand::Rng;
use tracing::debug;

pub const FEATURE_COUNT: usize = 28;

/// Range for features of an ordinary payment
pub const RANDOM_FEATURE_BOUND: f64 = 5.0;

/// Maximum per-feature jitter applied to the reference template
pub const TEMPLATE_JITTER: f64 = 0.1;

/// V1..V28 of the first fraudulent record (Time = 406) in the credit-card
/// fraud dataset the scorer was trained on.
pub const REFERENCE_FRAUD_TEMPLATE: [f64; FEATURE_COUNT] = [
    -2.312_226_542_326_3,
    1.951_992_011_581_58,
    -1.609_850_732_297_69,
    3.997_905_587_546_8,
    -0.522_187_864_667_764,
    -1.426_545_319_205_95,
    -2.537_387_306_245_79,
    1.391_657_248_298_04,
    -2.770_089_277_194_33,
    -2.772_272_144_659_15,
    3.202_033_207_096_35,
    -2.899_907_388_494_73,
    -0.595_221_881_324_605,
    -4.289_253_782_442_17,
    0.389_724_120_274_487,
    -1.140_747_179_806_57,
    -2.830_055_674_504_37,
    -0.016_822_468_180_825_7,
    0.416_955_705_037_907,
    0.126_910_559_061_474,
    0.517_232_370_861_764,
    -0.035_049_368_605_297_4,
    -0.465_211_076_182_388,
    0.320_198_198_514_526,
    0.044_519_167_473_172_4,
    0.177_839_798_284_401,
    0.261_145_002_567_677,
    -0.143_275_874_698_919,
];

/// Default merchants that bias a payment toward the fraud template
pub const DEFAULT_TRIGGER_MERCHANTS: &[&str] = &[
    "Shady Electronics Ltd",
    "CryptoMixer Exchange",
    "Offshore Gift Cards",
    "Dark Web Market",
];

/// Default amounts (in currency units) that bias a payment toward the fraud template
pub const DEFAULT_TRIGGER_AMOUNTS: &[f64] = &[9999.99, 77777.77, 123456.78];

/// The 28 synthetic features sent to the scorer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }
}

/// Merchants and amounts that mark a payment as a "secret" fraud pattern.
///
/// Amounts are compared at cent precision so `15000.0` and `15000.004` match.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerSet {
    merchants: Vec<String>,
    amount_cents: Vec<i64>,
}

impl TriggerSet {
    pub fn new<M, S>(merchants: M, amounts: &[f64]) -> Self
    where
        M: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            merchants: merchants.into_iter().map(Into::into).collect(),
            amount_cents: amounts.iter().map(|a| to_cents(*a)).collect(),
        }
    }

    pub fn merchants(&self) -> &[String] {
        &self.merchants
    }

    pub fn amounts(&self) -> Vec<f64> {
        self.amount_cents.iter().map(|c| *c as f64 / 100.0).collect()
    }

    /// Membership test on either set. Never denies anything by itself.
    pub fn matches(&self, merchant_name: &str, amount: f64) -> bool {
        let cents = to_cents(amount);
        self.merchants.iter().any(|m| m == merchant_name) || self.amount_cents.contains(&cents)
    }
}

impl Default for TriggerSet {
    fn default() -> Self {
        Self::new(DEFAULT_TRIGGER_MERCHANTS.iter().copied(), DEFAULT_TRIGGER_AMOUNTS)
    }
}

fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Build the feature vector for one submission
pub fn synthesize_features<R: Rng + ?Sized>(is_secret_fraud: bool, rng: &mut R) -> FeatureVector {
    let mut values = [0.0; FEATURE_COUNT];

    if is_secret_fraud {
        debug!("Synthesizing features from the reference fraud template");
        for (value, reference) in values.iter_mut().zip(REFERENCE_FRAUD_TEMPLATE.iter()) {
            *value = reference + rng.gen_range(-TEMPLATE_JITTER..=TEMPLATE_JITTER);
        }
    } else {
        for value in values.iter_mut() {
            *value = rng.gen_range(-RANDOM_FEATURE_BOUND..=RANDOM_FEATURE_BOUND);
        }
    }

    FeatureVector(values)
}
