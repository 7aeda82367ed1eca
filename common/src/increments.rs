// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use rand::Rng;
use serde::Deserialize;

/// A non-empty half open interval `[low, high)` an increment is drawn from.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(try_from = "SpanBounds")]
pub struct Span {
    low: f64,
    high: f64,
}

/// The raw bounds of a span as written in the configuration.
#[derive(Deserialize)]
struct SpanBounds {
    low: f64,
    high: f64,
}

impl TryFrom<SpanBounds> for Span {
    type Error = String;

    fn try_from(bounds: SpanBounds) -> Result<Self, Self::Error> {
        Span::new(bounds.low, bounds.high)
            .ok_or_else(|| format!("empty increment span [{}, {})", bounds.low, bounds.high))
    }
}

impl Span {
    /// Returns `None` unless `low < high`.
    pub fn new(low: f64, high: f64) -> Option<Self> {
        (low < high).then_some(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }
}

/// Provides the amount an "increase" action adds to a reading.
pub trait IncrementSource {
    /// Draws an increment for `span`.
    fn draw(&mut self, span: Span) -> f64;
}

/// Uniformly distributed increments from a random number generator.
pub struct RandomIncrements<R = rand::rngs::ThreadRng>(R);

impl RandomIncrements {
    pub fn new() -> Self {
        Self(rand::thread_rng())
    }
}

impl Default for RandomIncrements {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomIncrements<R> {
    pub fn from_rng(rng: R) -> Self {
        Self(rng)
    }
}

impl<R: Rng> IncrementSource for RandomIncrements<R> {
    fn draw(&mut self, span: Span) -> f64 {
        self.0.gen_range(span.low..span.high)
    }
}

/// Always returns the same increment, whatever the span. Used for deterministic runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedIncrements(pub f64);

impl IncrementSource for FixedIncrements {
    fn draw(&mut self, _span: Span) -> f64 {
        self.0
    }
}

#[test]
fn test_random_increments_stay_in_span() {
    use rand::SeedableRng;

    let mut source = RandomIncrements::from_rng(rand::rngs::StdRng::seed_from_u64(7));
    let span = Span::new(0.5, 1.5).unwrap();

    for _ in 0..1000 {
        let value = source.draw(span);
        assert!((span.low()..span.high()).contains(&value), "{value} not in {span:?}");
    }
}

#[test]
fn test_empty_spans_are_rejected() {
    assert!(Span::new(2.0, 2.0).is_none());
    assert!(Span::new(5.0, 2.0).is_none());
    assert!(Span::new(f64::NAN, 1.0).is_none());

    let error = serde_json::from_str::<Span>(r#"{ "low": 5.0, "high": 2.0 }"#).unwrap_err();
    assert!(error.to_string().contains("empty increment span"), "{error}");
}

#[test]
fn test_fixed_increments() {
    let mut source = FixedIncrements(1.0);

    assert_eq!(source.draw(Span::new(5.0, 10.0).unwrap()), 1.0);
}
