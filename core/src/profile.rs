//! Workload distribution profiles.
//!
//! A profile is a fixed set of integer samples describing how many tasks a
//! surprise source has historically generated in a day. Two literal forms
//! are accepted:
//!
//!   "X|Y|Z"    three-point summary: X low, Y bulk, Z high, expanded 2:6:2
//!   "1,2,2,3"  explicit comma-separated measurements
//!
//! Profiles are value objects. Parsing never touches the filesystem and all
//! statistics are pure.

use crate::error::{SplitError, SplitResult};

/// Sample counts for the three-point form: 2 low, 6 bulk, 2 high.
const THREE_POINT_WEIGHTS: [usize; 3] = [2, 6, 2];

#[derive(Debug, Clone, PartialEq)]
pub struct DistributionProfile {
    samples: Vec<i64>,
}

impl DistributionProfile {
    /// Parse a profile literal. A literal containing `|` must carry exactly
    /// three integer fields; anything else is read as a comma-separated
    /// sample list.
    pub fn parse(literal: &str) -> SplitResult<Self> {
        let trimmed = literal.trim();
        if trimmed.is_empty() {
            return Err(SplitError::Format {
                literal: literal.to_string(),
                reason: "empty literal".to_string(),
            });
        }

        let samples = if trimmed.contains('|') {
            let parts: Vec<&str> = trimmed.split('|').collect();
            if parts.len() != 3 {
                return Err(SplitError::Format {
                    literal: literal.to_string(),
                    reason: format!("expected 3 '|'-separated fields, got {}", parts.len()),
                });
            }
            let mut samples = Vec::with_capacity(10);
            for (part, &count) in parts.iter().zip(THREE_POINT_WEIGHTS.iter()) {
                let value = parse_sample(part, literal)?;
                samples.extend(std::iter::repeat(value).take(count));
            }
            samples
        } else {
            trimmed
                .split(',')
                .map(|part| parse_sample(part, literal))
                .collect::<SplitResult<Vec<i64>>>()?
        };

        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[i64] {
        &self.samples
    }

    /// Arithmetic mean of the samples.
    pub fn mean(&self) -> f64 {
        let sum: i64 = self.samples.iter().sum();
        sum as f64 / self.samples.len() as f64
    }

    /// Population standard deviation (divide by n, not n - 1).
    pub fn std_dev(&self) -> f64 {
        let mean = self.mean();
        let variance = self
            .samples
            .iter()
            .map(|&sample| {
                let diff = sample as f64 - mean;
                diff * diff
            })
            .sum::<f64>()
            / self.samples.len() as f64;
        variance.sqrt()
    }

    /// Mean as it enters cost arithmetic: rounded to one decimal.
    pub fn rounded_mean(&self) -> f64 {
        round1(self.mean())
    }

    /// Spread: twice the population standard deviation, rounded to one
    /// decimal. Zero for a constant sample set.
    pub fn spread(&self) -> f64 {
        round1(2.0 * self.std_dev())
    }
}

fn parse_sample(part: &str, literal: &str) -> SplitResult<i64> {
    part.trim().parse::<i64>().map_err(|_| SplitError::Format {
        literal: literal.to_string(),
        reason: format!("'{}' is not an integer", part.trim()),
    })
}

/// Round to one decimal place, half away from zero.
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
