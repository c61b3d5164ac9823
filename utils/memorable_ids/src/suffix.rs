//! Pluggable suffix producers appended after the word components.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Anything that can yield a suffix on demand.
///
/// `None` means "no suffix" and nothing is appended. Any `Some` value, even an
/// empty or whitespace-only string, is appended verbatim as the last part.
pub trait SuffixProducer: Send + Sync {
    fn produce(&self) -> Option<String>;
}

impl<F> SuffixProducer for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn produce(&self) -> Option<String> {
        self()
    }
}

/// Suffix producers shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltinSuffix {
    /// Three zero-padded decimal digits, `000`..=`999`.
    Number,
    /// Four zero-padded decimal digits, `0000`..=`9999`.
    Number4,
    /// Two lowercase hex digits, `00`..=`ff`.
    Hex,
    /// Last four digits of the current Unix time in milliseconds.
    /// Time-based rather than random, so IDs generated in the same
    /// millisecond share it.
    Timestamp,
    /// One lowercase ASCII letter.
    Letter,
}

impl BuiltinSuffix {
    pub const ALL: [BuiltinSuffix; 5] = [
        BuiltinSuffix::Number,
        BuiltinSuffix::Number4,
        BuiltinSuffix::Hex,
        BuiltinSuffix::Timestamp,
        BuiltinSuffix::Letter,
    ];

    /// Number of distinct values this producer can emit. Feed it to
    /// [`crate::total_combinations`] as the suffix range.
    pub fn range(&self) -> i64 {
        match self {
            BuiltinSuffix::Number => 1_000,
            BuiltinSuffix::Number4 => 10_000,
            BuiltinSuffix::Hex => 256,
            BuiltinSuffix::Timestamp => 10_000,
            BuiltinSuffix::Letter => 26,
        }
    }

    /// Draws a suffix using the supplied random source. `Timestamp` reads the
    /// clock and ignores `rng`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        match self {
            BuiltinSuffix::Number => format!("{:03}", rng.random_range(0..1_000u32)),
            BuiltinSuffix::Number4 => format!("{:04}", rng.random_range(0..10_000u32)),
            BuiltinSuffix::Hex => format!("{:02x}", rng.random_range(0..=u8::MAX)),
            BuiltinSuffix::Timestamp => last_four_digits(chrono::Utc::now().timestamp_millis()),
            BuiltinSuffix::Letter => char::from(b'a' + rng.random_range(0..26u8)).to_string(),
        }
    }
}

impl SuffixProducer for BuiltinSuffix {
    fn produce(&self) -> Option<String> {
        Some(self.sample(&mut rand::rng()))
    }
}

/// Three-digit numeric suffix, same as [`BuiltinSuffix::Number`].
pub fn default_suffix() -> Option<String> {
    BuiltinSuffix::Number.produce()
}

fn last_four_digits(millis: i64) -> String {
    let digits = millis.unsigned_abs().to_string();
    if digits.len() >= 4 {
        digits[digits.len() - 4..].to_string()
    } else {
        format!("{:0>4}", digits)
    }
}
