//! Short, human-readable IDs such as `cute-rabbit` or `quick-mouse-swim-042`.
//!
//! An ID is one word per component, drawn in fixed order from the adjective,
//! noun, verb, adverb and preposition lists, optionally followed by a suffix,
//! all joined by a separator. [`parse`] splits an ID back apart and the
//! [`collision`] module estimates how quickly a configuration runs into
//! duplicates.
//!
//! Generation is not cryptographically unpredictable and gives no uniqueness
//! guarantee. Everything here is stateless; the word lists are constants.

pub mod collision;
pub mod dictionary;
pub mod error;
pub mod generator;
pub mod parser;
pub mod suffix;

pub use collision::{
    CollisionAnalysis, CollisionScenario, collision_analysis, collision_probability,
    total_combinations,
};
pub use dictionary::{Dictionary, DictionaryStats, dictionary, dictionary_stats};
pub use error::{MemorableIdError, MemorableIdResult};
pub use generator::{GenerateOptions, GeneratorConfig, generate, generate_with_rng};
pub use parser::{ParsedId, parse};
pub use suffix::{BuiltinSuffix, SuffixProducer, default_suffix};
