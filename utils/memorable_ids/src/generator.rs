use std::fmt;
use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::dictionary::{MAX_COMPONENTS, WORD_LISTS};
use crate::error::{MemorableIdError, MemorableIdResult};
use crate::suffix::{BuiltinSuffix, SuffixProducer};

pub const DEFAULT_COMPONENTS: i32 = 2;
pub const DEFAULT_SEPARATOR: &str = "-";

/// Options for a single [`generate`] call.
///
/// Zero values mean "use the default": `components == 0` becomes 2 and an
/// empty separator becomes `"-"`. Defaults are applied before the range
/// check, so an explicit 0 is never rejected. Keep it that way.
#[derive(Clone, Default)]
pub struct GenerateOptions {
    pub components: i32,
    pub suffix: Option<Arc<dyn SuffixProducer>>,
    pub separator: String,
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_components(mut self, components: i32) -> Self {
        self.components = components;
        self
    }

    pub fn with_suffix<P>(mut self, producer: P) -> Self
    where
        P: SuffixProducer + 'static,
    {
        self.suffix = Some(Arc::new(producer));
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Component count after defaults, before validation.
    pub fn effective_components(&self) -> i32 {
        if self.components == 0 {
            DEFAULT_COMPONENTS
        } else {
            self.components
        }
    }

    pub fn effective_separator(&self) -> &str {
        if self.separator.is_empty() {
            DEFAULT_SEPARATOR
        } else {
            &self.separator
        }
    }
}

impl fmt::Debug for GenerateOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerateOptions")
            .field("components", &self.components)
            .field("suffix", &self.suffix.as_ref().map(|_| "<producer>"))
            .field("separator", &self.separator)
            .finish()
    }
}

/// Plain-data generator settings, suitable for loading from a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub components: i32,
    pub suffix: Option<BuiltinSuffix>,
    pub separator: String,
}

impl From<GeneratorConfig> for GenerateOptions {
    fn from(config: GeneratorConfig) -> Self {
        let options = GenerateOptions::new()
            .with_components(config.components)
            .with_separator(config.separator);
        match config.suffix {
            Some(suffix) => options.with_suffix(suffix),
            None => options,
        }
    }
}

/// Generates a memorable ID using the thread-local random source.
///
/// ```
/// use memorable_ids::{generate, BuiltinSuffix, GenerateOptions};
///
/// let id = generate(&GenerateOptions::new()).unwrap(); // e.g. "cute-rabbit"
/// assert_eq!(id.split('-').count(), 2);
///
/// let id = generate(
///     &GenerateOptions::new()
///         .with_components(3)
///         .with_suffix(BuiltinSuffix::Number)
///         .with_separator("_"),
/// )
/// .unwrap(); // e.g. "quick_mouse_swim_042"
/// assert_eq!(id.split('_').count(), 4);
/// ```
pub fn generate(options: &GenerateOptions) -> MemorableIdResult<String> {
    generate_with_rng(options, &mut rand::rng())
}

/// Same as [`generate`] but draws words from `rng`.
///
/// The suffix producer is invoked as-is and does not see `rng`.
pub fn generate_with_rng<R: Rng + ?Sized>(
    options: &GenerateOptions,
    rng: &mut R,
) -> MemorableIdResult<String> {
    let components = options.effective_components();
    let separator = options.effective_separator();

    if components < 1 || components as usize > MAX_COMPONENTS {
        debug!(components, "rejected memorable id component count");
        return Err(MemorableIdError::InvalidComponents(components));
    }

    let mut parts: Vec<String> = WORD_LISTS
        .iter()
        .take(components as usize)
        .map(|words| words[rng.random_range(0..words.len())].to_string())
        .collect();

    let suffix = options.suffix.as_ref().and_then(|producer| producer.produce());
    let has_suffix = suffix.is_some();
    if let Some(suffix) = suffix {
        parts.push(suffix);
    }

    trace!(components, has_suffix, "generated memorable id");
    Ok(parts.join(separator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{ADJECTIVES, ADVERBS, NOUNS, PREPOSITIONS, VERBS};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_default_options_give_two_components() {
        let id = generate(&GenerateOptions::new()).unwrap();
        let parts: Vec<&str> = id.split('-').collect();

        assert_eq!(parts.len(), 2);
        assert!(ADJECTIVES.contains(&parts[0]));
        assert!(NOUNS.contains(&parts[1]));
    }

    #[test]
    fn test_each_position_uses_its_list() {
        let mut rng = StdRng::seed_from_u64(42);
        let options = GenerateOptions::new().with_components(5);

        for _ in 0..50 {
            let id = generate_with_rng(&options, &mut rng).unwrap();
            let parts: Vec<&str> = id.split('-').collect();

            assert_eq!(parts.len(), 5);
            assert!(ADJECTIVES.contains(&parts[0]));
            assert!(NOUNS.contains(&parts[1]));
            assert!(VERBS.contains(&parts[2]));
            assert!(ADVERBS.contains(&parts[3]));
            assert!(PREPOSITIONS.contains(&parts[4]));
        }
    }

    #[test]
    fn test_zero_components_falls_back_to_default() {
        let id = generate(&GenerateOptions::new().with_components(0)).unwrap();
        assert_eq!(id.split('-').count(), 2);
    }

    #[test]
    fn test_out_of_range_components_rejected() {
        for components in [-1, 6, 10] {
            let err = generate(&GenerateOptions::new().with_components(components)).unwrap_err();
            assert_eq!(err, MemorableIdError::InvalidComponents(components));
            assert_eq!(err.to_string(), "components must be between 1 and 5");
        }
    }

    #[test]
    fn test_custom_separator() {
        let id = generate(&GenerateOptions::new().with_separator("_")).unwrap();
        assert!(!id.contains('-'));
        assert_eq!(id.split('_').count(), 2);
    }

    #[test]
    fn test_empty_separator_falls_back_to_dash() {
        let id = generate(&GenerateOptions::new().with_components(3).with_separator("")).unwrap();
        assert_eq!(id.split('-').count(), 3);
    }

    #[test]
    fn test_builtin_suffix_appended() {
        let options = GenerateOptions::new()
            .with_components(2)
            .with_suffix(BuiltinSuffix::Number);
        let id = generate(&options).unwrap();
        let parts: Vec<&str> = id.split('-').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[2].len(), 3);
        assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_absent_suffix_is_omitted() {
        let options = GenerateOptions::new().with_suffix(|| -> Option<String> { None });
        let id = generate(&options).unwrap();

        assert_eq!(id.split('-').count(), 2);
        assert!(!id.ends_with('-'));
    }

    #[test]
    fn test_empty_and_blank_suffix_kept_verbatim() {
        for value in ["", " ", "\t  "] {
            let owned = value.to_string();
            let options = GenerateOptions::new().with_suffix(move || Some(owned.clone()));
            let id = generate(&options).unwrap();
            let parts: Vec<&str> = id.split('-').collect();

            assert_eq!(parts.len(), 3);
            assert_eq!(parts[2], value);
        }
    }

    #[test]
    fn test_same_seed_same_id() {
        let options = GenerateOptions::new().with_components(4);
        let a = generate_with_rng(&options, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = generate_with_rng(&options, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_config_into_options() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"components": 3, "suffix": "letter", "separator": "."}"#)
                .unwrap();
        let options = GenerateOptions::from(config);
        let id = generate(&options).unwrap();
        let parts: Vec<&str> = id.split('.').collect();

        assert_eq!(parts.len(), 4);
        assert!(parts[3].chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_config_fields_default_when_missing() {
        let config: GeneratorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());

        let options = GenerateOptions::from(config);
        assert_eq!(options.effective_components(), DEFAULT_COMPONENTS);
        assert_eq!(options.effective_separator(), DEFAULT_SEPARATOR);
        assert!(options.suffix.is_none());
    }
}
