//! Static word lists used to build memorable IDs.
//!
//! The five lists are ordered by the position they occupy in a generated ID:
//! adjective, noun, verb, adverb, preposition. They are never mutated.

use serde::{Deserialize, Serialize};

/// Descriptive words, always the first component.
pub const ADJECTIVES: &[&str] = &[
    "cute", "dapper", "large", "small", "long", "short", "thick", "narrow", "deep", "flat",
    "whole", "low", "high", "near", "far", "fast", "quick", "slow", "early", "late",
    "bright", "dark", "cloudy", "warm", "cool", "cold", "windy", "noisy", "loud", "quiet",
    "dry", "clear", "hard", "soft", "heavy", "light", "strong", "weak", "tidy", "clean",
    "dirty", "empty", "full", "close", "thirsty", "hungry", "fat", "old", "fresh", "dead",
    "healthy", "sweet", "sour", "bitter", "salty", "good", "bad", "great", "important",
    "useful", "expensive", "cheap", "free", "difficult", "able", "rich", "afraid", "brave",
    "fine", "sad", "proud", "comfortable", "happy", "clever", "interesting", "famous",
    "exciting", "funny", "kind", "polite", "fair", "busy", "lazy", "lucky", "careful",
    "safe", "dangerous",
];

/// Animals and everyday objects.
pub const NOUNS: &[&str] = &[
    "rabbit", "badger", "fox", "chicken", "bat", "deer", "snake", "hare", "hedgehog",
    "platypus", "mole", "mouse", "otter", "rat", "squirrel", "stoat", "weasel", "crow",
    "dove", "duck", "goose", "hawk", "heron", "kingfisher", "owl", "peacock", "pheasant",
    "pigeon", "robin", "rook", "sparrow", "starling", "swan", "ant", "bee", "butterfly",
    "dragonfly", "fly", "moth", "spider", "pike", "salmon", "trout", "frog", "newt", "toad",
    "crab", "lobster", "clam", "cockle", "mussel", "oyster", "snail", "cow", "dog",
    "donkey", "goat", "horse", "pig", "sheep", "ferret", "gerbil", "guineapig", "parrot",
    "book", "table", "chair", "lamp", "phone", "computer", "window", "door",
];

/// Present-tense actions.
pub const VERBS: &[&str] = &[
    "sing", "play", "knit", "flounder", "dance", "listen", "run", "talk", "cuddle", "sit",
    "kiss", "hug", "whimper", "hide", "fight", "whisper", "cry", "snuggle", "walk", "drive",
    "loiter", "feel", "jump", "hop", "go", "marry", "engage", "sleep", "eat", "drink",
    "read", "write", "swim", "fly", "climb", "build", "create", "explore", "discover",
    "learn",
];

/// Manner words.
pub const ADVERBS: &[&str] = &[
    "jovially", "merrily", "cordially", "carefully", "correctly", "eagerly", "easily",
    "fast", "loudly", "patiently", "quickly", "quietly", "slowly", "gently", "firmly",
    "softly", "boldly", "bravely", "calmly", "clearly", "closely", "deeply", "directly",
    "exactly", "fairly", "freely", "fully",
];

/// Position words, always the last word component.
pub const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "from", "to", "of", "about", "under", "over",
    "through", "between", "among", "during", "before", "after", "above", "below", "beside",
    "behind", "beyond", "within", "without", "across",
];

/// Word lists in component order. Position `i` of an ID is drawn from `WORD_LISTS[i]`.
pub const WORD_LISTS: [&[&str]; 5] = [ADJECTIVES, NOUNS, VERBS, ADVERBS, PREPOSITIONS];

/// Highest number of word components an ID can carry.
pub const MAX_COMPONENTS: usize = WORD_LISTS.len();

/// Size of each word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub adjectives: usize,
    pub nouns: usize,
    pub verbs: usize,
    pub adverbs: usize,
    pub prepositions: usize,
}

impl DictionaryStats {
    /// List sizes in component order.
    pub fn sizes(&self) -> [usize; MAX_COMPONENTS] {
        [
            self.adjectives,
            self.nouns,
            self.verbs,
            self.adverbs,
            self.prepositions,
        ]
    }
}

/// Read-only view over every word list plus their sizes.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Dictionary {
    pub adjectives: &'static [&'static str],
    pub nouns: &'static [&'static str],
    pub verbs: &'static [&'static str],
    pub adverbs: &'static [&'static str],
    pub prepositions: &'static [&'static str],
    pub stats: DictionaryStats,
}

impl Dictionary {
    /// Word list for the given component position, if it exists.
    pub fn component(&self, position: usize) -> Option<&'static [&'static str]> {
        WORD_LISTS.get(position).copied()
    }
}

pub fn dictionary_stats() -> DictionaryStats {
    DictionaryStats {
        adjectives: ADJECTIVES.len(),
        nouns: NOUNS.len(),
        verbs: VERBS.len(),
        adverbs: ADVERBS.len(),
        prepositions: PREPOSITIONS.len(),
    }
}

pub fn dictionary() -> Dictionary {
    Dictionary {
        adjectives: ADJECTIVES,
        nouns: NOUNS,
        verbs: VERBS,
        adverbs: ADVERBS,
        prepositions: PREPOSITIONS,
        stats: dictionary_stats(),
    }
}
