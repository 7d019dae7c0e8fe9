//! The friendship rule between two words.
//!
//! Friendship is position-anchored: characters are only ever compared at the
//! same index. A single substitution is accepted between words of equal
//! length, and a length difference of one is accepted only when the extra
//! character sits at the very end. Insertions or deletions anywhere else do
//! not count, so this is deliberately narrower than edit distance one.

/// How two friendly words relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Same characters, same length
    Identical,
    /// Same length, exactly one position differs
    Substitution,
    /// The shorter word is the longer one minus its last character
    TrailingExtension,
}

impl Relation {
    /// Classify the relation between two words, or `None` if they are not
    /// friends.
    ///
    /// Lengths and positions are counted in `char`s.
    pub fn classify(word_a: &str, word_b: &str) -> Option<Self> {
        let len_a = word_a.chars().count();
        let len_b = word_b.chars().count();

        if len_a.abs_diff(len_b) > 1 {
            return None;
        }

        let (shorter, longer) = if len_a <= len_b {
            (word_a, word_b)
        } else {
            (word_b, word_a)
        };

        let mut mismatches = 0;
        for (s, l) in shorter.chars().zip(longer.chars()) {
            if s != l {
                mismatches += 1;
                if mismatches > 1 {
                    return None;
                }
            }
        }

        match (mismatches, len_a == len_b) {
            (0, true) => Some(Relation::Identical),
            (1, true) => Some(Relation::Substitution),
            (0, false) => Some(Relation::TrailingExtension),
            _ => None,
        }
    }

    /// Short label for display
    pub fn as_str(self) -> &'static str {
        match self {
            Relation::Identical => "identical",
            Relation::Substitution => "substitution",
            Relation::TrailingExtension => "trailing",
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check whether two words are friends.
///
/// Symmetric and pure: `are_friends(a, b) == are_friends(b, a)` for any pair.
pub fn are_friends(word_a: &str, word_b: &str) -> bool {
    Relation::classify(word_a, word_b).is_some()
}
