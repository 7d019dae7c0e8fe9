use word_friends::{are_friends, Relation};

fn sample_words() -> Vec<&'static str> {
    vec![
        "", "a", "b", "ab", "ba", "cat", "cats", "cot", "cut", "ceat", "at", "dog", "dogs",
        "doge", "catsup", "hot", "hog", "café", "cafe", "cafés",
    ]
}

#[test]
fn test_identical_words_are_friends() {
    for word in sample_words() {
        assert!(are_friends(word, word), "{:?} should be its own friend", word);
        assert_eq!(Relation::classify(word, word), Some(Relation::Identical));
    }
}

#[test]
fn test_symmetry() {
    let words = sample_words();
    for a in &words {
        for b in &words {
            assert_eq!(
                are_friends(a, b),
                are_friends(b, a),
                "asymmetric for {:?} / {:?}",
                a,
                b
            );
            assert_eq!(Relation::classify(a, b), Relation::classify(b, a));
        }
    }
}

#[test]
fn test_single_substitution() {
    assert!(are_friends("cat", "cot"));
    assert!(are_friends("cat", "cut"));
    assert!(are_friends("hot", "hog"));
    assert_eq!(Relation::classify("cat", "bat"), Some(Relation::Substitution));
    assert_eq!(Relation::classify("cat", "cab"), Some(Relation::Substitution));
}

#[test]
fn test_two_substitutions_rejected() {
    assert!(!are_friends("cat", "dog"));
    assert!(!are_friends("cat", "cog"));
    assert!(!are_friends("ab", "ba"));
    assert!(Relation::classify("hot", "dog").is_none());
}

#[test]
fn test_trailing_extension() {
    assert!(are_friends("cat", "cats"));
    assert!(are_friends("cats", "cat"));
    assert!(are_friends("dog", "doge"));
    assert_eq!(
        Relation::classify("cat", "cats"),
        Some(Relation::TrailingExtension)
    );
}

#[test]
fn test_insertion_not_at_end_rejected() {
    assert!(!are_friends("cat", "ceat"));
    assert!(!are_friends("cat", "scat"));
    assert!(!are_friends("cat", "caat"));
    assert!(!are_friends("at", "cat"));
}

#[test]
fn test_substitution_plus_extension_rejected() {
    assert!(!are_friends("cat", "cots"));
    assert!(!are_friends("dog", "dugs"));
}

#[test]
fn test_length_difference_over_one_rejected() {
    assert!(!are_friends("cat", "catsup"));
    assert!(!are_friends("", "ab"));
    assert!(!are_friends("a", "abc"));
}

#[test]
fn test_equal_length_iff_at_most_one_difference() {
    let words = sample_words();
    for a in &words {
        for b in &words {
            let (a_chars, b_chars): (Vec<char>, Vec<char>) = (a.chars().collect(), b.chars().collect());
            if a_chars.len() != b_chars.len() {
                continue;
            }
            let differences = a_chars.iter().zip(&b_chars).filter(|(x, y)| x != y).count();
            assert_eq!(are_friends(a, b), differences <= 1, "{:?} / {:?}", a, b);
        }
    }
}

#[test]
fn test_one_longer_iff_prefix() {
    let words = sample_words();
    for a in &words {
        for b in &words {
            if b.chars().count() == a.chars().count() + 1 {
                assert_eq!(are_friends(a, b), b.starts_with(a), "{:?} / {:?}", a, b);
            }
        }
    }
}

#[test]
fn test_empty_word() {
    assert!(are_friends("", ""));
    assert!(are_friends("", "a"));
    assert!(are_friends("z", ""));
    assert!(!are_friends("", "ab"));
}

#[test]
fn test_lengths_counted_in_chars() {
    assert!(are_friends("café", "cafe"));
    assert!(are_friends("café", "cafés"));
    assert!(!are_friends("cafe", "cafés"));
}

#[test]
fn test_relation_display() {
    assert_eq!(Relation::Identical.to_string(), "identical");
    assert_eq!(Relation::Substitution.to_string(), "substitution");
    assert_eq!(Relation::TrailingExtension.to_string(), "trailing");
}
