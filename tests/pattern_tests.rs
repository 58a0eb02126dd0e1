use std::collections::BTreeSet;
use word_sieve::{Pattern, PatternError, Position};

fn except(letters: &str) -> Position {
    Position::Except(letters.chars().collect::<BTreeSet<_>>())
}

#[test]
fn test_literals_and_wildcards() {
    let pattern = Pattern::parse("ap?l*").unwrap();
    assert_eq!(
        pattern.positions(),
        &[
            Position::Literal('a'),
            Position::Literal('p'),
            Position::Any,
            Position::Literal('l'),
            Position::Any,
        ]
    );
    assert_eq!(pattern.len(), 5);
}

#[test]
fn test_group_counts_as_one_position() {
    let pattern = Pattern::parse("a(pb)ple").unwrap();
    assert_eq!(pattern.len(), 5);
    assert_eq!(pattern.positions()[1], except("bp"));
}

#[test]
fn test_empty_input_is_valid_and_empty() {
    let pattern = Pattern::parse("").unwrap();
    assert!(pattern.is_empty());
}

#[test]
fn test_unterminated_group() {
    assert_eq!(Pattern::parse("(a"), Err(PatternError::UnmatchedOpen { at: 0 }));
    assert_eq!(Pattern::parse("ab(c"), Err(PatternError::UnmatchedOpen { at: 2 }));
}

#[test]
fn test_unmatched_close() {
    assert_eq!(Pattern::parse("ab)"), Err(PatternError::UnmatchedClose { at: 2 }));
    assert_eq!(
        Pattern::parse("(a))"),
        Err(PatternError::UnmatchedClose { at: 3 })
    );
}

#[test]
fn test_empty_group() {
    assert_eq!(Pattern::parse("a()"), Err(PatternError::EmptyGroup { at: 2 }));
}

#[test]
fn test_display_is_canonical() {
    let pattern = Pattern::parse("*(cbac)x").unwrap();
    assert_eq!(pattern.to_string(), "?(abc)x");
    assert_eq!(Pattern::parse(&pattern.to_string()).unwrap(), pattern);
}

#[test]
fn test_truncate_keeps_groups_whole() {
    let mut pattern = Pattern::parse("a(xyz)cde").unwrap();
    pattern.truncate(2);
    assert_eq!(pattern.to_string(), "a(xyz)");
}

#[test]
fn test_matches_position_by_position() {
    let pattern = Pattern::parse("a(pb)?le").unwrap();
    assert!(pattern.matches("angle"));
    assert!(!pattern.matches("apple"));
    assert!(!pattern.matches("angles"));
}
