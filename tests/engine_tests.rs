use word_sieve::{
    ConstraintSet, Dictionary, DictionaryState, Disabled, Engine, EngineConfig, EvalError, Field,
    FieldEdit, LoadError, Matcher, Outcome, Pattern, PatternError, Rejection,
};

fn get_test_words() -> Dictionary {
    Dictionary::from_words(["apple", "apply", "angle"], &EngineConfig::default()).unwrap()
}

fn get_test_engine() -> Engine {
    Engine::with_dictionary(EngineConfig::default(), get_test_words())
}

fn matches(engine: &mut Engine) -> Vec<String> {
    match engine.evaluate().unwrap() {
        Outcome::Matches(words) => words.clone(),
        Outcome::NoMatches => vec![],
        Outcome::NotRun => panic!("evaluation did not run"),
    }
}

#[test]
fn test_scenario_known_letter_only() {
    let mut engine = get_test_engine();
    engine.set_length(5);
    engine.edit_known("a");
    assert_eq!(matches(&mut engine), vec!["angle", "apple", "apply"]);
}

#[test]
fn test_scenario_wildcard_pattern() {
    let mut engine = get_test_engine();
    assert!(engine.edit_pattern("appl?").is_accepted());
    engine.edit_known("a");
    // Known letters become wildcards in the pattern, in place.
    assert_eq!(engine.constraints().pattern.to_string(), "?ppl?");
    assert!(engine.can_evaluate());

    let mut engine = get_test_engine();
    engine.edit_known("a");
    assert!(engine.edit_pattern("appl?").is_accepted());
    assert_eq!(matches(&mut engine), vec!["apple", "apply"]);
}

#[test]
fn test_known_edit_keeps_pattern_aligned() {
    let mut engine = get_test_engine();
    engine.edit_known("a");
    assert!(engine.edit_pattern("appl?").is_accepted());
    engine.edit_known("ae");
    assert_eq!(engine.constraints().pattern.to_string(), "?ppl?");
    assert_eq!(engine.constraints().pattern.len(), 5);
    assert_eq!(matches(&mut engine), vec!["apple"]);
}

#[test]
fn test_scenario_exclusion_group() {
    let mut engine = get_test_engine();
    engine.edit_known("a");
    assert!(engine.edit_pattern("a(pb)ple").is_accepted());
    assert_eq!(engine.evaluate().unwrap(), &Outcome::NoMatches);
}

#[test]
fn test_scenario_missing_known_letter_is_empty_not_error() {
    let mut engine = get_test_engine();
    engine.edit_known("z");
    assert_eq!(engine.outcome(), &Outcome::NotRun);
    assert_eq!(engine.evaluate().unwrap(), &Outcome::NoMatches);
}

#[test]
fn test_scenario_unterminated_group_rejected() {
    let mut engine = get_test_engine();
    let edit = engine.edit_pattern("(a");
    assert_eq!(
        edit,
        FieldEdit::Rejected(Rejection::Malformed(PatternError::UnmatchedOpen { at: 0 }))
    );
    assert!(engine.constraints().pattern.is_empty());
    assert!(!engine.can_evaluate());
    assert!(matches!(
        engine.evaluate(),
        Err(EvalError::Disabled(Disabled::MalformedPattern(Rejection::Malformed(
            PatternError::UnmatchedOpen { at: 0 }
        ))))
    ));
    assert_eq!(engine.outcome(), &Outcome::NotRun);

    assert!(engine.edit_pattern("(a)????").is_accepted());
    assert!(engine.pattern_rejection().is_none());
    assert!(engine.can_evaluate());
}

#[test]
fn test_rejected_edit_keeps_previous_pattern() {
    let mut engine = get_test_engine();
    assert!(engine.edit_pattern("ap(x)").is_accepted());
    assert!(!engine.edit_pattern("ap(x").is_accepted());
    assert_eq!(engine.constraints().pattern.to_string(), "ap(x)");
    assert!(!engine.can_evaluate());
}

#[test]
fn test_pattern_longer_than_length_rejected() {
    let mut engine = get_test_engine();
    assert_eq!(
        engine.edit_pattern("apples"),
        FieldEdit::Rejected(Rejection::TooLong {
            positions: 6,
            length: 5
        })
    );
    assert!(!engine.can_evaluate());

    engine.set_length(6);
    assert!(engine.pattern_rejection().is_none());
    assert_eq!(engine.constraints().pattern.to_string(), "apples");
}

#[test]
fn test_short_pattern_disables_evaluation() {
    let mut engine = get_test_engine();
    assert!(engine.edit_pattern("ap?").is_accepted());
    assert!(!engine.can_evaluate());
    assert!(matches!(
        engine.evaluate(),
        Err(EvalError::Disabled(Disabled::LengthMismatch {
            positions: 3,
            length: 5
        }))
    ));
    assert!(engine.edit_pattern("ap???").is_accepted());
    assert!(engine.can_evaluate());
}

#[test]
fn test_known_and_dead_stay_disjoint() {
    let mut engine = get_test_engine();
    engine.edit_dead("xyzab");
    engine.edit_known("ab");
    assert_eq!(engine.constraints().known, "ab");
    assert_eq!(engine.constraints().dead, "xyz");

    engine.edit_dead("abcd");
    assert_eq!(engine.constraints().known, "ab");
    assert_eq!(engine.constraints().dead, "cd");
}

#[test]
fn test_dead_letters_removed_from_pattern() {
    let mut engine = get_test_engine();
    assert!(engine.edit_pattern("s(t)ar").is_accepted());
    engine.edit_dead("s");
    assert_eq!(engine.constraints().pattern.to_string(), "?(t)ar");
}

#[test]
fn test_length_change_truncates_fields() {
    let mut engine = get_test_engine();
    engine.edit_known("abcde");
    assert!(engine.edit_pattern("a(xy)cde").is_accepted());
    engine.set_length(3);
    assert_eq!(engine.constraints().length, 3);
    assert_eq!(engine.constraints().known, "abc");
    assert_eq!(engine.constraints().pattern.to_string(), "a(xy)c");
}

#[test]
fn test_length_is_clamped_to_config() {
    let mut engine = get_test_engine();
    engine.set_length(0);
    assert_eq!(engine.constraints().length, 1);
    engine.set_length(500);
    assert_eq!(engine.constraints().length, 20);
}

#[test]
fn test_edit_dispatch() {
    let mut engine = get_test_engine();
    engine.edit(Field::Length, "4");
    engine.edit(Field::Known, "E");
    engine.edit(Field::Dead, "q");
    assert_eq!(
        engine.edit(Field::Length, "not a number"),
        FieldEdit::Rejected(Rejection::NotANumber("not a number".to_string()))
    );
    assert!(!engine.edit(Field::Length, "0").is_accepted());
    assert!(engine.edit(Field::Pattern, "?(a)??").is_accepted());
    let constraints = engine.constraints();
    assert_eq!(constraints.length, 4);
    assert_eq!(constraints.known, "e");
    assert_eq!(constraints.dead, "q");
}

#[test]
fn test_clear_resets_fields_and_outcome() {
    let mut engine = get_test_engine();
    engine.set_length(5);
    engine.edit_known("a");
    engine.edit_dead("z");
    engine.edit_pattern("ap???");
    engine.evaluate().unwrap();
    assert!(!engine.edit_pattern("a)").is_accepted());
    engine.clear();
    assert_eq!(engine.constraints(), &ConstraintSet::new(5));
    assert_eq!(engine.outcome(), &Outcome::NotRun);
    assert!(engine.pattern_rejection().is_none());
    assert!(engine.can_evaluate());
}

#[test]
fn test_evaluation_disabled_without_dictionary() {
    let mut engine = Engine::new(EngineConfig::default(), DictionaryState::Loading);
    assert!(matches!(
        engine.evaluate(),
        Err(EvalError::Disabled(Disabled::DictionaryLoading))
    ));

    let failed = DictionaryState::from_result(Err(LoadError::Empty));
    let mut engine = Engine::new(EngineConfig::default(), failed);
    assert!(matches!(
        engine.evaluate(),
        Err(EvalError::Disabled(Disabled::DictionaryFailed(_)))
    ));
    assert_eq!(engine.outcome(), &Outcome::NotRun);
}

#[test]
fn test_literal_pattern_round_trip() {
    let config = EngineConfig::default();
    let dictionary = Dictionary::from_words(["crane"], &config).unwrap();
    let mut engine = Engine::with_dictionary(config, dictionary);
    assert!(engine.edit_pattern("crane").is_accepted());
    assert_eq!(matches(&mut engine), vec!["crane"]);
}

#[test]
fn test_results_keep_dictionary_order() {
    let dictionary = word_sieve::load_dictionary().unwrap();
    let constraints = ConstraintSet::new(5)
        .with_known("e")
        .with_pattern(Pattern::parse("?????").unwrap());
    let matcher = Matcher::compile(&constraints).unwrap();
    let results = word_sieve::engine::evaluate(&dictionary, &matcher);
    assert!(!results.is_empty());
    assert!(results.windows(2).all(|w| w[0] < w[1]));
    assert!(results.iter().all(|w| w.len() == 5 && w.contains('e')));
    assert!(results.iter().all(|w| dictionary.contains(w)));
}
