use sitiometrics::comparison::ranking::rank_subjects;
use sitiometrics::models::comparison::Polarity;

fn values(pairs: &[(&str, Option<f64>)]) -> Vec<(String, Option<f64>)> {
    pairs
        .iter()
        .map(|(id, v)| (id.to_string(), *v))
        .collect()
}

#[test]
fn ties_share_the_lower_rank_and_skip_the_next() {
    // Standard competition ranking: two tied leaders at 1, next at 3.
    let ranks = rank_subjects(
        &values(&[("a", Some(10.0)), ("b", Some(10.0)), ("c", Some(5.0))]),
        Polarity::Positive,
    );
    assert_eq!(ranks["a"], 1);
    assert_eq!(ranks["b"], 1);
    assert_eq!(ranks["c"], 3);
}

#[test]
fn positive_polarity_ranks_descending() {
    let ranks = rank_subjects(
        &values(&[("low", Some(1.0)), ("high", Some(9.0)), ("mid", Some(5.0))]),
        Polarity::Positive,
    );
    assert_eq!(ranks["high"], 1);
    assert_eq!(ranks["mid"], 2);
    assert_eq!(ranks["low"], 3);
}

#[test]
fn negative_polarity_ranks_ascending() {
    let ranks = rank_subjects(
        &values(&[("low", Some(1.0)), ("high", Some(9.0)), ("mid", Some(5.0))]),
        Polarity::Negative,
    );
    assert_eq!(ranks["low"], 1);
    assert_eq!(ranks["mid"], 2);
    assert_eq!(ranks["high"], 3);
}

#[test]
fn neutral_polarity_ranks_descending_by_convention() {
    let ranks = rank_subjects(
        &values(&[("small", Some(100.0)), ("big", Some(900.0))]),
        Polarity::Neutral,
    );
    assert_eq!(ranks["big"], 1);
    assert_eq!(ranks["small"], 2);
}

#[test]
fn null_values_get_no_rank_at_all() {
    let ranks = rank_subjects(
        &values(&[("a", Some(10.0)), ("missing", None), ("b", Some(5.0))]),
        Polarity::Positive,
    );
    assert_eq!(ranks.len(), 2);
    assert!(!ranks.contains_key("missing"));
    assert_eq!(ranks["a"], 1);
    assert_eq!(ranks["b"], 2);
}

#[test]
fn tied_electrification_scenario() {
    let ranks = rank_subjects(
        &values(&[
            ("sitioA", Some(40.0)),
            ("sitioB", Some(40.0)),
            ("sitioC", Some(90.0)),
        ]),
        Polarity::Positive,
    );
    assert_eq!(ranks["sitioC"], 1);
    assert_eq!(ranks["sitioA"], 2);
    assert_eq!(ranks["sitioB"], 2);
}

#[test]
fn empty_input_yields_empty_ranking() {
    let ranks = rank_subjects(&[], Polarity::Positive);
    assert!(ranks.is_empty());
}
