//! End-to-end normalization scenarios.
//!
//! Every test drives the public `TagNormalizer` API with an explicit default
//! configuration so results do not depend on the environment.

use anyhow::Result;
use tagnorm::{DurationUnit, Language, MatchKind, NormalizedTag, NormalizerConfig, TagNormalizer};

fn normalizer() -> TagNormalizer {
    TagNormalizer::builder()
        .config(NormalizerConfig::default())
        .build()
}

/// Checks that retained matches are ordered, disjoint and point back at
/// the original text.
fn assert_matches_reconstruct(tag: &NormalizedTag) {
    let chars: Vec<char> = tag.original_text().chars().collect();
    let mut previous_end = 0;

    for m in tag.matches() {
        let span = m.span();
        assert!(
            span.start() >= previous_end,
            "matches overlap or are unordered: {:?}",
            tag.matches()
        );
        assert!(span.end() <= chars.len());
        let slice: String = chars[span.start()..span.end()].iter().collect();
        assert_eq!(slice, m.matched_text());
        previous_end = span.end();
    }
}

// =============================================================================
// Compound durations
// =============================================================================

#[test]
fn compound_duration_is_one_time_unit() -> Result<()> {
    let tag = normalizer()
        .normalize_tag("Le projet prendra 10 jours et 5 heures.", Language::French)?;

    assert_eq!(tag.matches().len(), 1);
    let m = &tag.matches()[0];
    assert_eq!(m.kind(), MatchKind::TimeUnit);
    assert_eq!(m.matched_text(), "10 jours et 5 heures");

    let duration = m.as_time_unit().expect("time unit payload");
    let units: Vec<DurationUnit> = duration.components().iter().map(|c| c.unit()).collect();
    assert_eq!(units, vec![DurationUnit::Day, DurationUnit::Hour]);
    assert_eq!(duration.total_in_minutes(), 14_700.0);

    assert_eq!(tag.normalized_text(), "Le projet prendra 14700min.");
    assert_matches_reconstruct(&tag);
    Ok(())
}

#[test]
fn english_compound_with_spelled_out_numbers() -> Result<()> {
    let tag = normalizer()
        .normalize_tag("Pairing: two hours and fifteen minutes", Language::English)?;

    assert_eq!(tag.time_units().count(), 1);
    assert_eq!(tag.textual_numbers().count(), 0);
    assert_eq!(tag.normalized_text(), "Pairing: 135min");
    Ok(())
}

// =============================================================================
// Priority between overlapping candidates
// =============================================================================

#[test]
fn approximate_wins_over_time_unit_and_number() -> Result<()> {
    let tag = normalizer().normalize_tag("environ vingt jours de tests", Language::French)?;

    assert_eq!(tag.matches().len(), 1);
    assert_eq!(tag.approximate_expressions().count(), 1);
    assert_eq!(tag.time_units().count(), 0);
    assert_eq!(tag.textual_numbers().count(), 0);

    let payload = tag.matches()[0].as_approximate().expect("approximate payload");
    assert_eq!(payload.value(), 20.0);
    assert_eq!(payload.precision(), 0.10);
    assert_eq!(tag.normalized_text(), "≈28800min de tests");
    Ok(())
}

#[test]
fn time_unit_wins_over_textual_number() -> Result<()> {
    let tag = normalizer()
        .normalize_tag("La première tâche prendra vingt jours.", Language::French)?;

    assert_eq!(tag.matches().len(), 1);
    let duration = tag.matches()[0].as_time_unit().expect("time unit payload");
    assert_eq!(duration.value(), 20.0);
    assert_eq!(duration.unit(), DurationUnit::Day);
    Ok(())
}

#[test]
fn independent_expressions_are_all_kept() -> Result<()> {
    let tag = normalizer().normalize_tag(
        "trois développeurs, environ 2 semaines et 4 jours de revue",
        Language::French,
    )?;

    let kinds: Vec<MatchKind> = tag.matches().iter().map(|m| m.kind()).collect();
    assert_eq!(kinds, vec![MatchKind::TextualNumber, MatchKind::ApproximateExpression]);
    assert_eq!(tag.normalized_text(), "3 développeurs, ≈25920min de revue");
    assert_matches_reconstruct(&tag);
    Ok(())
}

// =============================================================================
// Rewriting properties
// =============================================================================

#[test]
fn matches_reconstruct_the_original_text() -> Result<()> {
    let samples = [
        ("Sprint de deux semaines avec quatre-vingts tickets", Language::French),
        ("à peu près 3 mois, puis cent vingt heures", Language::French),
        (
            "about twenty-one days and roughly 40 hours, then one hundred and five tasks",
            Language::English,
        ),
        ("~10 reviews in 1 week and 2 days", Language::English),
    ];

    let normalizer = normalizer();
    for (text, language) in samples {
        let tag = normalizer.normalize_tag(text, language)?;
        assert!(!tag.matches().is_empty(), "expected matches in {text:?}");
        assert_matches_reconstruct(&tag);
    }
    Ok(())
}

#[test]
fn renormalizing_finds_nothing_new() -> Result<()> {
    let samples = [
        ("Le projet prendra environ 10 jours.", Language::French),
        ("vingt-cinq tickets et trois bugs", Language::French),
        ("about 10 tickets, nearly 3 weeks", Language::English),
        ("1 hour and 30 minutes", Language::English),
    ];

    let normalizer = normalizer();
    for (text, language) in samples {
        let first = normalizer.normalize_tag(text, language)?;
        let second = normalizer.normalize_tag(first.normalized_text(), language)?;

        assert_eq!(second.approximate_expressions().count(), 0, "{text:?}");
        assert_eq!(second.textual_numbers().count(), 0, "{text:?}");
        assert_eq!(second.normalized_text(), first.normalized_text());
    }
    Ok(())
}

#[test]
fn uncomposable_number_runs_are_left_whole() -> Result<()> {
    let samples = [
        ("hundred hundred days", Language::English),
        ("deux et trois jours", Language::French),
        ("environ deux et trois jours", Language::French),
    ];

    let normalizer = normalizer();
    for (text, language) in samples {
        let first = normalizer.normalize_tag(text, language)?;
        assert!(first.matches().is_empty(), "{text:?}: {:?}", first.matches());
        assert_eq!(first.normalized_text(), text);

        let second = normalizer.normalize_tag(first.normalized_text(), language)?;
        assert!(second.matches().is_empty(), "{text:?}: {:?}", second.matches());
    }
    Ok(())
}

#[test]
fn articles_are_not_rewritten_as_numbers() -> Result<()> {
    let normalizer = normalizer();

    let tag = normalizer.normalize_tag("Créer une API", Language::French)?;
    assert_eq!(tag.normalized_text(), "Créer une API");

    let tag = normalizer.normalize_tag("un projet neuf", Language::French)?;
    assert_eq!(tag.normalized_text(), "un projet neuf");

    let tag =
        normalizer.normalize_tag("une semaine et vingt et un tickets", Language::French)?;
    assert_eq!(tag.normalized_text(), "10080min et 21 tickets");
    Ok(())
}

#[test]
fn text_without_expressions_round_trips() -> Result<()> {
    let tag = normalizer().normalize_tag("Migration base de données", Language::French)?;

    assert!(!tag.is_changed());
    assert_eq!(tag.normalized_text(), tag.original_text());
    Ok(())
}

#[test]
fn empty_text_is_unchanged() -> Result<()> {
    let tag = normalizer().normalize_tag("", Language::English)?;

    assert!(tag.matches().is_empty());
    assert_eq!(tag.normalized_text(), "");
    Ok(())
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn custom_prefix_and_suffix_are_used() -> Result<()> {
    let normalizer = TagNormalizer::builder()
        .config(NormalizerConfig {
            approximate_prefix: "approx ".to_string(),
            duration_suffix: " min".to_string(),
            ..NormalizerConfig::default()
        })
        .build();

    let tag = normalizer.normalize_tag("about 2 hours", Language::English)?;
    assert_eq!(tag.normalized_text(), "approx 120 min");
    Ok(())
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn shared_normalizer_across_threads() {
    let normalizer = normalizer();
    let inputs = [
        ("Le projet prendra environ 10 jours.", Language::French, "Le projet prendra ≈14400min."),
        ("vingt-cinq jours", Language::French, "36000min"),
        ("1 hour and 30 minutes", Language::English, "90min"),
        ("about 10 tickets", Language::English, "≈10 tickets"),
    ];

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for (text, language, expected) in inputs {
                    let tag = normalizer
                        .normalize_tag(text, language)
                        .expect("built-in languages are supported");
                    assert_eq!(tag.normalized_text(), expected);
                }
            });
        }
    });
}
