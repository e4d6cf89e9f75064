use super::Lexicon;
use crate::models::{DurationUnit, Language};

const UNITS: &[(&str, u64)] = &[
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
];

const TENS: &[(&str, u64)] = &[
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

const SCALES: &[(&str, u64)] = &[
    ("thousand", 1_000),
    ("million", 1_000_000),
    ("billion", 1_000_000_000),
];

const HEDGES: &[(&str, Option<f64>)] = &[
    ("about", Some(0.10)),
    ("approximately", Some(0.05)),
    ("around", Some(0.10)),
    ("roughly", Some(0.15)),
    ("nearly", Some(0.05)),
    ("circa", None),
    ("~", Some(0.10)),
];

const DURATION_UNITS: &[(&str, DurationUnit)] = &[
    ("minute", DurationUnit::Minute),
    ("minutes", DurationUnit::Minute),
    ("hour", DurationUnit::Hour),
    ("hours", DurationUnit::Hour),
    ("day", DurationUnit::Day),
    ("days", DurationUnit::Day),
    ("week", DurationUnit::Week),
    ("weeks", DurationUnit::Week),
    ("month", DurationUnit::Month),
    ("months", DurationUnit::Month),
];

pub(super) fn lexicon() -> Lexicon {
    Lexicon::builder(Language::English)
        .units(UNITS)
        .tens(TENS)
        .hundreds(&["hundred"])
        .scales(SCALES)
        .connectors(&["and"])
        .hedges(HEDGES)
        .duration_units(DURATION_UNITS)
        .conjunctions(&["and"])
        .ambiguous(&["one"])
        .build()
}
