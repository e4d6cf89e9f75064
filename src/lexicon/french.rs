use super::Lexicon;
use crate::models::{DurationUnit, Language};

const UNITS: &[(&str, u64)] = &[
    ("zéro", 0),
    ("zero", 0),
    ("un", 1),
    ("une", 1),
    ("deux", 2),
    ("trois", 3),
    ("quatre", 4),
    ("cinq", 5),
    ("six", 6),
    ("sept", 7),
    ("huit", 8),
    ("neuf", 9),
    ("dix", 10),
    ("onze", 11),
    ("douze", 12),
    ("treize", 13),
    ("quatorze", 14),
    ("quinze", 15),
    ("seize", 16),
    ("dix-sept", 17),
    ("dix-huit", 18),
    ("dix-neuf", 19),
];

// Belgian and Swiss forms sit beside the vigesimal ones.
const TENS: &[(&str, u64)] = &[
    ("vingt", 20),
    ("vingts", 20),
    ("trente", 30),
    ("quarante", 40),
    ("cinquante", 50),
    ("soixante", 60),
    ("septante", 70),
    ("huitante", 80),
    ("octante", 80),
    ("nonante", 90),
];

const SCALES: &[(&str, u64)] = &[
    ("mille", 1_000),
    ("million", 1_000_000),
    ("millions", 1_000_000),
    ("milliard", 1_000_000_000),
    ("milliards", 1_000_000_000),
];

const HEDGES: &[(&str, Option<f64>)] = &[
    ("environ", Some(0.10)),
    ("approximativement", Some(0.05)),
    ("à peu près", Some(0.15)),
    ("a peu pres", Some(0.15)),
    ("aux alentours de", Some(0.10)),
    ("autour de", Some(0.10)),
    ("presque", Some(0.05)),
    ("vers", None),
    ("~", Some(0.10)),
];

const DURATION_UNITS: &[(&str, DurationUnit)] = &[
    ("minute", DurationUnit::Minute),
    ("minutes", DurationUnit::Minute),
    ("heure", DurationUnit::Hour),
    ("heures", DurationUnit::Hour),
    ("jour", DurationUnit::Day),
    ("jours", DurationUnit::Day),
    ("journée", DurationUnit::Day),
    ("journées", DurationUnit::Day),
    ("semaine", DurationUnit::Week),
    ("semaines", DurationUnit::Week),
    ("mois", DurationUnit::Month),
];

pub(super) fn lexicon() -> Lexicon {
    Lexicon::builder(Language::French)
        .units(UNITS)
        .tens(TENS)
        .hundreds(&["cent", "cents"])
        .scales(SCALES)
        .connectors(&["et"])
        .hedges(HEDGES)
        .duration_units(DURATION_UNITS)
        .conjunctions(&["et"])
        .teen_tens(&[60, 80])
        .multiplied_tens(&[(4, 20)])
        .ambiguous(&["un", "une", "neuf"])
        .build()
}
