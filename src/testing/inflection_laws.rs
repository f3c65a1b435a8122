use crate::Inflections;

/// Assert that a registry satisfies the laws every rule set must keep:
///
/// 1. `uncountables_are_fixed_points` → no uncountable word is ever rewritten
/// 2. `irregulars_round_trip` → each pair maps both ways and is stable
/// 3. `pluralize_is_idempotent` → pluralizing a plural changes nothing
/// 4. `singularize_is_idempotent` → singularizing a singular changes nothing
/// 5. `empty_word_passes_through`
#[macro_export]
macro_rules! assert_inflection_laws {
    ($inflections:expr, irregulars: $irregulars:expr, words: $words:expr) => {
        $crate::testing::inflection_laws::uncountables_are_fixed_points($inflections);
        $crate::testing::inflection_laws::irregulars_round_trip($inflections, $irregulars);
        $crate::testing::inflection_laws::pluralize_is_idempotent($inflections, $words);
        $crate::testing::inflection_laws::singularize_is_idempotent($inflections, $words);
        $crate::testing::inflection_laws::empty_word_passes_through($inflections);
    };
}

pub fn uncountables_are_fixed_points(inf: &Inflections) {
    for word in inf.uncountables() {
        assert_eq!(inf.pluralize(word), word, "uncountable `{word}` was pluralized");
        assert_eq!(inf.singularize(word), word, "uncountable `{word}` was singularized");
    }
}

pub fn irregulars_round_trip(inf: &Inflections, pairs: &[(&str, &str)]) {
    for &(singular, plural) in pairs {
        assert_eq!(inf.pluralize(singular), plural, "pluralize({singular})");
        assert_eq!(inf.singularize(plural), singular, "singularize({plural})");
        assert_eq!(inf.pluralize(plural), plural, "pluralize({plural}) not stable");
        assert_eq!(inf.singularize(singular), singular, "singularize({singular}) not stable");
    }
}

pub fn pluralize_is_idempotent(inf: &Inflections, words: &[&str]) {
    for word in words {
        let once = inf.pluralize(word);
        let twice = inf.pluralize(&once);
        assert_eq!(once, twice, "pluralize not idempotent on `{word}`");
    }
}

pub fn singularize_is_idempotent(inf: &Inflections, words: &[&str]) {
    for word in words {
        let once = inf.singularize(word);
        let twice = inf.singularize(&once);
        assert_eq!(once, twice, "singularize not idempotent on `{word}`");
    }
}

pub fn empty_word_passes_through(inf: &Inflections) {
    assert_eq!(inf.pluralize(""), "");
    assert_eq!(inf.singularize(""), "");
}
