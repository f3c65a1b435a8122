#[cfg(test)]
mod integration_tests {
    use crate::{InflectionError, Inflections, Scope, configure, instance, pluralize, singularize};
    use crate::rules::english::IRREGULARS;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const WORDS: &[&str] = &[
        "cat", "cats", "city", "cities", "box", "boxes", "bus", "buses", "status", "statuses",
        "analysis", "analyses", "mouse", "mice", "ox", "oxen", "octopi", "news", "half", "halves",
        "wives", "quizzes", "matrices", "vertices", "people", "children",
    ];

    #[test]
    fn bundled_english_keeps_every_law() {
        let inf = Inflections::english("en_US");
        crate::assert_inflection_laws!(&inf, irregulars: IRREGULARS, words: WORDS);
    }

    #[test]
    fn laws_survive_custom_rules() -> TestResult {
        let mut inf = Inflections::english("en_US");
        inf.irregular("octopus", "octopodes")?
            .irregular("goose", "geese")?
            .uncountable(["equipment", "luggage"])?;
        crate::assert_inflection_laws!(
            &inf,
            irregulars: &[("octopus", "octopodes"), ("goose", "geese")],
            words: WORDS
        );
        Ok(())
    }

    #[test]
    fn configured_rules_apply_through_top_level_functions() -> TestResult {
        let locale = Some("en_INTEGRATION");
        {
            let mut cfg = configure(locale);
            cfg.plural("(?i)^(ox)$", "${1}es")?
                .singular("(?i)^(ox)es$", "${1}")?
                .irregular("cactus", "cacti")?
                .uncountable(["luggage"])?;
        }
        assert_eq!(pluralize("ox", locale), "oxes");
        assert_eq!(singularize("oxes", locale), "ox");
        assert_eq!(pluralize("cactus", locale), "cacti");
        assert_eq!(pluralize("luggage", locale), "luggage");
        assert_eq!(pluralize("ox", Some("en_US")), "oxen");
        Ok(())
    }

    #[test]
    fn registries_are_isolated_by_locale() -> TestResult {
        configure(Some("en_ISOLATED")).clear(Scope::All);
        assert_eq!(pluralize("person", Some("en_ISOLATED")), "person");
        assert_eq!(pluralize("person", Some("en_US")), "people");
        Ok(())
    }

    #[test]
    fn non_english_locale_needs_its_own_rules() -> TestResult {
        let locale = Some("nl_TEST");
        assert_eq!(pluralize("kat", locale), "kat");
        configure(locale).plural("(?i)$", "ten")?.plural("(?i)(k)ind$", "${1}inderen")?;
        assert_eq!(pluralize("kat", locale), "katten");
        assert_eq!(pluralize("kind", locale), "kinderen");
        Ok(())
    }

    #[test]
    fn claimed_uncountable_becomes_countable() -> TestResult {
        let mut inf = Inflections::english("en_US");
        assert_eq!(inf.pluralize("fish"), "fish");
        inf.irregular("fish", "fishes")?;
        assert!(!inf.is_uncountable("fish"));
        assert_eq!(inf.pluralize("fish"), "fishes");
        assert_eq!(inf.singularize("fishes"), "fish");
        Ok(())
    }

    #[test]
    fn acronyms_added_late_reach_cached_patterns() {
        let mut inf = Inflections::english("en_US");
        assert_eq!(inf.underscore("MyHTMLParser"), "my_html_parser");
        assert_eq!(inf.camelize("html_parser", true), "HtmlParser");
        inf.acronym(["HTML"]);
        assert_eq!(inf.camelize("html_parser", true), "HTMLParser");
        assert_eq!(inf.underscore("HTMLParser"), "_html_parser");
        assert!(inf.acronym_pattern().is_some_and(|p| p.contains("HTML")));
        assert!(inf.acronym_camelize_pattern().is_some_and(|p| p.contains("HTML")));
        assert!(inf.acronym_underscore_pattern().is_some_and(|p| p.contains("HTML")));
    }

    #[test]
    fn clear_by_name_validates_first() {
        let mut cfg = configure(Some("en_CLEAR"));
        let before = cfg.plurals().len();
        assert!(matches!(cfg.clear_named("everything"), Err(InflectionError::InvalidScope(_))));
        assert_eq!(cfg.plurals().len(), before);
    }

    #[test]
    fn readers_share_one_registry_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| pluralize("person", Some("en_US"))))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().ok().as_deref(), Some("people"));
        }
        assert!(std::sync::Arc::ptr_eq(&instance(Some("en_US")), &instance(Some("en_US"))));
    }
}
