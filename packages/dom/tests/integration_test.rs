//! End-to-end tests: load a localeSet file, validate it, query it and write
//! it back out.
//!
//! Uses the fixtures under `tests/fixtures/localeset/`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use xfa_dom::locale::{LocaleSet, PatternStyle};
use xfa_dom::pattern::format_date;
use xfa_dom::schema::{ElementKind, PacketKind, PropertyEntry};
use xfa_dom::tree::{Document, NodeState};
use xfa_dom::validate::{check_append, validate};
use xfa_dom::writer::{to_xml, to_yaml};
use xfa_dom::{load_file, load_str, DomError, LoadOptions};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("localeset")
        .join(name)
}

fn load_fixture(name: &str) -> Document {
    load_file(&fixture(name), &LoadOptions::new().strict())
        .unwrap_or_else(|e| panic!("Failed to load {name}: {e}"))
        .document
}

#[test]
fn test_construct_date_patterns_end_to_end() {
    let mut doc = Document::new(PacketKind::LocaleSet);
    let n = doc
        .create_node(ElementKind::DatePatterns, PacketKind::LocaleSet)
        .unwrap();
    let node = doc.node(n).unwrap();

    assert_eq!(node.kind(), ElementKind::DatePatterns);
    assert_eq!(node.packet(), PacketKind::LocaleSet);
    assert_eq!(node.children().len(), 0);
    assert_eq!(node.state(), NodeState::Unattached);
    assert_eq!(
        node.property_table().raw()[0],
        PropertyEntry::new(ElementKind::DatePattern, 0, 4)
    );
    assert_eq!(node.property_table().raw()[1], PropertyEntry::SENTINEL);
}

#[test]
fn test_fifth_date_pattern_rejected_by_validator_not_factory() {
    let mut doc = Document::new(PacketKind::LocaleSet);
    let patterns = doc
        .create_node(ElementKind::DatePatterns, PacketKind::LocaleSet)
        .unwrap();

    for _ in 0..4 {
        check_append(&doc, patterns, ElementKind::DatePattern).unwrap();
        let child = doc
            .create_node(ElementKind::DatePattern, PacketKind::LocaleSet)
            .unwrap();
        doc.append_child(patterns, child).unwrap();
    }

    // The factory still constructs a fifth node; only the validator refuses it.
    let fifth = doc.create_node(ElementKind::DatePattern, PacketKind::LocaleSet);
    assert!(fifth.is_ok());
    assert!(matches!(
        check_append(&doc, patterns, ElementKind::DatePattern),
        Err(DomError::TooManyChildren { max: 4, .. })
    ));
}

#[test]
fn test_fixture_is_valid() {
    let doc = load_fixture("locales.xml");
    let report = validate(&doc);
    assert!(report.is_valid(), "{:?}", report.issues());
}

#[test]
fn test_fixture_locales() {
    let doc = load_fixture("locales.xml");
    let set = LocaleSet::new(&doc).unwrap();

    let names: Vec<_> = set.locales().filter_map(|l| l.name()).collect();
    assert_eq!(names, vec!["en_US", "nl_NL"]);

    let en = set.locale("en_US").unwrap();
    assert_eq!(en.date_pattern(PatternStyle::Short), Some("M/D/YY"));
    assert_eq!(en.time_pattern(PatternStyle::Med), Some("h:MM:SS A"));
    assert_eq!(en.number_pattern("percent"), Some("z,zz9%"));
    assert_eq!(en.currency_symbol("isoname"), Some("USD"));
    assert_eq!(en.date_time_symbols(), Some("GyMdkHmsSEDFwWahKzZ"));
    assert_eq!(en.meridiem_name(false), Some("AM"));

    let nl = set.locale("nl_NL").unwrap();
    assert_eq!(nl.number_symbol("decimal"), Some(","));
    assert_eq!(nl.month_name(4, false), Some("mei"));
    assert_eq!(nl.day_name(0, true), Some("zo"));
}

#[test]
fn test_fixture_format_dates() {
    let doc = load_fixture("locales.xml");
    let set = LocaleSet::new(&doc).unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();

    let en = set.locale("en_US").unwrap();
    let rendered: Vec<_> = PatternStyle::ALL
        .iter()
        .map(|style| format_date(en.date_pattern(*style).unwrap(), date, &en).unwrap())
        .collect();
    assert_eq!(
        rendered,
        vec![
            "Tuesday, March 5, 2024",
            "March 5, 2024",
            "Mar 5, 2024",
            "3/5/24"
        ]
    );

    let nl = set.locale("nl_NL").unwrap();
    let full = format_date(nl.date_pattern(PatternStyle::Full).unwrap(), date, &nl).unwrap();
    assert_eq!(full, "dinsdag 5 maart 2024");
    let short = format_date(nl.date_pattern(PatternStyle::Short).unwrap(), date, &nl).unwrap();
    assert_eq!(short, "05-03-24");
}

#[test]
fn test_overflow_fixture_lenient() {
    let outcome = load_file(&fixture("overflow.xml"), &LoadOptions::default()).unwrap();

    let dropped: Vec<_> = outcome
        .warnings
        .iter()
        .map(|w| w.element.as_str())
        .collect();
    assert_eq!(dropped, vec!["datePattern", "subform"]);

    let doc = &outcome.document;
    assert!(validate(doc).is_valid());

    let set = LocaleSet::new(doc).unwrap();
    let gb = set.locale("en_GB").unwrap();
    assert_eq!(gb.date_pattern(PatternStyle::Short), Some("DD/MM/YY"));
}

#[test]
fn test_overflow_fixture_strict() {
    let err = load_file(&fixture("overflow.xml"), &LoadOptions::new().strict()).unwrap_err();
    assert!(matches!(
        err,
        DomError::TooManyChildren {
            parent: ElementKind::DatePatterns,
            child: ElementKind::DatePattern,
            max: 4
        }
    ));
}

#[test]
fn test_xml_round_trip_preserves_tree() {
    let doc = load_fixture("locales.xml");
    let xml = to_xml(&doc).unwrap();
    let reloaded = load_str(&xml, &LoadOptions::new().strict())
        .unwrap()
        .document;

    assert_eq!(doc.len(), reloaded.len());
    let original: Vec<_> = doc
        .descendants(doc.root().unwrap())
        .map(|id| doc.node(id).cloned())
        .collect();
    let copy: Vec<_> = reloaded
        .descendants(reloaded.root().unwrap())
        .map(|id| reloaded.node(id).cloned())
        .collect();
    assert_eq!(original, copy);
}

#[test]
fn test_xml_output_is_stable() {
    let doc = load_fixture("locales.xml");
    let once = to_xml(&doc).unwrap();
    let twice = to_xml(&load_str(&once, &LoadOptions::default()).unwrap().document).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_no_break_space_grouping_round_trips() {
    let xml = "<localeSet xmlns=\"http://www.xfa.org/schema/xfa-locale-set/2.7/\">\
        <locale name=\"fr_FR\" xml:lang=\"fr\"><numberSymbols>\
        <numberSymbol name=\"decimal\">,</numberSymbol>\
        <numberSymbol name=\"grouping\">\u{a0}</numberSymbol>\
        </numberSymbols></locale></localeSet>";
    let doc = load_str(xml, &LoadOptions::new().strict())
        .unwrap()
        .document;
    let set = LocaleSet::new(&doc).unwrap();
    let fr = set.locale("fr_FR").unwrap();
    assert_eq!(fr.number_symbol("grouping"), Some("\u{a0}"));

    let written = to_xml(&doc).unwrap();
    assert!(written.contains("<numberSymbol name=\"grouping\">\u{a0}</numberSymbol>"));
    assert!(written.contains(r#"<locale name="fr_FR" xml:lang="fr">"#));

    let reloaded = load_str(&written, &LoadOptions::new().strict())
        .unwrap()
        .document;
    let set = LocaleSet::new(&reloaded).unwrap();
    let fr = set.locale("fr_FR").unwrap();
    assert_eq!(fr.number_symbol("grouping"), Some("\u{a0}"));
    assert_eq!(fr.number_symbol("decimal"), Some(","));
}

#[test]
fn test_yaml_dump_lists_every_locale() {
    let doc = load_fixture("locales.xml");
    let yaml = to_yaml(&doc).unwrap();
    assert!(yaml.contains("name: en_US"));
    assert!(yaml.contains("name: nl_NL"));
    assert!(yaml.contains("value: dinsdag"));
}

#[test]
fn test_file_size_limit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("huge.xml");
    let padding = " ".repeat(5 * 1024 * 1024);
    fs::write(&path, format!("<localeSet>{padding}</localeSet>")).unwrap();

    let err = load_file(&path, &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, DomError::FileTooLarge { .. }));
}
