use std::collections::HashMap;

use minicpp_core::lang::keywords;
use minicpp_core::lang::operators;
use minicpp_core::lang::punctuation;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(keywords::as_str(info.id), info.canonical, "keyword as_str mismatch for {:?}", info.id);

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!("duplicate keyword spelling {:?}: {:?} and {:?}", info.canonical, prev, info.id);
        }
    }
}

#[test]
fn operators_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, operators::OperatorId> = HashMap::new();

    for info in operators::OPERATORS {
        assert_eq!(
            operators::from_str(info.canonical),
            Some(info.id),
            "operator spelling not resolvable: {}",
            info.canonical
        );
        assert!(
            (1..=2).contains(&info.canonical.len()),
            "operators are one or two characters: {:?}",
            info.canonical
        );
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!("duplicate operator spelling {:?}: {:?} and {:?}", info.canonical, prev, info.id);
        }
    }
}

#[test]
fn punctuation_spellings_unique_and_single_char() {
    let mut seen: HashMap<&'static str, punctuation::PunctuationId> = HashMap::new();

    for info in punctuation::PUNCTUATION {
        let mut chars = info.canonical.chars();
        let c = chars.next().expect("punctuation spelling is non-empty");
        assert!(chars.next().is_none(), "punctuation is a single char: {:?}", info.canonical);
        assert_eq!(punctuation::from_char(c), Some(info.id));
        assert_eq!(punctuation::from_str(info.canonical), Some(info.id));

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!("duplicate punctuation spelling {:?}: {:?} and {:?}", info.canonical, prev, info.id);
        }
    }
}

#[test]
fn vocabularies_do_not_overlap() {
    for p in punctuation::PUNCTUATION {
        assert!(
            operators::from_str(p.canonical).is_none(),
            "{:?} is both punctuation and an operator",
            p.canonical
        );
    }
}
