use super::*;
use crate::services::mock::MockDictionaryServices;

const DAIJIRIN: &str = "com.apple.dictionary.ja.Daijirin";
const WISDOM: &str = "com.apple.dictionary.ja-en.WISDOM";

fn services_with_daijirin() -> MockDictionaryServices {
    let mut services = MockDictionaryServices::new();
    services.add("New Oxford American Dictionary", "com.apple.dictionary.NOAD", true);
    let daijirin = services.add("大辞林", DAIJIRIN, false);
    services.define(daijirin, "辞書", "じしょ【辞書】 言葉を集めて一定の順序に並べた書物。");
    services.define(daijirin, "空", "");
    services
}

#[test]
fn find_by_identifier_searches_disabled_dictionaries_too() {
    let services = services_with_daijirin();

    let found = find_by_identifier(&services, DAIJIRIN).expect("daijirin should be found");

    assert_eq!(services.dictionary_name(Some(&found)).as_deref(), Some("大辞林"));
}

#[test]
fn find_by_identifier_returns_none_when_missing() {
    let services = services_with_daijirin();
    assert!(find_by_identifier(&services, WISDOM).is_none());
}

#[test]
fn find_by_identifier_returns_none_without_dictionaries() {
    let services = MockDictionaryServices::new();
    assert!(find_by_identifier(&services, DAIJIRIN).is_none());
}

#[test]
fn find_by_identifier_skips_dictionaries_without_identifier() {
    let mut services = MockDictionaryServices::new();
    services.add_anonymous();
    let wisdom = services.add("ウィズダム英和辞典", WISDOM, true);

    assert_eq!(find_by_identifier(&services, WISDOM), Some(wisdom));
}

#[test]
fn lookup_returns_definition() {
    let dict = SystemDict::new(services_with_daijirin());

    let definition = dict.lookup("辞書", SystemDictKind::Daijirin);

    assert_eq!(
        definition.as_deref(),
        Some("じしょ【辞書】 言葉を集めて一定の順序に並べた書物。")
    );
}

#[test]
fn lookup_returns_none_for_unknown_word() {
    let dict = SystemDict::new(services_with_daijirin());
    assert!(dict.lookup("存在しない", SystemDictKind::Daijirin).is_none());
}

#[test]
fn lookup_returns_none_for_empty_definition() {
    let dict = SystemDict::new(services_with_daijirin());
    assert!(dict.lookup("空", SystemDictKind::Daijirin).is_none());
}

#[test]
fn lookup_returns_none_for_empty_word() {
    let dict = SystemDict::new(services_with_daijirin());
    assert!(dict.lookup("", SystemDictKind::Daijirin).is_none());
}

#[test]
fn lookup_returns_none_for_unresolved_kind() {
    let dict = SystemDict::new(services_with_daijirin());
    assert!(!dict.is_available(SystemDictKind::Wisdom));
    assert!(dict.lookup("辞書", SystemDictKind::Wisdom).is_none());
}

#[test]
fn resolved_kinds_lists_found_dictionaries() {
    let mut services = services_with_daijirin();
    services.add("ウィズダム英和辞典", WISDOM, true);

    let dict = SystemDict::new(services);

    assert_eq!(
        dict.resolved_kinds(),
        vec![SystemDictKind::Daijirin, SystemDictKind::Wisdom]
    );
}

#[test]
fn dictionaries_are_resolved_once() {
    let dict = SystemDict::new(services_with_daijirin());
    let calls_after_new = dict.services().available_calls.get();
    assert_eq!(calls_after_new, SystemDictKind::all().len());

    dict.lookup("辞書", SystemDictKind::Daijirin);
    dict.lookup("辞書", SystemDictKind::Wisdom);

    assert_eq!(dict.services().available_calls.get(), calls_after_new);
}
