use std::collections::HashMap;

/// A language the interface chrome is translated into.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub flag: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

/// Looks up `code`, falling back to English for unknown codes.
pub fn language_info_or_default(code: &str) -> LanguageInfo {
    let mut languages = supported_languages();
    languages
        .remove(code)
        .or_else(|| languages.remove("en"))
        .unwrap_or(ENGLISH)
}

const ENGLISH: LanguageInfo = LanguageInfo {
    code: "en",
    flag: "🇬🇧",
    translation: include_str!("../translations/en.json"),
    native_name: "English",
};

pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([
        ("en", ENGLISH),
        (
            "es",
            LanguageInfo {
                code: "es",
                flag: "🇪🇸",
                translation: include_str!("../translations/es.json"),
                native_name: "Español",
            },
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_languages_are_english_and_spanish() {
        let languages = supported_languages();
        assert_eq!(languages.len(), 2);
        assert!(languages.contains_key("en"));
        assert!(languages.contains_key("es"));
    }

    #[test]
    fn test_unknown_code_falls_back_to_english() {
        assert_eq!(language_info_or_default("de").code, "en");
        assert_eq!(language_info_or_default("es").native_name, "Español");
    }

    #[test]
    fn test_translations_are_json_objects() {
        for info in supported_languages().values() {
            let parsed: serde_json::Value =
                serde_json::from_str(info.translation).expect("valid translation json");
            assert!(parsed.is_object(), "{} translation is not an object", info.code);
        }
    }

    fn leaf_paths(value: &serde_json::Value, prefix: &str, out: &mut Vec<String>) {
        match value {
            serde_json::Value::Object(map) => {
                for (key, child) in map {
                    leaf_paths(child, &format!("{prefix}/{key}"), out);
                }
            }
            _ => out.push(prefix.to_string()),
        }
    }

    #[test]
    fn test_spanish_covers_every_english_key() {
        let en: serde_json::Value = serde_json::from_str(ENGLISH.translation).unwrap();
        let es_info = language_info_or_default("es");
        let es: serde_json::Value = serde_json::from_str(es_info.translation).unwrap();
        let mut paths = Vec::new();
        leaf_paths(&en, "", &mut paths);
        for path in paths {
            assert!(es.pointer(&path).is_some_and(serde_json::Value::is_string), "es is missing {path}");
        }
    }
}
