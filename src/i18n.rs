//! Interface languages and label dictionaries
//!
//! Keys are the English labels themselves, so English needs no table and any
//! key missing from a dictionary renders as-is.

use serde::{Deserialize, Serialize};

/// Supported interface languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Mr,
}

impl Language {
    /// All languages in picker order
    pub const ALL: [Language; 3] = [Language::En, Language::Mr, Language::Hi];

    /// Short language code
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Mr => "mr",
        }
    }

    /// Name of the language written in that language
    pub fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "हिंदी",
            Self::Mr => "मराठी",
        }
    }

    /// Parse either a language code or a display name
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|lang| {
            lang.code().eq_ignore_ascii_case(value) || lang.display_name().eq_ignore_ascii_case(value)
        })
    }

    /// Look up the label for `key`, falling back to the key itself
    pub fn translate<'a>(self, key: &'a str) -> &'a str {
        dictionary(self)
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or(key)
    }
}

fn dictionary(lang: Language) -> &'static [(&'static str, &'static str)] {
    match lang {
        Language::En => &[],
        Language::Hi => HINDI,
        Language::Mr => MARATHI,
    }
}

const MARATHI: &[(&str, &str)] = &[
    ("Engineers Cell", "इंजीनियर्स कक्ष"),
    ("User Information Form", "वापरकर्ता माहिती फॉर्म"),
    ("Name", "नाव"),
    ("Email", "ईमेल"),
    ("Phone", "फोन"),
    ("Address", "पत्ता"),
    ("Select District", "जिल्हा निवडा"),
    ("Select Taluka", "तालुका निवडा"),
    ("Select Engineering Branch", "अभियांत्रिकी शाखा निवडा"),
    ("Enter your message", "आपला संदेश प्रविष्ट करा"),
    ("Submit", "सबमिट करा"),
    ("Submitting...", "सबमिट होत आहे..."),
    ("Select Language", "भाषा निवडा"),
    ("Upload Profile Picture", "प्रोफाइल चित्र अपलोड करा"),
    ("Name is required", "नाव आवश्यक आहे"),
    ("Email is required", "ईमेल आवश्यक आहे"),
    ("Enter a valid email address", "वैध ईमेल पत्ता प्रविष्ट करा"),
    ("Phone is required", "फोन आवश्यक आहे"),
    ("Phone must be exactly 10 digits", "फोन क्रमांक नेमका 10 अंकी असावा"),
    ("Address is required", "पत्ता आवश्यक आहे"),
    ("District is required", "जिल्हा आवश्यक आहे"),
    ("Taluka is required", "तालुका आवश्यक आहे"),
    ("Engineering branch is required", "अभियांत्रिकी शाखा आवश्यक आहे"),
    ("Message is required", "संदेश आवश्यक आहे"),
    ("Registration submitted", "नोंदणी सबमिट झाली"),
    ("Reference", "संदर्भ"),
    ("Submission failed", "सबमिशन अयशस्वी"),
    ("Contact Us", "संपर्क"),
    ("Location", "स्थान"),
    ("Scan QR Code", "QR कोड स्कॅन करा"),
    ("Language", "भाषा"),
    ("Select District first", "आधी जिल्हा निवडा"),
    ("Image path or URL", "चित्राचा मार्ग किंवा URL"),
    ("to dismiss", "बंद करण्यासाठी"),
    ("to choose / close", "निवडण्यासाठी / बंद करण्यासाठी"),
];

const HINDI: &[(&str, &str)] = &[
    ("Engineers Cell", "इंजीनियर्स सेल"),
    ("User Information Form", "उपयोगकर्ता जानकारी फॉर्म"),
    ("Name", "नाम"),
    ("Email", "ईमेल"),
    ("Phone", "फोन"),
    ("Address", "पता"),
    ("Select District", "जिला चुनें"),
    ("Select Taluka", "तालुका चुनें"),
    ("Select Engineering Branch", "इंजीनियरिंग शाखा चुनें"),
    ("Enter your message", "अपना संदेश दर्ज करें"),
    ("Submit", "जमा करें"),
    ("Submitting...", "जमा हो रहा है..."),
    ("Select Language", "भाषा चुनें"),
    ("Upload Profile Picture", "प्रोफ़ाइल चित्र अपलोड करें"),
    ("Name is required", "नाम आवश्यक है"),
    ("Email is required", "ईमेल आवश्यक है"),
    ("Enter a valid email address", "मान्य ईमेल पता दर्ज करें"),
    ("Phone is required", "फोन आवश्यक है"),
    ("Phone must be exactly 10 digits", "फोन नंबर ठीक 10 अंकों का होना चाहिए"),
    ("Address is required", "पता आवश्यक है"),
    ("District is required", "जिला आवश्यक है"),
    ("Taluka is required", "तालुका आवश्यक है"),
    ("Engineering branch is required", "इंजीनियरिंग शाखा आवश्यक है"),
    ("Message is required", "संदेश आवश्यक है"),
    ("Registration submitted", "पंजीकरण जमा हो गया"),
    ("Reference", "संदर्भ"),
    ("Submission failed", "जमा करना विफल रहा"),
    ("Contact Us", "संपर्क करें"),
    ("Location", "स्थान"),
    ("Scan QR Code", "QR कोड स्कैन करें"),
    ("Language", "भाषा"),
    ("Select District first", "पहले जिला चुनें"),
    ("Image path or URL", "चित्र का पथ या URL"),
    ("to dismiss", "बंद करने के लिए"),
    ("to choose / close", "चुनने / बंद करने के लिए"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_parse_accepts_codes() {
        assert_eq!(Language::parse("en"), Some(Language::En));
        assert_eq!(Language::parse("HI"), Some(Language::Hi));
        assert_eq!(Language::parse(" mr "), Some(Language::Mr));
    }

    #[test]
    fn test_parse_accepts_display_names() {
        assert_eq!(Language::parse("English"), Some(Language::En));
        assert_eq!(Language::parse("हिंदी"), Some(Language::Hi));
        assert_eq!(Language::parse("मराठी"), Some(Language::Mr));
    }

    #[test]
    fn test_parse_unknown_is_none() {
        assert_eq!(Language::parse("fr"), None);
        assert_eq!(Language::parse(""), None);
    }

    #[test]
    fn test_translate_known_key() {
        assert_eq!(Language::Mr.translate("Name"), "नाव");
        assert_eq!(Language::Hi.translate("Submit"), "जमा करें");
    }

    #[test]
    fn test_english_returns_key() {
        assert_eq!(Language::En.translate("Select Taluka"), "Select Taluka");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        assert_eq!(Language::Hi.translate("No such label"), "No such label");
        assert_eq!(Language::Mr.translate(""), "");
    }

    #[test]
    fn test_dictionaries_have_no_duplicate_keys() {
        for lang in Language::ALL {
            let table = dictionary(lang);
            for (i, (key, _)) in table.iter().enumerate() {
                assert!(
                    !table[i + 1..].iter().any(|(k, _)| k == key),
                    "duplicate key {key:?} in {}",
                    lang.code()
                );
            }
        }
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Language::Mr).unwrap();
        assert_eq!(json, "\"mr\"");
        let parsed: Language = serde_json::from_str("\"hi\"").unwrap();
        assert_eq!(parsed, Language::Hi);
    }
}
