use serde::{Deserialize, Serialize};

/// Site language. The store tags testimonials and contact messages with the
/// same two codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Sw,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Sw];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Sw => "sw",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Sw => "SW",
        }
    }

    /// Choose between the English and Swahili copy.
    pub fn pick<T>(self, en: T, sw: T) -> T {
        match self {
            Language::En => en,
            Language::Sw => sw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_lowercase_code() {
        assert_eq!(serde_json::to_string(&Language::Sw).unwrap(), "\"sw\"");
        assert_eq!(serde_json::from_str::<Language>("\"en\"").unwrap(), Language::En);
        for language in Language::ALL {
            assert_eq!(serde_json::to_value(language).unwrap(), language.code());
        }
    }

    #[test]
    fn pick_follows_language() {
        assert_eq!(Language::En.pick("Home", "Nyumbani"), "Home");
        assert_eq!(Language::Sw.pick("Home", "Nyumbani"), "Nyumbani");
    }
}
