//! Upstream product categories and the variant kinds they select

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::TrimError;

/// Processing strategy a category is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariantKind {
    /// Mobile number top-up listings (`paket`)
    Recharge,
    /// Voucher activation listings (`res`)
    Activation,
}

impl VariantKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantKind::Recharge => "RECHARGE",
            VariantKind::Activation => "ACTIVATION",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upstream product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Data,
    VoiceSms,
    DigitalOther,
    DigitalMusic,
    DigitalGame,
    Roaming,
    Byu,
    HvcData,
    HvcVoiceSms,
    Vf,
}

/// Categories processed by the recharge variant
pub const RECHARGE_CATEGORIES: &[Category] = &[
    Category::Data,
    Category::VoiceSms,
    Category::DigitalOther,
    Category::DigitalMusic,
    Category::DigitalGame,
    Category::Roaming,
    Category::Byu,
    Category::HvcData,
    Category::HvcVoiceSms,
];

/// Categories processed by the activation variant
pub const ACTIVATION_CATEGORIES: &[Category] = &[Category::Vf];

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::Data,
        Category::VoiceSms,
        Category::DigitalOther,
        Category::DigitalMusic,
        Category::DigitalGame,
        Category::Roaming,
        Category::Byu,
        Category::HvcData,
        Category::HvcVoiceSms,
        Category::Vf,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Data => "DATA",
            Category::VoiceSms => "VOICE_SMS",
            Category::DigitalOther => "DIGITAL_OTHER",
            Category::DigitalMusic => "DIGITAL_MUSIC",
            Category::DigitalGame => "DIGITAL_GAME",
            Category::Roaming => "ROAMING",
            Category::Byu => "BYU",
            Category::HvcData => "HVC_DATA",
            Category::HvcVoiceSms => "HVC_VOICE_SMS",
            Category::Vf => "VF",
        }
    }

    /// Comma separated, alphabetically sorted list of every known category
    pub fn supported_list() -> String {
        let mut names: Vec<&str> = Self::ALL.iter().map(Category::as_str).collect();
        names.sort_unstable();
        names.join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TrimError;

    /// Case-insensitive lookup; surrounding whitespace is not trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TrimError::UnsupportedCategory {
                category: s.to_string(),
                supported: Self::supported_list(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("data".parse::<Category>().unwrap(), Category::Data);
        assert_eq!("Hvc_Voice_Sms".parse::<Category>().unwrap(), Category::HvcVoiceSms);
        assert_eq!("vf".parse::<Category>().unwrap(), Category::Vf);
    }

    #[test]
    fn test_unknown_category_lists_supported_set() {
        let err = "PULSA".parse::<Category>().unwrap_err();
        let message = err.to_string();

        assert!(message.contains("Unsupported category: PULSA"));
        for category in Category::ALL {
            assert!(message.contains(category.as_str()));
        }
    }

    #[test]
    fn test_category_sets_cover_all() {
        let mut listed: Vec<Category> = RECHARGE_CATEGORIES
            .iter()
            .chain(ACTIVATION_CATEGORIES)
            .copied()
            .collect();
        listed.sort();
        let mut all = Category::ALL.to_vec();
        all.sort();
        assert_eq!(listed, all);
    }

    #[test]
    fn test_serde_names_match_display() {
        for category in Category::ALL {
            let json = serde_json::to_string(category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
        assert_eq!(
            serde_json::to_string(&VariantKind::Activation).unwrap(),
            "\"ACTIVATION\""
        );
    }
}
