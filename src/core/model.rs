use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The three supported destinations for optimized content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    YouTube,
    X,
    Facebook,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::YouTube, Platform::X, Platform::Facebook];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "youtube" => Some(Self::YouTube),
            "x" | "twitter" => Some(Self::X),
            "facebook" => Some(Self::Facebook),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::YouTube => "youtube",
            Self::X => "x",
            Self::Facebook => "facebook",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Guideline {
    pub title: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Suggestion {
    #[schemars(description = "One rewritten candidate for the draft.")]
    pub content: String,
    #[schemars(description = "Short rationale for the rewrite.")]
    pub reason: String,
}

/// One model reply, validated. `tags` is a YouTube-only field; other
/// platforms carry `None` even if the model volunteers tags.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OptimizationResult {
    pub guidelines: Vec<Guideline>,
    pub suggestions: Vec<Suggestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_str() {
        assert_eq!(Platform::from_str("youtube"), Some(Platform::YouTube));
        assert_eq!(Platform::from_str(" X "), Some(Platform::X));
        assert_eq!(Platform::from_str("twitter"), Some(Platform::X));
        assert_eq!(Platform::from_str("Facebook"), Some(Platform::Facebook));
        assert_eq!(Platform::from_str("tiktok"), None);
    }

    #[test]
    fn test_platform_names_round_trip() {
        for platform in Platform::ALL {
            assert_eq!(Platform::from_str(platform.name()), Some(platform));
        }
    }
}
