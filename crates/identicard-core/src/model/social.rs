//! Social platforms and their profile links.

use serde::{Deserialize, Serialize};

use super::identity::present;
use crate::error::CoreError;

/// The closed set of social platforms a record can link to.
///
/// Declaration order is the canonical order used for validation and vCard
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Linkedin,
    Instagram,
    Twitter,
    Github,
    Youtube,
    Facebook,
    Tiktok,
}

impl SocialPlatform {
    /// All platforms, in canonical order.
    pub const ALL: [Self; 7] = [
        Self::Linkedin,
        Self::Instagram,
        Self::Twitter,
        Self::Github,
        Self::Youtube,
        Self::Facebook,
        Self::Tiktok,
    ];

    /// Lowercase key, as used in JSON and field identifiers.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Linkedin => "linkedin",
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
            Self::Github => "github",
            Self::Youtube => "youtube",
            Self::Facebook => "facebook",
            Self::Tiktok => "tiktok",
        }
    }

    /// Human-readable platform name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Linkedin => "LinkedIn",
            Self::Instagram => "Instagram",
            Self::Twitter => "X (Twitter)",
            Self::Github => "GitHub",
            Self::Youtube => "YouTube",
            Self::Facebook => "Facebook",
            Self::Tiktok => "TikTok",
        }
    }

    /// Identifier of this platform's link in a validation result.
    #[must_use]
    pub fn field_id(self) -> String {
        format!("social_{}", self.key())
    }
}

impl std::fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl core::str::FromStr for SocialPlatform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| CoreError::UnknownPlatform(key.to_string()))
    }
}

/// One optional profile URL per [`SocialPlatform`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
    pub youtube: Option<String>,
    pub facebook: Option<String>,
    pub tiktok: Option<String>,
}

impl SocialLinks {
    fn slot(&self, platform: SocialPlatform) -> Option<&str> {
        match platform {
            SocialPlatform::Linkedin => self.linkedin.as_deref(),
            SocialPlatform::Instagram => self.instagram.as_deref(),
            SocialPlatform::Twitter => self.twitter.as_deref(),
            SocialPlatform::Github => self.github.as_deref(),
            SocialPlatform::Youtube => self.youtube.as_deref(),
            SocialPlatform::Facebook => self.facebook.as_deref(),
            SocialPlatform::Tiktok => self.tiktok.as_deref(),
        }
    }

    fn slot_mut(&mut self, platform: SocialPlatform) -> &mut Option<String> {
        match platform {
            SocialPlatform::Linkedin => &mut self.linkedin,
            SocialPlatform::Instagram => &mut self.instagram,
            SocialPlatform::Twitter => &mut self.twitter,
            SocialPlatform::Github => &mut self.github,
            SocialPlatform::Youtube => &mut self.youtube,
            SocialPlatform::Facebook => &mut self.facebook,
            SocialPlatform::Tiktok => &mut self.tiktok,
        }
    }

    /// Returns the trimmed link for a platform, if present.
    #[must_use]
    pub fn get(&self, platform: SocialPlatform) -> Option<&str> {
        present(self.slot(platform))
    }

    /// Sets the link for a platform.
    pub fn set(&mut self, platform: SocialPlatform, url: impl Into<String>) {
        *self.slot_mut(platform) = Some(url.into());
    }

    /// Iterates over present links in canonical platform order.
    pub fn iter_present(&self) -> impl Iterator<Item = (SocialPlatform, &str)> {
        SocialPlatform::ALL
            .into_iter()
            .filter_map(|platform| self.get(platform).map(|url| (platform, url)))
    }
}
