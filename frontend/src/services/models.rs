//! Records written to and read from the store.

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;

pub const DEFAULT_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub language: Language,
}

/// Call to action that opened the lead overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadSource {
    #[default]
    Hero,
    Pricing,
    Footer,
}

impl LeadSource {
    pub fn as_str(self) -> &'static str {
        match self {
            LeadSource::Hero => "hero",
            LeadSource::Pricing => "pricing",
            LeadSource::Footer => "footer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizerLeadPayload {
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_interest: Option<String>,
    pub source: LeadSource,
}

/// Payload plus the fields every new submission carries.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Stamped<'a, T: Serialize> {
    #[serde(flatten)]
    pub payload: &'a T,
    pub created_at: String,
    pub status: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadLinks {
    pub google_play_url: Option<String>,
    pub app_store_url: Option<String>,
    pub direct_apk_file_id: Option<String>,
    pub direct_apk_url: Option<String>,
    pub last_updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialRecord {
    pub name: String,
    pub role: String,
    pub event: String,
    pub text: String,
    pub rating: u8,
    pub image: Option<String>,
}

/// Unset attributes come back as `null`, so every field is optional.
#[derive(Debug, Deserialize)]
pub(crate) struct TestimonialDocument {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Absent, zero and negative ratings fall back to the default; the display
/// never shows more than five stars.
pub fn resolve_rating(raw: Option<f64>) -> u8 {
    match raw {
        Some(value) if value.is_finite() && value >= 1.0 => {
            value.round().min(f64::from(DEFAULT_RATING)) as u8
        }
        _ => DEFAULT_RATING,
    }
}

impl From<TestimonialDocument> for TestimonialRecord {
    fn from(doc: TestimonialDocument) -> Self {
        Self {
            name: doc.name.unwrap_or_default(),
            role: doc.role.unwrap_or_default(),
            event: doc.event.unwrap_or_default(),
            text: doc.text.unwrap_or_default(),
            rating: resolve_rating(doc.rating),
            image: doc.image.filter(|url| !url.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteMetrics {
    pub events_created: Option<u64>,
    pub tickets_sold: Option<u64>,
    pub happy_users: Option<u64>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MetricsDocument {
    #[serde(default)]
    pub events_created: Option<u64>,
    #[serde(default)]
    pub tickets_sold: Option<u64>,
    #[serde(default)]
    pub happy_users: Option<u64>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default, rename = "$updatedAt")]
    pub system_updated_at: Option<String>,
}

impl From<MetricsDocument> for SiteMetrics {
    fn from(doc: MetricsDocument) -> Self {
        Self {
            events_created: doc.events_created,
            tickets_sold: doc.tickets_sold,
            happy_users: doc.happy_users,
            updated_at: doc.updated_at.or(doc.system_updated_at),
        }
    }
}
