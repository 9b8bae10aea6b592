//! Headline numbers shown in the About section.

use crate::i18n::Language;
use crate::services::models::SiteMetrics;

pub const FALLBACK_EVENTS: &str = "10K+";
pub const FALLBACK_TICKETS: &str = "50K+";
pub const FALLBACK_USERS: &str = "25K+";

/// `12500` → `"12,500+"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push('+');
    grouped
}

/// Zero and missing counts show the bundled estimate.
pub fn figure(value: Option<u64>, fallback: &'static str) -> String {
    match value {
        Some(count) if count > 0 => format_count(count),
        _ => fallback.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub number: String,
    pub label: &'static str,
}

pub fn stats(metrics: Option<&SiteMetrics>, language: Language) -> [Stat; 3] {
    [
        Stat {
            number: figure(metrics.and_then(|m| m.events_created), FALLBACK_EVENTS),
            label: language.pick("Events Created", "Matukio Yaliyotengenezwa"),
        },
        Stat {
            number: figure(metrics.and_then(|m| m.tickets_sold), FALLBACK_TICKETS),
            label: language.pick("Tickets Sold", "Tiketi Zilizouzwa"),
        },
        Stat {
            number: figure(metrics.and_then(|m| m.happy_users), FALLBACK_USERS),
            label: language.pick("Happy Users", "Watumiaji Wenye Furaha"),
        },
    ]
}

/// Date part of an RFC 3339 timestamp, e.g. `17/10/2026`.
pub fn updated_on(timestamp: &str) -> Option<String> {
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|dt| dt.format("%d/%m/%Y").to_string())
}
