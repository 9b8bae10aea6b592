use crate::services::models::LeadSource;

/// The single lead capture overlay shared by every call to action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadOverlay {
    pub open: bool,
    pub source: LeadSource,
    pub plan_hint: Option<String>,
}

impl LeadOverlay {
    pub fn opened_from(source: LeadSource, plan_hint: Option<String>) -> Self {
        Self {
            open: true,
            source,
            plan_hint: plan_hint.filter(|plan| !plan.trim().is_empty()),
        }
    }

    /// Closing keeps the source so the fade-out still renders the same copy.
    pub fn closed(&self) -> Self {
        Self {
            open: false,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!LeadOverlay::default().open);
    }

    #[test]
    fn opening_records_source_and_plan() {
        let overlay = LeadOverlay::opened_from(LeadSource::Pricing, Some("Partner Model".into()));
        assert!(overlay.open);
        assert_eq!(overlay.source, LeadSource::Pricing);
        assert_eq!(overlay.plan_hint.as_deref(), Some("Partner Model"));
    }

    #[test]
    fn blank_plan_hint_is_dropped() {
        let overlay = LeadOverlay::opened_from(LeadSource::Hero, Some("  ".into()));
        assert_eq!(overlay.plan_hint, None);
    }

    #[test]
    fn reopening_from_another_trigger_replaces_source() {
        let pricing = LeadOverlay::opened_from(LeadSource::Pricing, Some("Launch Offer".into()));
        let footer = LeadOverlay::opened_from(LeadSource::Footer, None);
        assert_ne!(pricing.source, footer.source);
        assert_eq!(footer.plan_hint, None);
        assert_eq!(pricing.closed().source, LeadSource::Pricing);
        assert!(!pricing.closed().open);
    }
}
