use super::*;
use crate::appwrite::memory::{Call, MemoryStore};
use crate::appwrite::error::StoreError;
use crate::config::AppwriteConfig;
use crate::services::site_data::SiteData;
use crate::state::overlay::LeadOverlay;
use futures::executor::block_on;

fn config() -> AppwriteConfig {
    AppwriteConfig {
        database_id: Some("site".into()),
        contact_collection_id: Some("contact".into()),
        leads_collection_id: Some("leads".into()),
        ..AppwriteConfig::default()
    }
}

fn filled_contact() -> ContactForm {
    ContactForm::default()
        .with(ContactField::Name, "Amina Hassan".into())
        .with(ContactField::Email, " amina@example.com ".into())
        .with(ContactField::Subject, "Tickets".into())
        .with(ContactField::Message, "How do refunds work?".into())
}

/// Mirrors the contact section's submit handler.
fn submit_contact<S: crate::appwrite::client::DocumentStore>(
    site: &SiteData<S>,
    gate: &mut SubmitGate,
    form: ContactForm,
) -> (ContactForm, Option<Result<Option<String>, StoreError>>) {
    if !gate.try_begin() {
        return (form, None);
    }
    let outcome = block_on(site.submit_contact_message(&form.payload(Language::En)));
    gate.finish();
    (form.after_submit(&outcome), Some(outcome))
}

// =============================================================
// SubmitGate
// =============================================================

#[test]
fn gate_refuses_second_submission_while_in_flight() {
    let mut gate = SubmitGate::default();
    assert!(gate.try_begin());
    assert!(!gate.try_begin());
    gate.finish();
    assert!(gate.try_begin());
}

// =============================================================
// Contact form
// =============================================================

#[test]
fn contact_payload_trims_fields_and_tags_language() {
    let payload = filled_contact().payload(Language::Sw);
    assert_eq!(payload.email, "amina@example.com");
    assert_eq!(payload.language, Language::Sw);
}

#[test]
fn successful_submission_clears_the_form() {
    let site = SiteData::new(MemoryStore::new(), config());
    let mut gate = SubmitGate::default();
    let (form, outcome) = submit_contact(&site, &mut gate, filled_contact());
    assert!(matches!(outcome, Some(Ok(_))));
    assert_eq!(form, ContactForm::default());
    assert_eq!(site.store().calls().len(), 1);
}

#[test]
fn failed_submission_keeps_what_was_typed() {
    let site = SiteData::new(
        MemoryStore::new().failing(StoreError::Transport("offline".into())),
        config(),
    );
    let mut gate = SubmitGate::default();
    let (form, outcome) = submit_contact(&site, &mut gate, filled_contact());
    assert!(matches!(outcome, Some(Err(_))));
    assert_eq!(form, filled_contact());
    assert!(gate.try_begin());
}

#[test]
fn click_while_busy_does_not_reach_the_store() {
    let site = SiteData::new(MemoryStore::new(), config());
    let mut gate = SubmitGate::default();
    assert!(gate.try_begin());
    let (form, outcome) = submit_contact(&site, &mut gate, filled_contact());
    assert!(outcome.is_none());
    assert_eq!(form, filled_contact());
    assert!(site.store().calls().is_empty());
}

// =============================================================
// Lead form
// =============================================================

#[test]
fn prefilled_form_carries_only_the_plan() {
    let form = LeadForm::prefilled(Some("Standard Model"));
    assert_eq!(form.plan_interest, "Standard Model");
    assert!(form.full_name.is_empty());
    assert_eq!(LeadForm::prefilled(None), LeadForm::default());
}

#[test]
fn blank_optional_fields_are_omitted() {
    let payload = LeadForm::prefilled(None)
        .with(LeadField::FullName, "David Moshi".into())
        .with(LeadField::Email, "david@example.com".into())
        .with(LeadField::Phone, "   ".into())
        .payload(LeadSource::Hero);
    assert_eq!(payload.phone, None);
    assert_eq!(payload.organization, None);
    assert_eq!(payload.plan_interest, None);
}

#[test]
fn lead_source_follows_the_trigger_that_opened_the_overlay() {
    for source in [LeadSource::Hero, LeadSource::Pricing, LeadSource::Footer] {
        let site = SiteData::new(MemoryStore::new(), config());
        let overlay = LeadOverlay::opened_from(source, None);
        let form = LeadForm::prefilled(overlay.plan_hint.as_deref())
            .with(LeadField::FullName, "Grace Kimaro".into())
            .with(LeadField::Email, "grace@example.com".into());

        block_on(site.submit_organizer_lead(&form.payload(overlay.source))).unwrap();

        let calls = site.store().calls();
        let [Call::Create { data, .. }] = calls.as_slice() else {
            panic!("expected one create call, got {calls:?}");
        };
        assert_eq!(data["source"], source.as_str());
    }
}
