use super::*;
use serde_json::json;

#[test]
fn rating_defaults_when_absent_or_not_positive() {
    assert_eq!(resolve_rating(None), DEFAULT_RATING);
    assert_eq!(resolve_rating(Some(0.0)), DEFAULT_RATING);
    assert_eq!(resolve_rating(Some(-3.0)), DEFAULT_RATING);
    assert_eq!(resolve_rating(Some(f64::NAN)), DEFAULT_RATING);
}

#[test]
fn rating_keeps_valid_values_and_clamps_high_ones() {
    assert_eq!(resolve_rating(Some(1.0)), 1);
    assert_eq!(resolve_rating(Some(3.6)), 4);
    assert_eq!(resolve_rating(Some(9.0)), 5);
}

#[test]
fn testimonial_blank_image_becomes_none() {
    let doc: TestimonialDocument = serde_json::from_value(json!({
        "name": "Grace Kimaro",
        "role": "Wedding Planner",
        "event": "Luxury Weddings TZ",
        "text": "Lovely.",
        "image": " ",
    }))
    .unwrap();
    let record = TestimonialRecord::from(doc);
    assert_eq!(record.image, None);
    assert_eq!(record.rating, DEFAULT_RATING);
}

#[test]
fn testimonial_null_strings_become_empty() {
    let doc: TestimonialDocument = serde_json::from_value(json!({
        "name": "David Moshi",
        "role": null,
        "event": null,
        "text": null,
        "rating": null,
        "image": null,
    }))
    .unwrap();
    let record = TestimonialRecord::from(doc);
    assert_eq!(record.name, "David Moshi");
    assert_eq!(record.role, "");
    assert_eq!(record.text, "");
    assert_eq!(record.image, None);
    assert_eq!(record.rating, DEFAULT_RATING);
}

#[test]
fn lead_payload_serializes_camel_case() {
    let payload = OrganizerLeadPayload {
        full_name: "A".into(),
        email: "a@example.com".into(),
        organization: Some("Org".into()),
        phone: None,
        plan_interest: None,
        source: LeadSource::Footer,
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({ "fullName": "A", "email": "a@example.com", "organization": "Org", "source": "footer" })
    );
}

#[test]
fn stamped_flattens_payload() {
    let payload = ContactPayload {
        name: "N".into(),
        email: "e@example.com".into(),
        subject: "S".into(),
        message: "M".into(),
        language: crate::i18n::Language::En,
    };
    let stamped = Stamped {
        payload: &payload,
        created_at: "2026-10-17T00:00:00.000Z".into(),
        status: "new",
    };
    assert_eq!(
        serde_json::to_value(&stamped).unwrap(),
        json!({
            "name": "N",
            "email": "e@example.com",
            "subject": "S",
            "message": "M",
            "language": "en",
            "createdAt": "2026-10-17T00:00:00.000Z",
            "status": "new",
        })
    );
}
