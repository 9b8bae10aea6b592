//! Form field state for the contact and lead forms.
//!
//! Forms reset only after the store accepted the submission; a failure
//! leaves whatever the visitor typed in place.

use crate::i18n::Language;
use crate::services::models::{ContactPayload, LeadSource, OrganizerLeadPayload};

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// One submission at a time per form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitGate {
    in_flight: bool,
}

impl SubmitGate {
    /// Returns `false` when a submission is already running.
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn with(&self, field: ContactField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            ContactField::Name => next.name = value,
            ContactField::Email => next.email = value,
            ContactField::Subject => next.subject = value,
            ContactField::Message => next.message = value,
        }
        next
    }

    pub fn payload(&self, language: Language) -> ContactPayload {
        ContactPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
            language,
        }
    }

    pub fn after_submit<T, E>(self, outcome: &Result<T, E>) -> Self {
        match outcome {
            Ok(_) => Self::default(),
            Err(_) => self,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    FullName,
    Email,
    Phone,
    Organization,
    PlanInterest,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub plan_interest: String,
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl LeadForm {
    /// Blank form, with the plan pre-filled when the overlay was opened from a plan.
    pub fn prefilled(plan_hint: Option<&str>) -> Self {
        Self {
            plan_interest: plan_hint.unwrap_or_default().to_string(),
            ..Self::default()
        }
    }

    pub fn with(&self, field: LeadField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            LeadField::FullName => next.full_name = value,
            LeadField::Email => next.email = value,
            LeadField::Phone => next.phone = value,
            LeadField::Organization => next.organization = value,
            LeadField::PlanInterest => next.plan_interest = value,
        }
        next
    }

    pub fn payload(&self, source: LeadSource) -> OrganizerLeadPayload {
        OrganizerLeadPayload {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            organization: optional(&self.organization),
            phone: optional(&self.phone),
            plan_interest: optional(&self.plan_interest),
            source,
        }
    }
}
