use std::collections::BTreeMap;

use super::field::FieldId;
use super::request::ConsultationRequest;
use super::transport::TransportError;
use super::validation::{check_field, ValidationError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Succeeded,
    Failed(TransportError),
}

/// Booking form model: field values, at most one error per field and the
/// submission lifecycle. The component renders from this and never reads
/// values back out of the DOM.
#[derive(Clone, Debug, PartialEq)]
pub struct ConsultationForm {
    values: BTreeMap<FieldId, String>,
    errors: BTreeMap<FieldId, ValidationError>,
    state: SubmitState,
}

impl Default for ConsultationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsultationForm {
    pub fn new() -> Self {
        Self {
            values: FieldId::ALL.iter().map(|f| (*f, String::new())).collect(),
            errors: BTreeMap::new(),
            state: SubmitState::Idle,
        }
    }

    pub fn value(&self, field: FieldId) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, field: FieldId) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// User typed into a field. Any error on it goes away until the next blur or submit.
    pub fn input(&mut self, field: FieldId, value: String) {
        self.errors.remove(&field);
        self.values.insert(field, value);
    }

    /// Re-check a single field when it loses focus.
    pub fn blur(&mut self, field: FieldId) -> bool {
        self.check(field)
    }

    /// Checks every field, annotating failures. True when nothing failed.
    pub fn validate(&mut self) -> bool {
        FieldId::ALL
            .iter()
            .fold(true, |valid, field| self.check(*field) && valid)
    }

    fn check(&mut self, field: FieldId) -> bool {
        match check_field(field, self.value(field)) {
            Ok(()) => {
                self.errors.remove(&field);
                true
            }
            Err(e) => {
                self.errors.insert(field, e);
                false
            }
        }
    }

    /// Starts a submission when the form is valid and nothing is in flight.
    /// Returns the snapshot to hand to the transport.
    pub fn begin_submit(&mut self) -> Option<ConsultationRequest> {
        if self.is_submitting() {
            return None;
        }
        if !self.validate() {
            return None;
        }
        self.state = SubmitState::Submitting;
        Some(self.snapshot())
    }

    pub fn snapshot(&self) -> ConsultationRequest {
        ConsultationRequest {
            full_name: self.value(FieldId::FullName).to_string(),
            mobile: self.value(FieldId::Mobile).to_string(),
            email: self.value(FieldId::Email).to_string(),
            consultation_type: self.value(FieldId::ConsultationType).to_string(),
            message: self.value(FieldId::Message).to_string(),
        }
    }

    /// Applies the transport outcome. Success clears the form; failure keeps
    /// what the user entered so they can retry.
    pub fn finish_submit(&mut self, result: Result<(), TransportError>) {
        if !self.is_submitting() {
            return;
        }
        match result {
            Ok(()) => {
                self.reset();
                self.state = SubmitState::Succeeded;
            }
            Err(e) => self.state = SubmitState::Failed(e),
        }
    }

    /// Succeeded or Failed back to Idle, once the modal or banner is gone.
    pub fn acknowledge(&mut self) {
        if matches!(self.state, SubmitState::Succeeded | SubmitState::Failed(_)) {
            self.state = SubmitState::Idle;
        }
    }

    /// Abandons an in-flight submission without touching the values.
    pub fn cancel_submit(&mut self) {
        if self.is_submitting() {
            self.state = SubmitState::Idle;
        }
    }

    pub fn reset(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ConsultationForm {
        let mut form = ConsultationForm::new();
        form.input(FieldId::FullName, "Jordan Reyes".into());
        form.input(FieldId::Mobile, "+1 (555) 123-4567".into());
        form.input(FieldId::Email, "jordan@example.com".into());
        form.input(FieldId::ConsultationType, "nutrition".into());
        form
    }

    #[test]
    fn empty_required_fields_get_one_error_each() {
        let mut form = ConsultationForm::new();
        form.input(FieldId::FullName, "   ".into());
        assert!(!form.validate());
        assert!(!form.validate());
        for field in FieldId::ALL {
            if field.required() {
                assert!(matches!(form.error(field), Some(ValidationError::MissingValue { .. })));
            } else {
                assert!(form.error(field).is_none());
            }
        }
        assert_eq!(form.errors.len(), 4);
        assert_eq!(
            form.error(FieldId::ConsultationType).unwrap().to_string(),
            "Consultation Type is required"
        );
    }

    #[test]
    fn format_errors_only_for_non_empty_values() {
        let mut form = filled();
        form.input(FieldId::Email, "a@b".into());
        form.input(FieldId::Mobile, "12345".into());
        assert!(!form.validate());
        assert_eq!(form.error(FieldId::Email), Some(&ValidationError::InvalidEmail));
        assert_eq!(form.error(FieldId::Mobile), Some(&ValidationError::InvalidMobile));
    }

    #[test]
    fn validating_a_valid_form_twice_is_stable() {
        let mut form = filled();
        assert!(form.validate());
        assert!(form.validate());
        assert!(!form.has_errors());
    }

    #[test]
    fn input_clears_error_before_revalidation() {
        let mut form = ConsultationForm::new();
        assert!(!form.blur(FieldId::Email));
        assert!(form.error(FieldId::Email).is_some());

        form.input(FieldId::Email, "still-bad".into());
        assert!(form.error(FieldId::Email).is_none());

        assert!(!form.blur(FieldId::Email));
        assert_eq!(form.error(FieldId::Email), Some(&ValidationError::InvalidEmail));
    }

    #[test]
    fn blur_touches_only_its_field() {
        let mut form = ConsultationForm::new();
        form.blur(FieldId::FullName);
        assert!(form.error(FieldId::FullName).is_some());
        assert!(form.error(FieldId::Mobile).is_none());
    }

    #[test]
    fn invalid_form_does_not_start_submitting() {
        let mut form = ConsultationForm::new();
        assert!(form.begin_submit().is_none());
        assert_eq!(form.state(), &SubmitState::Idle);
    }

    #[test]
    fn successful_submission_resets_fields() {
        let mut form = filled();
        form.input(FieldId::Message, "Knee rehab".into());

        let request = form.begin_submit().unwrap();
        assert_eq!(request.full_name, "Jordan Reyes");
        assert_eq!(request.message, "Knee rehab");
        assert!(form.is_submitting());

        form.finish_submit(Ok(()));
        assert_eq!(form.state(), &SubmitState::Succeeded);
        for field in FieldId::ALL {
            assert_eq!(form.value(field), "");
        }

        form.acknowledge();
        assert_eq!(form.state(), &SubmitState::Idle);
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
        assert!(form.is_submitting());
    }

    #[test]
    fn failed_submission_keeps_values() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish_submit(Err(TransportError::Network("offline".into())));

        assert_eq!(form.state(), &SubmitState::Failed(TransportError::Network("offline".into())));
        assert_eq!(form.value(FieldId::Email), "jordan@example.com");

        // retry straight from Failed
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn late_result_after_cancel_is_ignored() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.cancel_submit();
        form.finish_submit(Ok(()));
        assert_eq!(form.state(), &SubmitState::Idle);
        assert_eq!(form.value(FieldId::FullName), "Jordan Reyes");
    }

    #[test]
    fn transport_outcome_drives_state() {
        use crate::consultation::transport::testing::StubTransport;
        use crate::consultation::transport::SubmitTransport;

        let stub = StubTransport::answering(Err(TransportError::Rejected { status: 500 }));
        let mut form = filled();
        let request = form.begin_submit().unwrap();
        let result = futures::executor::block_on(stub.submit(request.clone()));
        form.finish_submit(result);

        assert_eq!(stub.seen.borrow().as_slice(), &[request]);
        assert!(matches!(form.state(), SubmitState::Failed(TransportError::Rejected { status: 500 })));
    }
}
