use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::{
	schema::{FieldErrors, FieldValue, IntakeForm},
	submission::{SubmissionState, SubmitError},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAttempt<F: Ord, P> {
	/// Some fields are invalid; they're all visible now
	Blocked(FieldErrors<F>),
	/// There's already a request out for this form
	InFlight,
	/// Good to go. The form is now pending until [`FormController::resolve`] is called.
	Dispatched(P)
}

/// The live state of one form: what's in every field, what's wrong with them, which ones the user
/// has already been to, and where the current submission is at.
pub struct FormController<F: IntakeForm> {
	values: F,
	errors: FieldErrors<F::Field>,
	touched: BTreeSet<F::Field>,
	// set once a submit attempt was blocked, so that errors on fields the user never got to show
	// up as well
	reveal_all: bool,
	state: SubmissionState
}

impl<F: IntakeForm> Default for FormController<F> {
	fn default() -> Self {
		Self::new()
	}
}

impl<F: IntakeForm> FormController<F> {
	#[must_use]
	pub fn new() -> Self {
		Self {
			values: F::default(),
			errors: FieldErrors::new(),
			touched: BTreeSet::new(),
			reveal_all: false,
			state: SubmissionState::Idle
		}
	}

	#[must_use]
	pub fn values(&self) -> &F {
		&self.values
	}

	#[must_use]
	pub fn errors(&self) -> &FieldErrors<F::Field> {
		&self.errors
	}

	#[must_use]
	pub fn state(&self) -> &SubmissionState {
		&self.state
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.state.is_pending()
	}

	#[must_use]
	pub fn is_touched(&self, field: F::Field) -> bool {
		self.touched.contains(&field)
	}

	/// The error to show next to `field`. Fields the user hasn't been to yet stay quiet until they
	/// try to submit.
	#[must_use]
	pub fn visible_error(&self, field: F::Field) -> Option<&'static str> {
		if self.reveal_all || self.touched.contains(&field) {
			self.errors.get(field)
		} else {
			None
		}
	}

	pub fn set_field(&mut self, field: F::Field, value: impl Into<FieldValue>, today: NaiveDate) {
		self.values.set(field, value.into());
		self.touched.insert(field);
		// the forms are small enough that just redoing all of them is fine, and it means
		// anything that depends on more than one field stays correct
		self.errors = self.values.validate(today);
		self.acknowledge();
	}

	pub fn attempt_submit(&mut self, today: NaiveDate) -> SubmitAttempt<F::Field, F::Payload> {
		if self.state.is_pending() {
			return SubmitAttempt::InFlight;
		}

		self.acknowledge();

		match self.values.to_payload(today) {
			Ok(payload) => {
				self.errors = FieldErrors::new();
				self.state = SubmissionState::Pending;
				SubmitAttempt::Dispatched(payload)
			},
			Err(errors) => {
				self.errors = errors.clone();
				self.reveal_all = true;
				SubmitAttempt::Blocked(errors)
			}
		}
	}

	/// Applies the outcome of the request that [`Self::attempt_submit`] dispatched. Returns false
	/// (and does nothing) if there wasn't one out.
	pub fn resolve(&mut self, outcome: Result<(), SubmitError>) -> bool {
		if !self.state.is_pending() {
			return false;
		}

		self.state = match outcome {
			Ok(()) => {
				self.reset();
				SubmissionState::Succeeded
			},
			Err(err) => SubmissionState::Failed(err.reason())
		};

		true
	}

	/// The user has seen how the last submission went, so we can go back to idle
	pub fn acknowledge(&mut self) {
		if self.state.is_resolved() {
			self.state = SubmissionState::Idle;
		}
	}

	pub fn reset(&mut self) {
		self.values = F::default();
		self.errors = FieldErrors::new();
		self.touched.clear();
		self.reveal_all = false;
	}

	/// For when whatever's showing the form is closed. A request that's still out will still
	/// resolve this form when it comes back.
	pub fn dismiss(&mut self) {
		self.reset();
		self.acknowledge();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		booking::{BookingField, BookingForm},
		contact::{ContactField, ContactForm, ContactRequest},
	};

	fn today() -> NaiveDate {
		NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
	}

	fn filled_contact() -> FormController<ContactForm> {
		let mut form = FormController::new();
		form.set_field(ContactField::FirstName, "Ann", today());
		form.set_field(ContactField::LastName, "Lee", today());
		form.set_field(ContactField::Email, "ann@example.com", today());
		form.set_field(ContactField::Phone, "555-0100", today());
		form.set_field(ContactField::Message, "hi there, I have a question", today());
		form
	}

	#[test]
	fn only_touched_fields_show_errors_until_submit() {
		let mut form = FormController::<BookingForm>::new();
		form.set_field(BookingField::Email, "not an email", today());

		assert_eq!(form.visible_error(BookingField::Email), Some("Please enter a valid email address"));
		// the error exists, it's just not shown yet
		assert!(form.errors().contains(BookingField::FirstName));
		assert_eq!(form.visible_error(BookingField::FirstName), None);

		let SubmitAttempt::Blocked(errors) = form.attempt_submit(today()) else {
			panic!("an almost empty booking shouldn't go out");
		};
		assert_eq!(errors.len(), 8);
		assert_eq!(form.visible_error(BookingField::FirstName), Some("First name is required"));
		assert_eq!(*form.state(), SubmissionState::Idle);
	}

	#[test]
	fn blocked_attempt_leaves_values_alone() {
		let mut form = filled_contact();
		form.set_field(ContactField::Message, "hi", today());
		let before = form.values().clone();

		assert!(matches!(form.attempt_submit(today()), SubmitAttempt::Blocked(_)));
		assert_eq!(*form.values(), before);
	}

	#[test]
	fn fixing_a_field_clears_its_error() {
		let mut form = filled_contact();
		form.set_field(ContactField::Email, "ann@", today());
		assert!(form.visible_error(ContactField::Email).is_some());

		form.set_field(ContactField::Email, "ann@example.com", today());
		assert_eq!(form.visible_error(ContactField::Email), None);
		assert!(form.errors().is_empty());
	}

	#[test]
	fn dispatch_goes_pending_and_refuses_a_second_one() {
		let mut form = filled_contact();

		let SubmitAttempt::Dispatched(payload) = form.attempt_submit(today()) else {
			panic!("a filled contact form should go out");
		};
		assert_eq!(payload, ContactRequest {
			first_name: "Ann".into(),
			last_name: "Lee".into(),
			email: "ann@example.com".into(),
			phone: "555-0100".into(),
			message: "hi there, I have a question".into()
		});
		assert!(form.is_pending());

		assert_eq!(form.attempt_submit(today()), SubmitAttempt::InFlight);
		assert!(form.is_pending());
	}

	#[test]
	fn success_resets_everything() {
		let mut form = filled_contact();
		let _ = form.attempt_submit(today());

		assert!(form.resolve(Ok(())));
		assert_eq!(*form.values(), ContactForm::default());
		assert!(!form.is_touched(ContactField::FirstName));
		assert_eq!(*form.state(), SubmissionState::Succeeded);
		// a fresh form shouldn't greet the user with a wall of errors
		assert_eq!(form.visible_error(ContactField::FirstName), None);
	}

	#[test]
	fn failure_keeps_values_and_goes_back_to_idle_on_edit() {
		let mut form = filled_contact();
		let before = form.values().clone();
		let _ = form.attempt_submit(today());

		form.resolve(Err(SubmitError::Rejected { status: 503, message: None }));
		assert_eq!(*form.values(), before);
		assert_eq!(*form.state(), SubmissionState::Failed("Please try again later.".into()));

		form.set_field(ContactField::Phone, "", today());
		assert_eq!(*form.state(), SubmissionState::Idle);
	}

	#[test]
	fn failure_allows_resubmitting() {
		let mut form = filled_contact();
		let _ = form.attempt_submit(today());
		form.resolve(Err(SubmitError::Transport("offline".into())));

		assert!(matches!(form.attempt_submit(today()), SubmitAttempt::Dispatched(_)));
		assert!(form.is_pending());
	}

	#[test]
	fn resolve_without_a_request_does_nothing() {
		let mut form = filled_contact();
		assert!(!form.resolve(Ok(())));
		assert_eq!(form.values().first_name, "Ann");
		assert_eq!(*form.state(), SubmissionState::Idle);
	}

	#[test]
	fn dismissing_clears_but_a_late_response_still_lands() {
		let mut form = FormController::<BookingForm>::new();
		for (field, value) in [
			(BookingField::FirstName, "Ann"),
			(BookingField::LastName, "Lee"),
			(BookingField::Email, "ann@example.com"),
			(BookingField::Phone, "555-0100"),
			(BookingField::Service, "couples"),
			(BookingField::PreferredDate, "2025-03-21"),
			(BookingField::PreferredTime, "14:00"),
		] {
			form.set_field(field, value, today());
		}
		form.set_field(BookingField::AgreeToTerms, true, today());

		assert!(matches!(form.attempt_submit(today()), SubmitAttempt::Dispatched(_)));
		form.dismiss();
		assert_eq!(*form.values(), BookingForm::default());
		assert!(form.is_pending());

		assert!(form.resolve(Ok(())));
		assert_eq!(*form.state(), SubmissionState::Succeeded);
	}
}
