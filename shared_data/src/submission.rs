use std::{cell::RefCell, future::Future, rc::Rc};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
	form::{FormController, SubmitAttempt},
	schema::{FieldErrors, IntakeForm},
};

/// What we show when the server didn't tell us anything useful
pub const GENERIC_FAILURE: &str = "Please try again later.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
	#[default]
	Idle,
	// exactly one request is out; another one can't be sent until it comes back
	Pending,
	Succeeded,
	Failed(String)
}

impl SubmissionState {
	#[must_use]
	pub fn is_pending(&self) -> bool {
		matches!(self, Self::Pending)
	}

	#[must_use]
	pub fn is_resolved(&self) -> bool {
		matches!(self, Self::Succeeded | Self::Failed(_))
	}
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
	#[error("couldn't encode the request: {0}")]
	Encode(String),
	#[error("couldn't reach the server: {0}")]
	Transport(String),
	#[error("server responded with {status}: {}", .message.as_deref().unwrap_or("(no message)"))]
	Rejected {
		status: u16,
		message: Option<String>
	}
}

impl SubmitError {
	/// The text the user sees. Only a message the server gave us is worth showing verbatim;
	/// everything else gets the generic one.
	#[must_use]
	pub fn reason(&self) -> String {
		match self {
			Self::Rejected { message: Some(message), .. } => message.clone(),
			_ => GENERIC_FAILURE.to_string()
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
	pub status: u16,
	pub body: String
}

#[derive(Deserialize)]
struct ErrorBody {
	message: Option<String>
}

impl TransportResponse {
	#[must_use]
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// The `message` field of the body, if the body is JSON and has a non-empty one
	#[must_use]
	pub fn message(&self) -> Option<String> {
		serde_json::from_str::<ErrorBody>(&self.body)
			.ok()
			.and_then(|body| body.message)
			.filter(|msg| !msg.trim().is_empty())
	}

	pub fn into_outcome(self) -> Result<(), SubmitError> {
		if self.is_success() {
			Ok(())
		} else {
			Err(SubmitError::Rejected {
				status: self.status,
				message: self.message()
			})
		}
	}
}

/// Something that can POST a JSON body somewhere. In the browser this is gloo-net; in tests it's
/// whatever we want it to be.
pub trait Transport {
	/// Errors are only for when we couldn't get a response at all. A non-2xx response is still
	/// `Ok`.
	fn post_json(&self, endpoint: &str, body: String) -> impl Future<Output = Result<TransportResponse, String>>;
}

pub async fn deliver<T: Transport, P: Serialize>(
	transport: &T,
	endpoint: &str,
	payload: &P
) -> Result<(), SubmitError> {
	let body = serde_json::to_string(payload)
		.map_err(|e| SubmitError::Encode(e.to_string()))?;

	transport.post_json(endpoint, body)
		.await
		.map_err(SubmitError::Transport)?
		.into_outcome()
}

/// A toast, basically
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
	pub title: &'static str,
	pub description: String,
	pub destructive: bool
}

/// How a call to [`Coordinator::submit`] went
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitReport<F: Ord> {
	/// Nothing was sent because some fields are invalid
	Blocked(FieldErrors<F>),
	/// Nothing was sent because a request is already out
	AlreadyPending,
	Succeeded,
	Failed(SubmitError)
}

impl<F: Ord> SubmitReport<F> {
	/// Field problems are shown next to the fields themselves, so only an actual response gets a
	/// notice
	#[must_use]
	pub fn notice<I: IntakeForm<Field = F>>(&self) -> Option<Notice> {
		match self {
			Self::Blocked(_) | Self::AlreadyPending => None,
			Self::Succeeded => Some(Notice {
				title: I::SUCCESS_TITLE,
				description: I::SUCCESS_DETAIL.to_string(),
				destructive: false
			}),
			Self::Failed(err) => Some(Notice {
				title: I::FAILURE_TITLE,
				description: err.reason(),
				destructive: true
			})
		}
	}
}

/// Owns one form's controller (shared with whatever renders it) and the transport, and makes
/// sure a form only ever has one request out at a time.
pub struct Coordinator<F: IntakeForm, T: Transport> {
	form: Rc<RefCell<FormController<F>>>,
	transport: T
}

impl<F: IntakeForm, T: Transport> Coordinator<F, T> {
	pub fn new(transport: T) -> Self {
		Self {
			form: Rc::new(RefCell::new(FormController::new())),
			transport
		}
	}

	#[must_use]
	pub fn form(&self) -> &Rc<RefCell<FormController<F>>> {
		&self.form
	}

	#[must_use]
	pub fn transport(&self) -> &T {
		&self.transport
	}

	pub async fn submit(&self, today: NaiveDate) -> SubmitReport<F::Field> {
		// the borrow has to end before we await anything, or an edit made while the request is
		// out would panic
		let attempt = self.form.borrow_mut().attempt_submit(today);

		let payload = match attempt {
			SubmitAttempt::Blocked(errors) => return SubmitReport::Blocked(errors),
			SubmitAttempt::InFlight => return SubmitReport::AlreadyPending,
			SubmitAttempt::Dispatched(payload) => payload,
		};

		let outcome = deliver(&self.transport, F::ENDPOINT, &payload).await;
		let report = match &outcome {
			Ok(()) => SubmitReport::Succeeded,
			Err(err) => SubmitReport::Failed(err.clone()),
		};

		self.form.borrow_mut().resolve(outcome);
		report
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		booking::{BookingField, BookingForm},
		contact::{ContactField, ContactForm},
		schema::FieldValue,
	};
	use tokio::sync::Notify;

	struct MockTransport {
		response: Result<TransportResponse, String>,
		sent: RefCell<Vec<(String, String)>>,
		gate: Option<Rc<Notify>>
	}

	impl MockTransport {
		fn responding(status: u16, body: &str) -> Self {
			Self {
				response: Ok(TransportResponse { status, body: body.into() }),
				sent: RefCell::default(),
				gate: None
			}
		}

		fn unreachable() -> Self {
			Self {
				response: Err("connection refused".into()),
				sent: RefCell::default(),
				gate: None
			}
		}

		fn gated(mut self, gate: &Rc<Notify>) -> Self {
			self.gate = Some(gate.clone());
			self
		}

		fn sent(&self) -> Vec<(String, String)> {
			self.sent.borrow().clone()
		}
	}

	impl Transport for MockTransport {
		async fn post_json(&self, endpoint: &str, body: String) -> Result<TransportResponse, String> {
			self.sent.borrow_mut().push((endpoint.to_string(), body));
			if let Some(gate) = &self.gate {
				gate.notified().await;
			}
			self.response.clone()
		}
	}

	fn today() -> NaiveDate {
		NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
	}

	fn fill_booking<T: Transport>(coordinator: &Coordinator<BookingForm, T>, agree: bool, date: &str) {
		let mut form = coordinator.form().borrow_mut();
		let text_fields = [
			(BookingField::FirstName, "Ann"),
			(BookingField::LastName, "Lee"),
			(BookingField::Email, "ann@example.com"),
			(BookingField::Phone, "555-0100"),
			(BookingField::Service, "facial"),
			(BookingField::PreferredDate, date),
			(BookingField::PreferredTime, "10:00"),
			(BookingField::SpecialRequests, ""),
		];
		for (field, value) in text_fields {
			form.set_field(field, value, today());
		}
		form.set_field(BookingField::AgreeToTerms, agree, today());
	}

	fn fill_contact<T: Transport>(coordinator: &Coordinator<ContactForm, T>, message: &str) {
		let mut form = coordinator.form().borrow_mut();
		form.set_field(ContactField::FirstName, "Ann", today());
		form.set_field(ContactField::LastName, "Lee", today());
		form.set_field(ContactField::Email, "ann@example.com", today());
		form.set_field(ContactField::Message, message, today());
	}

	#[tokio::test]
	async fn valid_booking_sends_one_request_without_terms() {
		let coordinator = Coordinator::<BookingForm, _>::new(MockTransport::responding(201, "{}"));
		fill_booking(&coordinator, true, "2025-03-15");

		let report = coordinator.submit(today()).await;
		assert_eq!(report, SubmitReport::Succeeded);

		let sent = coordinator.transport().sent();
		assert_eq!(sent.len(), 1);
		assert_eq!(sent[0].0, "/api/appointments");

		let body: serde_json::Value = serde_json::from_str(&sent[0].1).unwrap();
		assert!(body.get("agreeToTerms").is_none());
		assert_eq!(body["preferredDate"], "2025-03-15");
		assert_eq!(body["service"], "facial");
	}

	#[tokio::test]
	async fn unchecked_terms_sends_nothing() {
		let coordinator = Coordinator::<BookingForm, _>::new(MockTransport::responding(201, "{}"));
		fill_booking(&coordinator, false, "2025-03-15");

		let report = coordinator.submit(today()).await;
		let SubmitReport::Blocked(errors) = report else {
			panic!("expected to be blocked, got {report:?}");
		};
		assert_eq!(errors.len(), 1);
		assert!(errors.contains(BookingField::AgreeToTerms));
		assert!(coordinator.transport().sent().is_empty());
		assert_eq!(*coordinator.form().borrow().state(), SubmissionState::Idle);
	}

	#[tokio::test]
	async fn booking_for_today_sends_nothing() {
		let coordinator = Coordinator::<BookingForm, _>::new(MockTransport::responding(201, "{}"));
		fill_booking(&coordinator, true, "2025-03-14");

		assert!(matches!(coordinator.submit(today()).await, SubmitReport::Blocked(_)));
		assert!(coordinator.transport().sent().is_empty());
	}

	#[tokio::test]
	async fn short_contact_message_sends_nothing() {
		let coordinator = Coordinator::<ContactForm, _>::new(MockTransport::responding(200, "{}"));
		fill_contact(&coordinator, "hi");
		assert!(matches!(coordinator.submit(today()).await, SubmitReport::Blocked(_)));
		assert!(coordinator.transport().sent().is_empty());

		coordinator.form().borrow_mut().set_field(ContactField::Message, "hi there, I have a question", today());
		assert_eq!(coordinator.submit(today()).await, SubmitReport::Succeeded);
		assert_eq!(coordinator.transport().sent().len(), 1);
	}

	#[tokio::test]
	async fn success_resets_the_form() {
		let coordinator = Coordinator::<ContactForm, _>::new(MockTransport::responding(200, "{\"id\": 4}"));
		fill_contact(&coordinator, "hi there, I have a question");

		assert_eq!(coordinator.submit(today()).await, SubmitReport::Succeeded);

		let form = coordinator.form().borrow();
		assert_eq!(*form.values(), ContactForm::default());
		assert!(form.errors().is_empty());
		assert_eq!(*form.state(), SubmissionState::Succeeded);
	}

	#[tokio::test]
	async fn rejection_keeps_values_and_surfaces_server_message() {
		let coordinator = Coordinator::<BookingForm, _>::new(
			MockTransport::responding(409, r#"{"message": "That slot is already taken"}"#)
		);
		fill_booking(&coordinator, true, "2025-03-20");
		let before = coordinator.form().borrow().values().clone();

		let report = coordinator.submit(today()).await;
		assert_eq!(report, SubmitReport::Failed(SubmitError::Rejected {
			status: 409,
			message: Some("That slot is already taken".into())
		}));

		let notice = report.notice::<BookingForm>().unwrap();
		assert_eq!(notice.title, "Error booking appointment");
		assert_eq!(notice.description, "That slot is already taken");
		assert!(notice.destructive);

		let form = coordinator.form().borrow();
		assert_eq!(*form.values(), before);
		assert_eq!(*form.state(), SubmissionState::Failed("That slot is already taken".into()));
	}

	#[tokio::test]
	async fn rejection_without_message_uses_generic_reason() {
		let coordinator = Coordinator::<ContactForm, _>::new(MockTransport::responding(500, "Internal Server Error"));
		fill_contact(&coordinator, "hi there, I have a question");

		let report = coordinator.submit(today()).await;
		let notice = report.notice::<ContactForm>().unwrap();
		assert_eq!(notice.title, "Error sending message");
		assert_eq!(notice.description, GENERIC_FAILURE);
		assert_eq!(coordinator.form().borrow().values().message, "hi there, I have a question");
	}

	#[tokio::test]
	async fn unreachable_server_uses_generic_reason_and_allows_retry() {
		let coordinator = Coordinator::<ContactForm, _>::new(MockTransport::unreachable());
		fill_contact(&coordinator, "hi there, I have a question");

		let report = coordinator.submit(today()).await;
		assert_eq!(report, SubmitReport::Failed(SubmitError::Transport("connection refused".into())));
		assert_eq!(
			*coordinator.form().borrow().state(),
			SubmissionState::Failed(GENERIC_FAILURE.into())
		);

		// trying again goes out again, since a failure returns us to idle
		let _ = coordinator.submit(today()).await;
		assert_eq!(coordinator.transport().sent().len(), 2);
	}

	#[tokio::test]
	async fn second_submit_while_pending_sends_nothing() {
		let gate = Rc::new(Notify::new());
		let coordinator = Coordinator::<BookingForm, _>::new(
			MockTransport::responding(201, "{}").gated(&gate)
		);
		fill_booking(&coordinator, true, "2025-03-15");

		let first = coordinator.submit(today());
		tokio::pin!(first);

		// poll the first submission until it's sitting on the gate
		tokio::select! {
			biased;
			report = &mut first => panic!("resolved before the response was released: {report:?}"),
			() = tokio::task::yield_now() => {}
		}
		assert!(coordinator.form().borrow().is_pending());

		assert_eq!(coordinator.submit(today()).await, SubmitReport::AlreadyPending);
		assert_eq!(coordinator.submit(today()).await, SubmitReport::AlreadyPending);

		// edits are still allowed while waiting
		coordinator.form().borrow_mut().set_field(BookingField::SpecialRequests, "quiet room please", today());
		assert!(coordinator.form().borrow().is_pending());

		gate.notify_one();
		assert_eq!(first.await, SubmitReport::Succeeded);
		assert_eq!(coordinator.transport().sent().len(), 1);
		assert_eq!(*coordinator.form().borrow().values(), BookingForm::default());
	}

	#[tokio::test]
	async fn forms_do_not_see_each_other() {
		let gate = Rc::new(Notify::new());
		let booking = Coordinator::<BookingForm, _>::new(
			MockTransport::responding(201, "{}").gated(&gate)
		);
		let contact = Coordinator::<ContactForm, _>::new(MockTransport::responding(400, r#"{"message": "nope"}"#));

		fill_booking(&booking, true, "2025-03-15");
		fill_contact(&contact, "hi there, I have a question");

		let pending_booking = booking.submit(today());
		tokio::pin!(pending_booking);
		tokio::select! {
			biased;
			report = &mut pending_booking => panic!("booking resolved early: {report:?}"),
			() = tokio::task::yield_now() => {}
		}

		// the booking being out doesn't stop the contact form
		let contact_report = contact.submit(today()).await;
		assert!(matches!(contact_report, SubmitReport::Failed(_)));
		assert!(booking.form().borrow().is_pending());
		assert_eq!(contact.form().borrow().values().first_name, "Ann");

		gate.notify_one();
		assert_eq!(pending_booking.await, SubmitReport::Succeeded);

		// and the booking succeeding doesn't reset the contact form
		assert_eq!(*booking.form().borrow().values(), BookingForm::default());
		assert_eq!(contact.form().borrow().values().first_name, "Ann");
		assert_eq!(*contact.form().borrow().state(), SubmissionState::Failed("nope".into()));
		assert_eq!(booking.transport().sent().len(), 1);
		assert_eq!(contact.transport().sent().len(), 1);
	}

	#[test]
	fn response_message_extraction() {
		let with = |status, body: &str| TransportResponse { status, body: body.into() };

		assert_eq!(with(400, r#"{"message": "Bad date"}"#).message(), Some("Bad date".into()));
		assert_eq!(with(400, r#"{"message": "   "}"#).message(), None);
		assert_eq!(with(400, r#"{"error": "Bad date"}"#).message(), None);
		assert_eq!(with(400, "<html>oops</html>").message(), None);

		assert!(with(204, "").into_outcome().is_ok());
		assert!(with(299, "").into_outcome().is_ok());
		assert!(with(302, "").into_outcome().is_err());
	}

	#[test]
	fn notices_only_for_responses() {
		let blocked: SubmitReport<ContactField> = SubmitReport::Blocked(FieldErrors::new());
		assert_eq!(blocked.notice::<ContactForm>(), None);
		assert_eq!(SubmitReport::<ContactField>::AlreadyPending.notice::<ContactForm>(), None);

		let success = SubmitReport::<ContactField>::Succeeded.notice::<ContactForm>().unwrap();
		assert_eq!(success.title, "Message sent successfully!");
		assert!(!success.destructive);
	}

	#[test]
	fn field_value_conversions_drive_the_controller() {
		let mut form = FormController::<BookingForm>::new();
		form.set_field(BookingField::AgreeToTerms, FieldValue::Checked(true), today());
		assert!(form.values().agree_to_terms);
	}
}
