use axum::{
	extract::{rejection::JsonRejection, State},
	http::StatusCode,
	Json,
};
use chrono::{Local, NaiveDate};
use shared_data::{
	AppointmentRequest,
	BookingForm,
	ContactForm,
	ContactRequest,
	FormField,
	IntakeForm,
	IntakeReply,
};
use tracing::{info, warn};
use uuid::Uuid;

pub type Reply = (StatusCode, Json<IntakeReply>);

/// What the intake handlers need to know about the outside world. Only the date, for now.
#[derive(Clone, Copy, Debug)]
pub struct IntakeState {
	pub today: fn() -> NaiveDate
}

impl Default for IntakeState {
	fn default() -> Self {
		Self {
			today: || Local::now().date_naive()
		}
	}
}

fn rejected(message: impl Into<String>) -> Reply {
	(StatusCode::BAD_REQUEST, Json(IntakeReply {
		id: None,
		message: message.into()
	}))
}

fn accepted(id: Uuid, message: &str) -> Reply {
	(StatusCode::CREATED, Json(IntakeReply {
		id: Some(id.to_string()),
		message: message.to_string()
	}))
}

// The browser won't let anyone pick a date before its own tomorrow, but its tomorrow can be our
// today if it's a timezone or so ahead of us. So we check as if it were yesterday, which makes
// today the earliest date we accept.
fn checking_day(today: NaiveDate) -> NaiveDate {
	today.pred_opt().unwrap_or(today)
}

/// Runs a request back through the same checks the browser did, answering with the first
/// problem found
fn review<F: IntakeForm>(form: &F, today: NaiveDate) -> Result<(), Reply> {
	match form.validate(checking_day(today)).first() {
		None => Ok(()),
		Some((field, reason)) => {
			warn!(endpoint = F::ENDPOINT, field = field.name(), reason, "Rejecting invalid request");
			Err(rejected(reason))
		}
	}
}

fn undecodable(endpoint: &str, rejection: &JsonRejection) -> Reply {
	warn!(endpoint, error = %rejection.body_text(), "Couldn't decode request");
	rejected(format!("Couldn't read request: {}", rejection.body_text()))
}

#[tracing::instrument(skip_all)]
pub async fn book_appointment(
	State(state): State<IntakeState>,
	payload: Result<Json<AppointmentRequest>, JsonRejection>
) -> Reply {
	let req = match payload {
		Ok(Json(req)) => req,
		Err(rejection) => return undecodable(BookingForm::ENDPOINT, &rejection)
	};

	if let Err(reply) = review(&BookingForm::from(&req), (state.today)()) {
		return reply;
	}

	let id = Uuid::new_v4();
	info!(
		%id,
		service = req.service.name(),
		date = %req.preferred_date,
		time = %req.preferred_time.label(),
		"Received appointment request"
	);

	accepted(id, "Appointment request received")
}

#[tracing::instrument(skip_all)]
pub async fn send_contact(
	State(state): State<IntakeState>,
	payload: Result<Json<ContactRequest>, JsonRejection>
) -> Reply {
	let req = match payload {
		Ok(Json(req)) => req,
		Err(rejection) => return undecodable(ContactForm::ENDPOINT, &rejection)
	};

	if let Err(reply) = review(&ContactForm::from(&req), (state.today)()) {
		return reply;
	}

	let id = Uuid::new_v4();
	info!(%id, chars = req.message.chars().count(), "Received contact message");

	accepted(id, "Message received")
}
