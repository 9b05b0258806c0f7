use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schema::{self, FieldErrors, FieldValue, FormField, IntakeForm};

pub const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
	FirstName,
	LastName,
	Email,
	Phone,
	Message
}

impl FormField for ContactField {
	fn name(self) -> &'static str {
		match self {
			Self::FirstName => "firstName",
			Self::LastName => "lastName",
			Self::Email => "email",
			Self::Phone => "phone",
			Self::Message => "message"
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
	pub first_name: String,
	pub last_name: String,
	pub email: String,
	pub phone: String,
	pub message: String
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
	pub first_name: String,
	pub last_name: String,
	pub email: String,
	#[serde(default)]
	pub phone: String,
	pub message: String
}

impl From<&ContactRequest> for ContactForm {
	fn from(req: &ContactRequest) -> Self {
		Self {
			first_name: req.first_name.clone(),
			last_name: req.last_name.clone(),
			email: req.email.clone(),
			phone: req.phone.clone(),
			message: req.message.clone()
		}
	}
}

impl IntakeForm for ContactForm {
	type Field = ContactField;
	type Payload = ContactRequest;

	const ENDPOINT: &'static str = "/api/contact";
	const FIELDS: &'static [ContactField] = &[
		ContactField::FirstName,
		ContactField::LastName,
		ContactField::Email,
		ContactField::Phone,
		ContactField::Message
	];

	const SUCCESS_TITLE: &'static str = "Message sent successfully!";
	const SUCCESS_DETAIL: &'static str = "We'll get back to you within 24 hours.";
	const FAILURE_TITLE: &'static str = "Error sending message";

	fn set(&mut self, field: ContactField, value: FieldValue) {
		let text = value.into_text();
		match field {
			ContactField::FirstName => self.first_name = text,
			ContactField::LastName => self.last_name = text,
			ContactField::Email => self.email = text,
			ContactField::Phone => self.phone = text,
			ContactField::Message => self.message = text,
		}
	}

	// nothing here depends on the date, but the booking form does
	fn check(&self, field: ContactField, _today: NaiveDate) -> Option<&'static str> {
		match field {
			ContactField::FirstName => (!schema::is_filled(&self.first_name))
				.then_some("First name is required"),
			ContactField::LastName => (!schema::is_filled(&self.last_name))
				.then_some("Last name is required"),
			ContactField::Email => (!schema::is_email(&self.email))
				.then_some("Please enter a valid email address"),
			ContactField::Phone => None,
			ContactField::Message => (!schema::has_min_chars(&self.message, MIN_MESSAGE_CHARS))
				.then_some("Message must be at least 10 characters long"),
		}
	}

	fn to_payload(&self, today: NaiveDate) -> Result<ContactRequest, FieldErrors<ContactField>> {
		let errors = self.validate(today);
		if !errors.is_empty() {
			return Err(errors);
		}

		Ok(ContactRequest {
			first_name: self.first_name.clone(),
			last_name: self.last_name.clone(),
			email: self.email.clone(),
			phone: self.phone.clone(),
			message: self.message.clone()
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn today() -> NaiveDate {
		NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
	}

	fn with_message(message: &str) -> ContactForm {
		ContactForm {
			first_name: "Ann".into(),
			last_name: "Lee".into(),
			email: "ann@example.com".into(),
			phone: String::new(),
			message: message.into()
		}
	}

	#[test]
	fn short_message_is_blocked() {
		let errors = with_message("hi").validate(today());
		assert_eq!(errors.len(), 1);
		assert_eq!(errors.get(ContactField::Message), Some("Message must be at least 10 characters long"));
	}

	#[test]
	fn long_enough_message_is_eligible() {
		assert!(with_message("hi there, I have a question").validate(today()).is_empty());
	}

	#[test]
	fn padding_does_not_count_towards_message_length() {
		assert!(with_message("   short       ").check(ContactField::Message, today()).is_some());
		assert!(with_message("exactly 10").check(ContactField::Message, today()).is_none());
	}

	#[test]
	fn phone_is_optional() {
		let mut form = with_message("hi there, I have a question");
		form.phone = "   ".into();
		assert!(form.validate(today()).is_empty());
	}

	#[test]
	fn empty_form_flags_everything_but_phone() {
		let errors = ContactForm::default().validate(today());
		assert_eq!(errors.len(), 4);
		assert!(!errors.contains(ContactField::Phone));
	}

	#[test]
	fn invalid_email_is_flagged_and_fixing_it_clears_it() {
		let mut form = with_message("hi there, I have a question");
		form.set(ContactField::Email, "ann(at)example.com".into());
		assert_eq!(form.check(ContactField::Email, today()), Some("Please enter a valid email address"));

		form.set(ContactField::Email, "ann@example.com".into());
		assert_eq!(form.check(ContactField::Email, today()), None);
	}

	#[test]
	fn payload_has_exactly_the_contact_keys() {
		let payload = with_message("hi there, I have a question").to_payload(today()).unwrap();
		let json = serde_json::to_value(&payload).unwrap();
		let mut keys = json.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
		keys.sort();
		assert_eq!(keys, ["email", "firstName", "lastName", "message", "phone"]);
		assert_eq!(json["phone"], "");
	}
}
