use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schema::{
	self,
	DateProblem,
	FieldErrors,
	FieldValue,
	FormField,
	IntakeForm,
	DATE_FORMAT,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Service {
	HotStone,
	Facial,
	Aromatherapy,
	BodyWrap,
	Couples,
	Meditation
}

impl Service {
	pub const ALL: [Self; 6] = [
		Self::HotStone,
		Self::Facial,
		Self::Aromatherapy,
		Self::BodyWrap,
		Self::Couples,
		Self::Meditation
	];

	#[must_use]
	pub fn id(self) -> &'static str {
		match self {
			Self::HotStone => "hot-stone",
			Self::Facial => "facial",
			Self::Aromatherapy => "aromatherapy",
			Self::BodyWrap => "body-wrap",
			Self::Couples => "couples",
			Self::Meditation => "meditation"
		}
	}

	#[must_use]
	pub fn from_id(id: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|s| s.id() == id)
	}

	#[must_use]
	pub fn name(self) -> &'static str {
		match self {
			Self::HotStone => "Hot Stone Massage",
			Self::Facial => "Rejuvenating Facial",
			Self::Aromatherapy => "Aromatherapy Session",
			Self::BodyWrap => "Detox Body Wrap",
			Self::Couples => "Couples Massage",
			Self::Meditation => "Wellness Meditation"
		}
	}

	#[must_use]
	pub fn description(self) -> &'static str {
		match self {
			Self::HotStone => "Melt away tension with our signature hot stone therapy, combining heated volcanic stones with expert massage techniques.",
			Self::Facial => "Restore your skin's natural radiance with our customized facial treatments using premium organic ingredients.",
			Self::Aromatherapy => "Experience the healing power of essential oils in a personalized aromatherapy journey for mind and body.",
			Self::BodyWrap => "Purify and nourish your skin with our mineral-rich body wrap treatments using natural clay and seaweed.",
			Self::Couples => "Share a moment of bliss with your loved one in our private couples suite with synchronized massage therapy.",
			Self::Meditation => "Find inner peace through guided meditation sessions in our tranquil sanctuary designed for spiritual renewal."
		}
	}

	// in whole dollars
	#[must_use]
	pub fn price(self) -> u16 {
		match self {
			Self::HotStone => 150,
			Self::Facial => 120,
			Self::Aromatherapy => 100,
			Self::BodyWrap => 130,
			Self::Couples => 280,
			Self::Meditation => 80
		}
	}

	#[must_use]
	pub fn minutes(self) -> u16 {
		match self {
			Self::HotStone | Self::Couples => 90,
			Self::Facial => 75,
			Self::Aromatherapy => 60,
			Self::BodyWrap => 80,
			Self::Meditation => 45
		}
	}

	#[must_use]
	pub fn image(self) -> &'static str {
		match self {
			Self::HotStone => "https://images.unsplash.com/photo-1544161515-4ab6ce6db874?auto=format&fit=crop&w=800&h=400",
			Self::Facial => "https://images.unsplash.com/photo-1570172619644-dfd03ed5d881?auto=format&fit=crop&w=800&h=400",
			Self::Aromatherapy => "https://images.unsplash.com/photo-1600334089648-b0d9d3028eb2?auto=format&fit=crop&w=800&h=400",
			Self::BodyWrap => "https://images.unsplash.com/photo-1515377905703-c4788e51af15?auto=format&fit=crop&w=800&h=400",
			Self::Couples => "https://images.unsplash.com/photo-1591343395082-e120087004b4?auto=format&fit=crop&w=800&h=400",
			Self::Meditation => "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?auto=format&fit=crop&w=800&h=400"
		}
	}

	/// What the booking select shows, e.g. `Hot Stone Massage - $150 (90 min)`
	#[must_use]
	pub fn label(self) -> String {
		format!("{} - ${} ({} min)", self.name(), self.price(), self.minutes())
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
	#[serde(rename = "09:00")]
	Nine,
	#[serde(rename = "10:00")]
	Ten,
	#[serde(rename = "11:00")]
	Eleven,
	#[serde(rename = "12:00")]
	Noon,
	#[serde(rename = "13:00")]
	One,
	#[serde(rename = "14:00")]
	Two,
	#[serde(rename = "15:00")]
	Three,
	#[serde(rename = "16:00")]
	Four,
	#[serde(rename = "17:00")]
	Five,
	#[serde(rename = "18:00")]
	Six
}

impl TimeSlot {
	pub const ALL: [Self; 10] = [
		Self::Nine,
		Self::Ten,
		Self::Eleven,
		Self::Noon,
		Self::One,
		Self::Two,
		Self::Three,
		Self::Four,
		Self::Five,
		Self::Six
	];

	// 24-hour clock, since that's what's sent
	#[must_use]
	pub fn hour(self) -> u8 {
		match self {
			Self::Nine => 9,
			Self::Ten => 10,
			Self::Eleven => 11,
			Self::Noon => 12,
			Self::One => 13,
			Self::Two => 14,
			Self::Three => 15,
			Self::Four => 16,
			Self::Five => 17,
			Self::Six => 18
		}
	}

	#[must_use]
	pub fn value(self) -> String {
		format!("{:02}:00", self.hour())
	}

	#[must_use]
	pub fn from_value(value: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|slot| slot.value() == value)
	}

	/// e.g. `9:00 AM`, `12:00 PM`, `6:00 PM`
	#[must_use]
	pub fn label(self) -> String {
		let hour = self.hour();
		let meridiem = if hour < 12 { "AM" } else { "PM" };
		let twelve = if hour > 12 { hour - 12 } else { hour };
		format!("{twelve}:00 {meridiem}")
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookingField {
	FirstName,
	LastName,
	Email,
	Phone,
	Service,
	PreferredDate,
	PreferredTime,
	SpecialRequests,
	AgreeToTerms
}

impl FormField for BookingField {
	fn name(self) -> &'static str {
		match self {
			Self::FirstName => "firstName",
			Self::LastName => "lastName",
			Self::Email => "email",
			Self::Phone => "phone",
			Self::Service => "service",
			Self::PreferredDate => "preferredDate",
			Self::PreferredTime => "preferredTime",
			Self::SpecialRequests => "specialRequests",
			Self::AgreeToTerms => "agreeToTerms"
		}
	}
}

/// The live values of the booking modal. Everything that comes from an input is kept as the raw
/// text the user typed so that we can show it back to them exactly as they left it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingForm {
	pub first_name: String,
	pub last_name: String,
	pub email: String,
	pub phone: String,
	pub service: String,
	pub preferred_date: String,
	pub preferred_time: String,
	pub special_requests: String,
	pub agree_to_terms: bool
}

/// What actually gets sent to `/api/appointments`. There's intentionally no `agree_to_terms`
/// here; it only gates submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
	pub first_name: String,
	pub last_name: String,
	pub email: String,
	pub phone: String,
	pub service: Service,
	pub preferred_date: NaiveDate,
	pub preferred_time: TimeSlot,
	#[serde(default)]
	pub special_requests: String
}

impl From<&AppointmentRequest> for BookingForm {
	// the server only ever sees requests that already agreed to the terms, since we don't even
	// send the request otherwise
	fn from(req: &AppointmentRequest) -> Self {
		Self {
			first_name: req.first_name.clone(),
			last_name: req.last_name.clone(),
			email: req.email.clone(),
			phone: req.phone.clone(),
			service: req.service.id().to_string(),
			preferred_date: req.preferred_date.format(DATE_FORMAT).to_string(),
			preferred_time: req.preferred_time.value(),
			special_requests: req.special_requests.clone(),
			agree_to_terms: true
		}
	}
}

impl IntakeForm for BookingForm {
	type Field = BookingField;
	type Payload = AppointmentRequest;

	const ENDPOINT: &'static str = "/api/appointments";
	const FIELDS: &'static [BookingField] = &[
		BookingField::FirstName,
		BookingField::LastName,
		BookingField::Email,
		BookingField::Phone,
		BookingField::Service,
		BookingField::PreferredDate,
		BookingField::PreferredTime,
		BookingField::SpecialRequests,
		BookingField::AgreeToTerms
	];

	const SUCCESS_TITLE: &'static str = "Appointment booked successfully!";
	const SUCCESS_DETAIL: &'static str = "We'll contact you within 24 hours to confirm your appointment.";
	const FAILURE_TITLE: &'static str = "Error booking appointment";

	fn set(&mut self, field: BookingField, value: FieldValue) {
		match field {
			BookingField::AgreeToTerms => self.agree_to_terms = value.is_checked(),
			BookingField::FirstName => self.first_name = value.into_text(),
			BookingField::LastName => self.last_name = value.into_text(),
			BookingField::Email => self.email = value.into_text(),
			BookingField::Phone => self.phone = value.into_text(),
			BookingField::Service => self.service = value.into_text(),
			BookingField::PreferredDate => self.preferred_date = value.into_text(),
			BookingField::PreferredTime => self.preferred_time = value.into_text(),
			BookingField::SpecialRequests => self.special_requests = value.into_text(),
		}
	}

	fn check(&self, field: BookingField, today: NaiveDate) -> Option<&'static str> {
		match field {
			BookingField::FirstName => (!schema::is_filled(&self.first_name))
				.then_some("First name is required"),
			BookingField::LastName => (!schema::is_filled(&self.last_name))
				.then_some("Last name is required"),
			BookingField::Email => (!schema::is_email(&self.email))
				.then_some("Please enter a valid email address"),
			BookingField::Phone => (!schema::is_filled(&self.phone))
				.then_some("Phone number is required"),
			BookingField::Service => Service::from_id(&self.service)
				.is_none()
				.then_some("Please select a service"),
			BookingField::PreferredDate => match schema::date_from(&self.preferred_date, schema::tomorrow(today)) {
				Ok(_) => None,
				Err(DateProblem::Missing) => Some("Please select a preferred date"),
				Err(DateProblem::Unparseable) => Some("Please select a valid date"),
				Err(DateProblem::TooEarly) => Some("Please choose a date from tomorrow onward"),
			},
			BookingField::PreferredTime => TimeSlot::from_value(&self.preferred_time)
				.is_none()
				.then_some("Please select a preferred time"),
			BookingField::SpecialRequests => None,
			BookingField::AgreeToTerms => (!self.agree_to_terms)
				.then_some("You must agree to the terms and conditions"),
		}
	}

	fn to_payload(&self, today: NaiveDate) -> Result<AppointmentRequest, FieldErrors<BookingField>> {
		let errors = self.validate(today);

		// if validation passed, these can't fail, but it's nicer to not have to unwrap
		let service = Service::from_id(&self.service);
		let preferred_date = schema::date_from(&self.preferred_date, schema::tomorrow(today)).ok();
		let preferred_time = TimeSlot::from_value(&self.preferred_time);

		match (service, preferred_date, preferred_time) {
			(Some(service), Some(preferred_date), Some(preferred_time)) if errors.is_empty() =>
				Ok(AppointmentRequest {
					first_name: self.first_name.clone(),
					last_name: self.last_name.clone(),
					email: self.email.clone(),
					phone: self.phone.clone(),
					service,
					preferred_date,
					preferred_time,
					special_requests: self.special_requests.clone()
				}),
			_ => Err(errors)
		}
	}
}
