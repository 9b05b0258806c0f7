use std::{collections::BTreeMap, fmt::Debug};

use chrono::{Days, NaiveDate};
use serde::Serialize;
use validator::ValidateEmail;

/// The format that `<input type="date">` hands us and that we put on the wire
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whatever a single input element can give us. Checkboxes give `Checked`, everything else gives
/// `Text`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
	Text(String),
	Checked(bool)
}

impl FieldValue {
	#[must_use]
	pub fn into_text(self) -> String {
		match self {
			Self::Text(text) => text,
			Self::Checked(checked) => checked.to_string()
		}
	}

	// only an actual checked box counts. A text value of "true" is not the same thing
	#[must_use]
	pub fn is_checked(&self) -> bool {
		matches!(self, Self::Checked(true))
	}
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for FieldValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<bool> for FieldValue {
	fn from(value: bool) -> Self {
		Self::Checked(value)
	}
}

/// Map from a field to the reason its current value isn't acceptable. A field that has no entry
/// is valid, and an empty map means the form can be submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldErrors<F: Ord>(BTreeMap<F, &'static str>);

impl<F: Ord> Default for FieldErrors<F> {
	fn default() -> Self {
		Self(BTreeMap::new())
	}
}

impl<F: Ord + Copy> FieldErrors<F> {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, field: F, reason: &'static str) {
		self.0.insert(field, reason);
	}

	#[must_use]
	pub fn get(&self, field: F) -> Option<&'static str> {
		self.0.get(&field).copied()
	}

	#[must_use]
	pub fn contains(&self, field: F) -> bool {
		self.0.contains_key(&field)
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// The error of the field that comes first in the form
	#[must_use]
	pub fn first(&self) -> Option<(F, &'static str)> {
		self.iter().next()
	}

	pub fn iter(&self) -> impl Iterator<Item = (F, &'static str)> + '_ {
		self.0.iter().map(|(field, reason)| (*field, *reason))
	}
}

impl<F: Ord> FromIterator<(F, &'static str)> for FieldErrors<F> {
	fn from_iter<I: IntoIterator<Item = (F, &'static str)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

/// A field of some intake form. The ordering is the order the fields are shown in, which is also
/// the order errors are reported in.
pub trait FormField: Copy + Ord + Debug + 'static {
	/// The name used in the JSON payload and as the id of the input element
	fn name(self) -> &'static str;
}

/// Everything a form needs to declare for the generic controller and coordinator to drive it:
/// its fields, the predicate for each of them, and how the validated values turn into what we
/// actually send.
pub trait IntakeForm: Default + Clone + Debug {
	type Field: FormField;
	type Payload: Serialize;

	const ENDPOINT: &'static str;
	const FIELDS: &'static [Self::Field];

	const SUCCESS_TITLE: &'static str;
	const SUCCESS_DETAIL: &'static str;
	const FAILURE_TITLE: &'static str;

	fn set(&mut self, field: Self::Field, value: FieldValue);

	/// Returns the reason `field` is invalid, if it is
	fn check(&self, field: Self::Field, today: NaiveDate) -> Option<&'static str>;

	/// Only succeeds if [`Self::validate`] would return no errors
	fn to_payload(&self, today: NaiveDate) -> Result<Self::Payload, FieldErrors<Self::Field>>;

	fn validate(&self, today: NaiveDate) -> FieldErrors<Self::Field> {
		Self::FIELDS.iter()
			.filter_map(|&field| self.check(field, today).map(|reason| (field, reason)))
			.collect()
	}
}

#[must_use]
pub fn tomorrow(today: NaiveDate) -> NaiveDate {
	// only fails at the very end of chrono's range, and then today is as late as it gets anyways
	today.checked_add_days(Days::new(1)).unwrap_or(today)
}

#[must_use]
pub fn is_filled(value: &str) -> bool {
	!value.trim().is_empty()
}

/// `local@domain`, where the domain has to have at least one dot in it. `validator` happily
/// accepts `someone@localhost`, which isn't something anyone can actually get mail at from us.
#[must_use]
pub fn is_email(value: &str) -> bool {
	value.validate_email() &&
		value.rsplit_once('@').is_some_and(|(_, domain)| domain.contains('.'))
}

#[must_use]
pub fn has_min_chars(value: &str, min: usize) -> bool {
	value.trim().chars().count() >= min
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateProblem {
	Missing,
	Unparseable,
	TooEarly
}

/// Parses a date picker value and makes sure it's no earlier than `earliest`
pub fn date_from(value: &str, earliest: NaiveDate) -> Result<NaiveDate, DateProblem> {
	let value = value.trim();
	if value.is_empty() {
		return Err(DateProblem::Missing);
	}

	let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
		.map_err(|_| DateProblem::Unparseable)?;

	if date < earliest {
		Err(DateProblem::TooEarly)
	} else {
		Ok(date)
	}
}
