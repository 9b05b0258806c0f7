use std::rc::Rc;

use shared_data::{Coordinator, FieldValue, FormField, IntakeForm, SubmitReport};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::transport::{today, GlooTransport};

/// A form's coordinator plus a way to make the component showing it re-render. Every mutation of
/// the form goes through here so that nothing changes without the view finding out.
pub struct FormHandle<F: IntakeForm + 'static> {
	coordinator: Rc<Coordinator<F, GlooTransport>>,
	update: UseForceUpdateHandle
}

impl<F: IntakeForm + 'static> Clone for FormHandle<F> {
	fn clone(&self) -> Self {
		Self {
			coordinator: self.coordinator.clone(),
			update: self.update.clone()
		}
	}
}

#[hook]
pub fn use_intake_form<F: IntakeForm + 'static>() -> FormHandle<F> {
	let update = use_force_update();

	let send_update = update.clone();
	let coordinator = use_memo((), move |_| Coordinator::new(
		GlooTransport::new(Callback::from(move |()| send_update.force_update()))
	));

	FormHandle { coordinator, update }
}

// inputs, textareas, and selects all give us their value differently
fn event_value(e: &Event) -> Option<String> {
	let target = e.target()?;

	if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
		Some(input.value())
	} else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
		Some(area.value())
	} else {
		target.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
	}
}

impl<F: IntakeForm + 'static> FormHandle<F> {
	/// A snapshot of the current values, for filling the inputs back in
	pub fn values(&self) -> F {
		self.coordinator.form().borrow().values().clone()
	}

	pub fn is_pending(&self) -> bool {
		self.coordinator.form().borrow().is_pending()
	}

	fn set(&self, field: F::Field, value: impl Into<FieldValue>) {
		self.coordinator.form().borrow_mut().set_field(field, value, today());
		self.update.force_update();
	}

	pub fn on_input(&self, field: F::Field) -> Callback<InputEvent> {
		let handle = self.clone();
		Callback::from(move |e: InputEvent| match event_value(&e) {
			Some(value) => handle.set(field, value),
			None => gloo_console::log!(format!("input for {} had no value to read", field.name()))
		})
	}

	pub fn on_change(&self, field: F::Field) -> Callback<Event> {
		let handle = self.clone();
		Callback::from(move |e: Event| match event_value(&e) {
			Some(value) => handle.set(field, value),
			None => gloo_console::log!(format!("select for {} had no value to read", field.name()))
		})
	}

	pub fn on_check(&self, field: F::Field) -> Callback<Event> {
		let handle = self.clone();
		Callback::from(move |e: Event| if let Some(input) = e.target()
			.and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
				handle.set(field, input.checked());
			}
		)
	}

	/// The error message under a field, if it should be showing
	pub fn error(&self, field: F::Field) -> Html {
		match self.coordinator.form().borrow().visible_error(field) {
			Some(reason) => html! {
				<p class="field-error" id={ format!("{}-error", field.name()) }>{ reason }</p>
			},
			None => html! {}
		}
	}

	/// Clears the form out, e.g. because the thing showing it was closed
	pub fn dismiss(&self) {
		self.coordinator.form().borrow_mut().dismiss();
		self.update.force_update();
	}

	/// Submits the form (if it's allowed to go out) and hands back how it went once it's settled
	pub fn submit(&self, on_report: Callback<SubmitReport<F::Field>>) {
		let coordinator = self.coordinator.clone();
		let update = self.update.clone();

		wasm_bindgen_futures::spawn_local(async move {
			let report = coordinator.submit(today()).await;
			update.force_update();
			on_report.emit(report);
		});
	}

	pub fn on_submit(&self, on_report: Callback<SubmitReport<F::Field>>) -> Callback<SubmitEvent> {
		let handle = self.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();
			handle.submit(on_report.clone());
		})
	}
}
