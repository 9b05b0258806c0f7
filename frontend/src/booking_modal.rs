use shared_data::{
	schema::{tomorrow, DATE_FORMAT},
	BookingField,
	BookingForm,
	FormField,
	Notice,
	Service,
	SubmitReport,
	TimeSlot,
};
use yew::prelude::*;

use crate::{fields::use_intake_form, transport::today};

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
	pub open: bool,
	pub on_close: Callback<()>,
	pub on_notice: Callback<Notice>
}

// This stays mounted even while it's closed, so that a booking that's still out when the modal is
// closed keeps its form state (and so that opening it again shows that it's still pending)
#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
	let form = use_intake_form::<BookingForm>();

	if !props.open {
		return html! {};
	}

	let values = form.values();
	let pending = form.is_pending();

	let on_notice = props.on_notice.clone();
	let close_on_success = props.on_close.clone();
	let on_submit = form.on_submit(Callback::from(move |report: SubmitReport<BookingField>| {
		if let Some(notice) = report.notice::<BookingForm>() {
			on_notice.emit(notice);
		}

		if matches!(report, SubmitReport::Succeeded) {
			close_on_success.emit(());
		}
	}));

	let cancel_form = form.clone();
	let on_close = props.on_close.clone();
	let cancel = Callback::from(move |_: MouseEvent| {
		cancel_form.dismiss();
		on_close.emit(());
	});

	// clicking the backdrop counts as cancelling, but clicks inside the dialog shouldn't bubble
	// up to it
	let backdrop_cancel = cancel.clone();
	let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

	let min_date = tomorrow(today()).format(DATE_FORMAT).to_string();

	let text_field = |field: BookingField, label: &'static str, kind: &'static str, value: String| html! {
		<div class="field">
			<label for={ field.name() }>{ label }</label>
			<input id={ field.name() } type={ kind } value={ value } oninput={ form.on_input(field) } />
			{ form.error(field) }
		</div>
	};

	html! {
		<>
			<style>
			{
				"
				#booking-backdrop {
					position: fixed;
					inset: 0;
					z-index: 60;
					display: flex;
					align-items: center;
					justify-content: center;
					padding: 16px;
					background-color: rgba(0, 0, 0, 0.5);
				}
				#booking-modal {
					background-color: white;
					border-radius: 16px;
					padding: 32px;
					width: 100%;
					max-width: 680px;
					max-height: 90vh;
					overflow-y: auto;
				}
				#booking-modal h2 {
					font-size: 2rem;
					margin-top: 0;
				}
				#booking-modal textarea {
					resize: none;
				}
				#terms {
					display: flex;
					gap: 12px;
					align-items: flex-start;
				}
				#terms input {
					width: auto;
					margin-top: 4px;
				}
				#terms label {
					font-weight: 400;
					font-size: 0.875rem;
					color: var(--secondary-text);
					cursor: pointer;
				}
				#booking-buttons {
					display: flex;
					gap: 16px;
				}
				#booking-buttons button {
					flex: 1;
					border-radius: 8px;
				}
				"
			}
			</style>
			<div id="booking-backdrop" onclick={ backdrop_cancel }>
				<form
					id="booking-modal"
					role="dialog"
					aria-modal="true"
					onclick={ swallow }
					onsubmit={ on_submit }
					novalidate={ true }
				>
					<h2>{ "Book Your Appointment" }</h2>
					<div class="field-row">
						{ text_field(BookingField::FirstName, "First Name *", "text", values.first_name) }
						{ text_field(BookingField::LastName, "Last Name *", "text", values.last_name) }
					</div>
					<div class="field-row">
						{ text_field(BookingField::Email, "Email *", "email", values.email) }
						{ text_field(BookingField::Phone, "Phone *", "tel", values.phone) }
					</div>
					<div class="field">
						<label for={ BookingField::Service.name() }>{ "Select Service *" }</label>
						<select id={ BookingField::Service.name() } onchange={ form.on_change(BookingField::Service) }>
							<option value="" selected={ values.service.is_empty() }>{ "Choose a service..." }</option>
							{
								Service::ALL.into_iter().map(|service| html! {
									<option value={ service.id() } selected={ values.service == service.id() }>
										{ service.label() }
									</option>
								}).collect::<Html>()
							}
						</select>
						{ form.error(BookingField::Service) }
					</div>
					<div class="field-row">
						<div class="field">
							<label for={ BookingField::PreferredDate.name() }>{ "Preferred Date *" }</label>
							<input
								id={ BookingField::PreferredDate.name() }
								type="date"
								min={ min_date }
								value={ values.preferred_date }
								oninput={ form.on_input(BookingField::PreferredDate) }
							/>
							{ form.error(BookingField::PreferredDate) }
						</div>
						<div class="field">
							<label for={ BookingField::PreferredTime.name() }>{ "Preferred Time *" }</label>
							<select
								id={ BookingField::PreferredTime.name() }
								onchange={ form.on_change(BookingField::PreferredTime) }
							>
								<option value="" selected={ values.preferred_time.is_empty() }>{ "Select time..." }</option>
								{
									TimeSlot::ALL.into_iter().map(|slot| {
										let value = slot.value();
										let selected = values.preferred_time == value;
										html! { <option value={ value } selected={ selected }>{ slot.label() }</option> }
									}).collect::<Html>()
								}
							</select>
							{ form.error(BookingField::PreferredTime) }
						</div>
					</div>
					<div class="field">
						<label for={ BookingField::SpecialRequests.name() }>{ "Special Requests" }</label>
						<textarea
							id={ BookingField::SpecialRequests.name() }
							rows="3"
							placeholder="Any allergies, preferences, or special requests..."
							value={ values.special_requests }
							oninput={ form.on_input(BookingField::SpecialRequests) }
						/>
					</div>
					<div class="field">
						<div id="terms">
							<input
								id={ BookingField::AgreeToTerms.name() }
								type="checkbox"
								checked={ values.agree_to_terms }
								onchange={ form.on_check(BookingField::AgreeToTerms) }
							/>
							<label for={ BookingField::AgreeToTerms.name() }>
								{ "I agree to the terms and conditions and cancellation policy" }
							</label>
						</div>
						{ form.error(BookingField::AgreeToTerms) }
					</div>
					<div id="booking-buttons">
						<button type="button" class="outline" onclick={ cancel }>{ "Cancel" }</button>
						<button type="submit" disabled={ pending }>
							{ if pending { "Booking..." } else { "Book Appointment" } }
						</button>
					</div>
				</form>
			</div>
		</>
	}
}
