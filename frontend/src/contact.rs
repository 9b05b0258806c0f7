use shared_data::{ContactField, ContactForm, FormField, Notice, SubmitReport};
use yew::prelude::*;

use crate::fields::use_intake_form;

const CONTACT_INFO: [(&str, &[&str]); 4] = [
	("Location", &["123 Wellness Boulevard", "Serenity Hills, CA 90210"]),
	("Phone", &["(555) 123-SERENITY", "(555) 123-7373"]),
	("Email", &["hello@serenityspa.com"]),
	("Hours", &["Monday - Friday: 9:00 AM - 8:00 PM", "Saturday - Sunday: 8:00 AM - 9:00 PM"]),
];

#[derive(Properties, PartialEq)]
pub struct ContactProps {
	pub on_notice: Callback<Notice>
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactProps) -> Html {
	let form = use_intake_form::<ContactForm>();
	let values = form.values();
	let pending = form.is_pending();

	let on_notice = props.on_notice.clone();
	let on_submit = form.on_submit(Callback::from(move |report: SubmitReport<ContactField>|
		if let Some(notice) = report.notice::<ContactForm>() {
			on_notice.emit(notice);
		}
	));

	html! {
		<>
			<style>
			{
				"
				#contact {
					background-color: white;
				}
				#contact-content {
					display: grid;
					grid-template-columns: repeat(auto-fit, minmax(340px, 1fr));
					gap: 48px;
				}
				.contact-info h3 {
					margin: 0 0 8px 0;
					font-family: Inter, Arial, sans-serif;
				}
				.contact-info p {
					margin: 0;
					color: var(--secondary-text);
				}
				.contact-info {
					margin-bottom: 32px;
				}
				#contact-form {
					background-color: var(--spa-cream);
					padding: 32px;
				}
				#contact-form h3 {
					margin-top: 0;
				}
				#contact-form textarea {
					resize: none;
				}
				#contact-form button[type=submit] {
					width: 100%;
					border-radius: 8px;
				}
				"
			}
			</style>
			<section id="contact">
				<div class="container">
					<div class="section-title">
						<h2>{ "Visit Our Sanctuary" }</h2>
						<p>{ "Ready to begin your wellness journey? Contact us to schedule your appointment or learn more about our services." }</p>
					</div>
					<div id="contact-content">
						<div>
						{
							CONTACT_INFO.iter().map(|&(title, lines)| html! {
								<div class="contact-info">
									<h3>{ title }</h3>
									{ lines.iter().map(|&line| html! { <p>{ line }</p> }).collect::<Html>() }
								</div>
							}).collect::<Html>()
						}
						</div>
						<form id="contact-form" class="card" onsubmit={ on_submit } novalidate={ true }>
							<h3>{ "Send us a Message" }</h3>
							<div class="field-row">
								<div class="field">
									<label for={ ContactField::FirstName.name() }>{ "First Name" }</label>
									<input
										id={ ContactField::FirstName.name() }
										value={ values.first_name }
										oninput={ form.on_input(ContactField::FirstName) }
									/>
									{ form.error(ContactField::FirstName) }
								</div>
								<div class="field">
									<label for={ ContactField::LastName.name() }>{ "Last Name" }</label>
									<input
										id={ ContactField::LastName.name() }
										value={ values.last_name }
										oninput={ form.on_input(ContactField::LastName) }
									/>
									{ form.error(ContactField::LastName) }
								</div>
							</div>
							<div class="field">
								<label for={ ContactField::Email.name() }>{ "Email" }</label>
								<input
									id={ ContactField::Email.name() }
									type="email"
									value={ values.email }
									oninput={ form.on_input(ContactField::Email) }
								/>
								{ form.error(ContactField::Email) }
							</div>
							<div class="field">
								<label for={ ContactField::Phone.name() }>{ "Phone" }</label>
								<input
									id={ ContactField::Phone.name() }
									type="tel"
									value={ values.phone }
									oninput={ form.on_input(ContactField::Phone) }
								/>
								{ form.error(ContactField::Phone) }
							</div>
							<div class="field">
								<label for={ ContactField::Message.name() }>{ "Message" }</label>
								<textarea
									id={ ContactField::Message.name() }
									rows="4"
									placeholder="Tell us about your wellness goals..."
									value={ values.message }
									oninput={ form.on_input(ContactField::Message) }
								/>
								{ form.error(ContactField::Message) }
							</div>
							<button type="submit" disabled={ pending }>
								{ if pending { "Sending..." } else { "Send Message" } }
							</button>
						</form>
					</div>
				</div>
			</section>
		</>
	}
}
