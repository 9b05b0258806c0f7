pub mod booking;
pub mod contact;
pub mod form;
pub mod nav;
pub mod schema;
pub mod submission;

pub use booking::{AppointmentRequest, BookingField, BookingForm, Service, TimeSlot};
pub use contact::{ContactField, ContactForm, ContactRequest};
pub use form::{FormController, SubmitAttempt};
pub use schema::{FieldErrors, FieldValue, FormField, IntakeForm};
pub use submission::{
	Coordinator,
	Notice,
	SubmissionState,
	SubmitError,
	SubmitReport,
	Transport,
	TransportResponse,
};

/// What the server sends back from either intake endpoint
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct IntakeReply {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	pub message: String
}

pub static BASE_STYLE: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Playfair+Display:wght@400;600;700&family=Inter:wght@400;500;600&display=swap');
* {
	--spa-primary: #5b7065;
	--spa-sage: #8fa998;
	--spa-gold: #c9a36b;
	--spa-beige: #e8dcc8;
	--spa-cream: #faf6ef;
	--main-text: #374151;
	--secondary-text: #6b7280;
	--error: #b42318;
	box-sizing: border-box;
	font-family: Inter, Arial, sans-serif;
	color: var(--main-text);
}
html {
	scroll-behavior: smooth;
}
body {
	margin: 0;
	background-color: var(--spa-cream);
}
h1, h2, h3, .serif {
	font-family: "Playfair Display", Georgia, serif;
	color: var(--spa-primary);
}
.container {
	max-width: 1200px;
	margin: 0 auto;
	padding: 0 16px;
}
section {
	padding: 80px 0;
	scroll-margin-top: 80px;
}
.section-title {
	text-align: center;
	margin-bottom: 64px;
}
.section-title h2 {
	font-size: 2.8rem;
	margin: 0 0 16px 0;
}
.section-title p {
	font-size: 1.25rem;
	color: var(--secondary-text);
	max-width: 760px;
	margin: 0 auto;
}
.grid {
	display: grid;
	grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
	gap: 32px;
}
.card {
	background-color: white;
	border-radius: 16px;
	overflow: hidden;
	box-shadow: 0 10px 20px rgba(0, 0, 0, 0.08);
}
button, .button {
	background-color: var(--spa-primary);
	color: white;
	border: 1px solid var(--spa-primary);
	border-radius: 999px;
	padding: 10px 24px;
	font-size: 1rem;
	cursor: pointer;
	transition: background-color 0.3s;
}
button:hover:not(:disabled) {
	background-color: var(--spa-gold);
	border-color: var(--spa-gold);
}
button:disabled {
	opacity: 0.6;
	cursor: not-allowed;
}
button.outline {
	background: none;
	color: var(--spa-primary);
}
input, textarea, select {
	width: 100%;
	padding: 10px 12px;
	border: 1px solid var(--spa-beige);
	border-radius: 8px;
	background-color: white;
	font-size: 1rem;
}
label {
	display: block;
	font-weight: 500;
	margin-bottom: 6px;
}
.field {
	margin-bottom: 20px;
}
.field-error {
	color: var(--error);
	font-size: 0.875rem;
	margin-top: 4px;
}
.field-row {
	display: grid;
	grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
	gap: 24px;
}
"#;
