use chrono::NaiveDate;
use gloo_net::http::Request;
use shared_data::{Transport, TransportResponse};
use yew::Callback;

/// Sends the forms to the backend we were served from
#[derive(Clone, PartialEq)]
pub struct GlooTransport {
	// lets whoever's showing the form know the request is out, so that it can re-render as pending
	on_send: Callback<()>
}

impl GlooTransport {
	pub fn new(on_send: Callback<()>) -> Self {
		Self { on_send }
	}
}

impl Transport for GlooTransport {
	async fn post_json(&self, endpoint: &str, body: String) -> Result<TransportResponse, String> {
		let req = Request::post(endpoint)
			.header("Content-Type", "application/json")
			.body(body)
			.map_err(|e| format!("couldn't build request: {e:?}"))?;

		self.on_send.emit(());

		let res = req.send().await
			.map_err(|e| format!("gloo_net error: {e:?}"))?;

		let status = res.status();
		// a body we can't read just means there's no message to show, the status still counts
		let body = res.text().await.unwrap_or_default();

		Ok(TransportResponse { status, body })
	}
}

/// Today, according to the browser's clock and timezone
pub fn today() -> NaiveDate {
	let now = js_sys::Date::new_0();
	NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
		.unwrap_or_default()
}

pub fn current_year() -> u32 {
	js_sys::Date::new_0().get_full_year()
}
