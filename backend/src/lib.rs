use axum::{routing::post, Router};
use tower_http::services::{ServeDir, ServeFile};

pub mod config;
pub mod intake;

use config::Config;
use intake::{book_appointment, send_contact, IntakeState};

/// Just the two intake endpoints
pub fn api_router(state: IntakeState) -> Router {
	Router::new()
		.route("/api/appointments", post(book_appointment))
		.route("/api/contact", post(send_contact))
		.with_state(state)
}

/// The intake endpoints, plus the built site for everything else. Paths that aren't files get
/// `index.html` so the frontend's router can deal with them.
pub fn router(config: &Config) -> Router {
	let site = ServeDir::new(&config.dist_dir)
		.not_found_service(ServeFile::new(config.dist_dir.join("index.html")));

	api_router(IntakeState::default())
		.fallback_service(site)
}
