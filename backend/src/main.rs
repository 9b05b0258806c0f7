use backend::config::Config;
use tokio::net::TcpListener;
use tracing::info;

fn init_tracing() {
	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

	// json is nicer for whatever's collecting logs, but awful to read in a terminal
	if matches!(dotenv::var("LOG_FORMAT").as_deref(), Ok("json")) {
		tracing_subscriber::fmt()
			.with_env_filter(filter)
			.json()
			.init();
	} else {
		tracing_subscriber::fmt()
			.with_env_filter(filter)
			.compact()
			.init();
	}
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	init_tracing();

	let config = Config::from_env();
	let app = backend::router(&config);

	let listener = TcpListener::bind(config.addr()).await?;
	info!(addr = %config.addr(), dist_dir = %config.dist_dir.display(), "Serving axum...");

	axum::serve(listener, app).await?;

	Ok(())
}
