use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use weather_checker::lookup::{LookupState, WeatherLookup};
use weather_checker::render::render_forecast;
use weather_checker::WeatherCheckerConfig;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let query = env::args().skip(1).collect::<Vec<_>>().join(" ");

    let mut lookup = match WeatherLookup::new(WeatherCheckerConfig::default()) {
        Ok(lookup) => lookup,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return ExitCode::FAILURE;
        }
    };

    match lookup.submit(&query).await {
        LookupState::Success {
            location_name,
            days,
        } => {
            print!("{}", render_forecast(location_name, days));
            ExitCode::SUCCESS
        }
        LookupState::Error { message } => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
        // submit always transitions out of Pending
        LookupState::Pending => ExitCode::FAILURE,
    }
}
