//! Scheduled health-check job for the package-search API.
//!
//! Reads `API_KEY` from the process environment (a local `.env` file is
//! honored), pings the health endpoint once, and prints the response time
//! and body. A missing credential or a non-success outcome terminates the
//! process with a non-zero exit code; retrying is the scheduler's job.

use anyhow::{Context, Result, bail};

use pkgsearch_console::config::Config;
use pkgsearch_console::{logging, status};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init(None);

    let api_key = match std::env::var("API_KEY") {
        Ok(key) if !key.is_empty() => key,
        _ => bail!("API_KEY is not set in the environment or .env file"),
    };

    let config = Config::load().context("failed to load configuration")?;
    let report = status::check(&config.api, Some(&api_key));

    println!("Response time: {} ms", report.response_time_ms);
    if let Some(data) = &report.data {
        println!("Response data: {data}");
    }

    if !report.success() {
        let detail = report
            .error
            .as_deref()
            .unwrap_or("no further detail")
            .to_string();
        bail!("health check failed ({}): {detail}", report.outcome.as_str());
    }
    Ok(())
}
