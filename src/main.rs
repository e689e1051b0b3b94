mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;

use cli::{Cli, Command};
use up42_qa::api::{JobState, Up42Client};
use up42_qa::config::Up42Config;
use up42_qa::smoke::SmokeRunner;
use up42_qa::ui::ScenarioProgress;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Up42Config::load().context("failed to load up42.toml")?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(timeout) = cli.timeout {
        config.job_timeout_secs = timeout;
    }

    let client = Up42Client::with_base_url(config.base_url.clone());

    match cli.command {
        Command::Smoke => {
            let progress = ScenarioProgress::start("Running workflow smoke scenario…");
            let runner = SmokeRunner::new(&client, &config);
            match runner.run().await {
                Ok(report) => {
                    progress.complete(
                        &format!("job {}: {}", report.job_id, report.job_outcome),
                        report.job_succeeded,
                    );
                    if cli.verbose {
                        progress.print_report(&report);
                    }
                    if !report.job_succeeded {
                        bail!("smoke scenario did not reach SUCCEEDED");
                    }
                }
                Err(e) => {
                    progress.fail(&e.to_string());
                    return Err(e.into());
                }
            }
        }
        Command::Status { job_id } => {
            config.require_credentials()?;
            let token = client
                .authenticate(&config.project_id, &config.project_api_key)
                .await?;
            let progress = ScenarioProgress::start(&format!("Checking job {job_id}…"));
            let response = client
                .check_job_status(&token, &config.project_id, &job_id)
                .await?;
            match response.data_str("status") {
                Some(raw) => progress.print_status(&job_id, &JobState::parse(&raw)),
                None => {
                    progress.fail(&format!(
                        "no job status in response (HTTP {})",
                        response.status
                    ));
                    if cli.verbose {
                        eprintln!("{}", response.body);
                    }
                    bail!("could not read status for job {job_id}");
                }
            }
        }
    }

    Ok(())
}
