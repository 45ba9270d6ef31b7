//! `folio-admin-cli` -- headless driver for the portfolio admin API.
//!
//! Pushes a skills or settings document from a JSON file through the same
//! form sessions the console uses, or ends the current admin session.
//!
//! # Usage
//!
//! ```text
//! folio-admin-cli skills <file.json>      # file: JSON array of skills
//! folio-admin-cli settings <file.json>    # file: JSON settings object
//! folio-admin-cli logout
//! ```
//!
//! # Environment variables
//!
//! | Variable               | Required | Default                 | Description            |
//! |------------------------|----------|-------------------------|------------------------|
//! | `ADMIN_BASE_URL`       | no       | `http://localhost:3000` | Portfolio API base URL |
//! | `REQUEST_TIMEOUT_SECS` | no       | `30`                    | HTTP request timeout   |

use anyhow::{bail, Context};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_admin::forms::{SettingsForm, SkillsForm};
use folio_admin::navigation::Navigator;
use folio_admin::session;
use folio_client::config::ClientConfig;
use folio_client::http::HttpGateway;
use folio_core::content::{SiteSettings, SkillItem};
use folio_core::status::{Severity, StatusReporter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_admin_cli=info,folio_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Loaded client configuration");

    let gateway = HttpGateway::new(&config);

    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_default();

    match command.as_str() {
        "skills" => {
            let path = args
                .next()
                .context("usage: folio-admin-cli skills <file.json>")?;
            push_skills(&gateway, &path).await
        }
        "settings" => {
            let path = args
                .next()
                .context("usage: folio-admin-cli settings <file.json>")?;
            push_settings(&gateway, &path).await
        }
        "logout" => run_logout(&gateway).await,
        _ => bail!("usage: folio-admin-cli <skills|settings|logout> [file.json]"),
    }
}

/// Push a full skill collection read from a JSON file.
async fn push_skills(gateway: &HttpGateway, path: &str) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    let values: Vec<SkillItem> =
        serde_json::from_str(&raw).context("Skills file must be a JSON array of skills")?;

    tracing::info!(count = values.len(), "Pushing skills");

    let mut form = SkillsForm::new(values);
    form.submit(gateway).await;
    report(form.status())
}

/// Push the settings singleton read from a JSON file.
async fn push_settings(gateway: &HttpGateway, path: &str) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    let settings: SiteSettings =
        serde_json::from_str(&raw).context("Settings file must be a JSON object")?;

    let mut form = SettingsForm::new(settings);
    form.submit(gateway).await;
    report(form.status())
}

/// End the admin session.
async fn run_logout(gateway: &HttpGateway) -> anyhow::Result<()> {
    let mut navigator = Navigator::default();
    session::logout(gateway, &mut navigator).await;

    if navigator.target().is_some() {
        tracing::info!("Logged out");
        Ok(())
    } else {
        bail!("Logout failed");
    }
}

/// Exit with the session's own status copy.
fn report(status: &StatusReporter) -> anyhow::Result<()> {
    if status.is_visible() && status.severity() == Severity::Success {
        tracing::info!("{}", status.message());
        Ok(())
    } else {
        bail!("{}", status.message());
    }
}
