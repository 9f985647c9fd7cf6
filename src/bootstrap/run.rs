use std::sync::Arc;

use ck_app::usecases::GeneratePassword;
use ck_app::{HistoryEvent, HistoryStore};
use ck_core::config::AppConfig;
use ck_core::PasswordOptions;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::info;

use super::wiring;

const SUMMARY_CHARS: usize = 60;

/// Run the watcher headless until Ctrl-C, logging every history insert.
pub async fn run_watch(config: &AppConfig) -> anyhow::Result<()> {
    let wired = wiring::build(config, None)?;
    let app = wired.app;

    let listener = tokio::spawn(log_history(
        app.history().clone(),
        app.history().subscribe(),
    ));

    app.start_watcher(wired.watcher.clone()).execute().await?;
    info!(
        interval_ms = wired.watcher.period().as_millis() as u64,
        "Watching clipboard, press Ctrl-C to stop"
    );

    tokio::signal::ctrl_c().await?;

    app.stop_watcher(wired.watcher.clone()).execute().await?;
    listener.abort();
    info!(entries = app.history().len(), "Clipboard history session ended");
    Ok(())
}

/// Generate one password with the given options.
pub fn run_password(options: &PasswordOptions) -> anyhow::Result<String> {
    let password = GeneratePassword::new().execute(options)?;
    Ok(password)
}

async fn log_history(
    history: Arc<HistoryStore>,
    mut events: UnboundedReceiver<HistoryEvent>,
) {
    while let Some(HistoryEvent::Prepended(entry)) = events.recv().await {
        info!(
            at = %entry.display_timestamp(),
            kind = %entry.kind(),
            total = history.len(),
            "{}",
            entry.summary(SUMMARY_CHARS)
        );
    }
}
