//! Page-level operations: init scripts and reload.

use std::time::{Duration, Instant};

use serde_json::json;
use tracing::debug;

use crate::cdp::error::CdpError;

use super::core::PageSession;

const LOAD_TIMEOUT: Duration = Duration::from_secs(30);
const LOAD_POLL_INTERVAL: Duration = Duration::from_millis(100);

impl PageSession {
    /// Register a script that runs in every new document before page scripts.
    pub async fn add_script_on_new_document(&self, source: &str) -> Result<String, CdpError> {
        let result = self
            .call(
                "Page.addScriptToEvaluateOnNewDocument",
                Some(json!({"source": source})),
            )
            .await?;

        let identifier = result["identifier"].as_str().unwrap_or_default().to_string();
        debug!("Registered init script {}", identifier);
        Ok(identifier)
    }

    /// Wait for the document to finish loading.
    pub async fn wait_for_load(&self) -> Result<(), CdpError> {
        let start = Instant::now();

        loop {
            let result = self.evaluate("document.readyState").await?;

            if result.as_str() == Some("complete") {
                return Ok(());
            }

            if start.elapsed() > LOAD_TIMEOUT {
                return Err(CdpError::Timeout("Page load timeout".to_string()));
            }

            tokio::time::sleep(LOAD_POLL_INTERVAL).await;
        }
    }

    /// Reload the page and wait for the new document.
    pub async fn reload(&self) -> Result<(), CdpError> {
        self.call("Page.reload", None).await?;
        // Give the old document time to unload before polling readyState.
        tokio::time::sleep(LOAD_POLL_INTERVAL).await;
        self.wait_for_load().await?;
        debug!("Reloaded page {}", self.target_id);
        Ok(())
    }
}
