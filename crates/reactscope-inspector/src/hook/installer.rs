//! Idempotent hook installation.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::error::{InspectError, Result};
use crate::page::InspectedPage;

use super::script::{install_expression, HOOK_SCRIPT};
use super::table::{HookReport, HookTable, HOOK_TABLE_VERSION};

/// Result of one `ensure_installed` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub report: HookReport,
    /// Registrations first seen by this install.
    pub added: usize,
    /// The page had to be reloaded before the install succeeded.
    pub reloaded: bool,
}

/// Installs the hook in a page and keeps the merged registration table.
///
/// Safe to call any number of times. The hook is registered as an init script
/// once, so later documents get it before their own scripts run, and is also
/// evaluated in the current document.
#[derive(Debug, Default)]
pub struct HookInstaller {
    init_script_added: AtomicBool,
    table: Mutex<HookTable>,
}

impl HookInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn ensure_installed(&self, page: &dyn InspectedPage) -> Result<InstallOutcome> {
        if !self.init_script_added.load(Ordering::Acquire) {
            page.add_init_script(HOOK_SCRIPT).await?;
            self.init_script_added.store(true, Ordering::Release);
            debug!("Hook registered for new documents");
        }

        let (report, reloaded) = match self.install_once(page).await {
            Ok(report) => (report, false),
            Err(first) => {
                warn!("Hook installation failed, reloading page once: {}", first);
                page.reload().await?;
                let report = self.install_once(page).await.map_err(|second| {
                    InspectError::InstallationFailure(format!(
                        "{}; after reload: {}",
                        first, second
                    ))
                })?;
                (report, true)
            }
        };

        let added = self.table.lock().merge(&report);
        info!(
            "Hook installed: {} registration(s), {} root(s)",
            report.registrations.len(),
            report.roots.iter().map(|r| r.count).sum::<usize>()
        );

        Ok(InstallOutcome {
            report,
            added,
            reloaded,
        })
    }

    /// Snapshot of the merged table.
    pub fn table(&self) -> HookTable {
        self.table.lock().clone()
    }

    async fn install_once(&self, page: &dyn InspectedPage) -> std::result::Result<HookReport, String> {
        let value = page
            .evaluate(&install_expression())
            .await
            .map_err(|e| e.to_string())?;

        if value.is_null() {
            return Err("hook table missing after install".to_string());
        }

        let report: HookReport =
            serde_json::from_value(value).map_err(|e| format!("malformed hook report: {}", e))?;
        if report.version != HOOK_TABLE_VERSION {
            return Err(format!(
                "hook table version {} is not supported (expected {})",
                report.version, HOOK_TABLE_VERSION
            ));
        }
        Ok(report)
    }
}

#[cfg(test)]
#[path = "installer_tests.rs"]
mod tests;
