//! The inspector facade: one page, every public operation.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use reactscope_config::LimitsConfig;

use crate::a11y::{build_snapshot, next_snapshot_token, AccessibilitySnapshot};
use crate::correlate::{build_map, AccessibilityRef, ComponentMap, MapOptions};
use crate::error::{InspectError, Result};
use crate::fiber::{
    describe, id_of, list_components, nearest_authored_ancestor, resolve, ComponentDescriptor,
    ComponentId, DescribeOptions, FiberSnapshot, Listing, WalkOptions,
};
use crate::hook::{
    export_expression, host_nodes_expression, ExportOptions, HookInstaller, HookTable,
    InstallOutcome,
};
use crate::page::InspectedPage;
use crate::value::SerializeLimits;

/// The component behind a rendered element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementMatch {
    pub backend_node_id: i64,
    /// Tag of the rendered element.
    pub host_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<AccessibilityRef>,
    pub component: ComponentDescriptor,
}

/// Inspects one page. Every call re-reads the page; nothing is cached across
/// calls except the hook registration table.
pub struct Inspector {
    page: Arc<dyn InspectedPage>,
    limits: LimitsConfig,
    installer: HookInstaller,
}

impl Inspector {
    pub fn new(page: Arc<dyn InspectedPage>, limits: LimitsConfig) -> Self {
        Self {
            page,
            limits,
            installer: HookInstaller::new(),
        }
    }

    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }

    pub async fn ensure_installed(&self) -> Result<InstallOutcome> {
        self.installer.ensure_installed(self.page.as_ref()).await
    }

    /// Registrations and roots merged across installs.
    pub fn hook_table(&self) -> HookTable {
        self.installer.table()
    }

    /// The accessibility tree, or `None` for an empty page.
    pub async fn snapshot(&self, verbose: bool) -> Result<Option<AccessibilitySnapshot>> {
        let nodes = self.page.full_ax_tree().await?;
        Ok(build_snapshot(&nodes, verbose, next_snapshot_token()))
    }

    pub async fn list_components(&self, options: &WalkOptions) -> Result<Listing> {
        let fibers = self.export(&self.default_value_limits(), false).await?;
        Ok(list_components(&fibers, options))
    }

    pub async fn get_component(
        &self,
        id: &str,
        options: &DescribeOptions,
    ) -> Result<ComponentDescriptor> {
        let id: ComponentId = id.parse()?;
        let fibers = self.export(&options.limits, false).await?;
        let node = resolve(&fibers, &id)
            .ok_or_else(|| InspectError::NotFound(format!("component {}", id)))?;
        Ok(describe(&fibers, node, id, options))
    }

    /// The nearest component rendering the element with `backend_node_id`.
    pub async fn inspect_element(
        &self,
        backend_node_id: i64,
        options: &DescribeOptions,
    ) -> Result<ElementMatch> {
        let fibers = self.export(&options.limits, true).await?;
        self.match_element(&fibers, backend_node_id, None, options)
    }

    /// Components rendering the accessible elements matching `role` and
    /// `name`, in tree order.
    pub async fn find_by_accessibility(
        &self,
        role: Option<&str>,
        name: &str,
        options: &DescribeOptions,
    ) -> Result<Vec<ElementMatch>> {
        let searched = || match role {
            Some(role) => format!("accessible {} named \"{}\"", role, name),
            None => format!("accessible element named \"{}\"", name),
        };

        let snapshot = self
            .snapshot(false)
            .await?
            .ok_or_else(|| InspectError::NotFound(searched()))?;
        let candidates: Vec<_> = snapshot
            .find(role, name)
            .into_iter()
            .filter_map(|n| n.backend_node_id.map(|b| (b, AccessibilityRef::new(n, b))))
            .collect();
        if candidates.is_empty() {
            return Err(InspectError::NotFound(searched()));
        }

        let fibers = self.export(&options.limits, true).await?;
        let matches: Vec<ElementMatch> = candidates
            .into_iter()
            .filter_map(|(backend, a11y)| {
                self.match_element(&fibers, backend, Some(a11y), options).ok()
            })
            .collect();

        debug!("{} of the matching elements resolved to components", matches.len());
        if matches.is_empty() {
            return Err(InspectError::NotFound(format!("component rendering {}", searched())));
        }
        Ok(matches)
    }

    /// A verbose map also matches hosts whose accessibility node is ignored.
    pub async fn build_map(&self, options: &MapOptions) -> Result<ComponentMap> {
        let snapshot = self.snapshot(options.verbose).await?;
        let fibers = self.export(&self.default_value_limits(), true).await?;
        Ok(build_map(&fibers, snapshot.as_ref(), options))
    }

    fn match_element(
        &self,
        fibers: &FiberSnapshot,
        backend_node_id: i64,
        accessibility: Option<AccessibilityRef>,
        options: &DescribeOptions,
    ) -> Result<ElementMatch> {
        let host = *fibers
            .host_index()
            .get(&backend_node_id)
            .ok_or_else(|| InspectError::NotFound(format!("backend node {}", backend_node_id)))?;

        let component = nearest_authored_ancestor(fibers, host, self.limits.ancestor_max_steps)
            .ok_or_else(|| {
                InspectError::NotFound(format!(
                    "component within {} levels of backend node {}",
                    self.limits.ancestor_max_steps, backend_node_id
                ))
            })?;
        let id = id_of(fibers, component).ok_or_else(|| {
            InspectError::NotFound(format!("path to component of backend node {}", backend_node_id))
        })?;

        Ok(ElementMatch {
            backend_node_id,
            host_type: fibers.name(host),
            accessibility,
            component: describe(fibers, component, id, options),
        })
    }

    fn default_value_limits(&self) -> SerializeLimits {
        DescribeOptions::from_limits(&self.limits).limits
    }

    /// Export every committed root. Fails fast when the hook is absent.
    async fn export(&self, value_limits: &SerializeLimits, resolve_hosts: bool) -> Result<FiberSnapshot> {
        let options = ExportOptions::for_limits(self.limits.export_max_nodes, value_limits);
        let payload = self.page.evaluate(&export_expression(&options)).await?;
        if payload.is_null() {
            return Err(InspectError::InstallationFailure(
                "hook is not installed in this page; install it first".to_string(),
            ));
        }

        let mut fibers = FiberSnapshot::from_export(payload)?;
        debug!(
            "Exported {} fiber(s) across {} root(s)",
            fibers.nodes.len(),
            fibers.roots.len()
        );

        if resolve_hosts && fibers.host_slot_count() > 0 {
            let ids = self.page.backend_node_ids(&host_nodes_expression()).await?;
            fibers.attach_backend_ids(&ids);
        }
        Ok(fibers)
    }
}

#[cfg(test)]
#[path = "inspector_tests.rs"]
mod tests;
