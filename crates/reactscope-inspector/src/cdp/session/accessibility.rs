//! Accessibility and DOM identity operations for CDP page session.

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::json;
use tracing::{debug, warn};

use crate::cdp::error::CdpError;
use crate::cdp::protocol::AXNode;

use super::core::PageSession;

static HANDLE_GROUP_SEQ: AtomicU64 = AtomicU64::new(1);

impl PageSession {
    /// Get the full accessibility tree as a flat node list.
    pub async fn get_full_ax_tree(&self) -> Result<Vec<AXNode>, CdpError> {
        let result = self.call("Accessibility.getFullAXTree", None).await?;
        let nodes: Vec<AXNode> = serde_json::from_value(result["nodes"].clone())?;
        debug!("Fetched {} AX nodes", nodes.len());
        Ok(nodes)
    }

    /// Backend node id of the DOM node behind a remote object.
    pub async fn describe_backend_node_id(&self, object_id: &str) -> Result<Option<i64>, CdpError> {
        let result = self
            .call("DOM.describeNode", Some(json!({"objectId": object_id})))
            .await;

        match result {
            Ok(r) => Ok(r["node"]["backendNodeId"].as_i64()),
            // Not a node (or detached since export).
            Err(CdpError::Protocol { code: -32000, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Backend node ids for every element of the array `expression` evaluates to.
    ///
    /// The result is index-aligned with the array; holes and non-nodes are `None`.
    /// Every handle created on the way is released, whether or not resolution
    /// succeeds.
    pub async fn resolve_backend_node_ids(
        &self,
        expression: &str,
    ) -> Result<Vec<Option<i64>>, CdpError> {
        let group = format!(
            "reactscope-hosts-{}",
            HANDLE_GROUP_SEQ.fetch_add(1, Ordering::Relaxed)
        );
        let resolved = self.resolve_in_group(expression, &group).await;

        let released = self.release_object_group(&group).await;
        if let Err(e) = &released {
            warn!("Failed to release object group {}: {}", group, e);
        }
        let ids = resolved?;
        released?;
        Ok(ids)
    }

    async fn resolve_in_group(
        &self,
        expression: &str,
        group: &str,
    ) -> Result<Vec<Option<i64>>, CdpError> {
        let handle = self.evaluate_handle(expression, group).await?;
        let Some(array_id) = handle.object_id else {
            return Ok(Vec::new());
        };

        let props = self.get_properties(&array_id).await?;
        let mut slots: Vec<(usize, String)> = props
            .into_iter()
            .filter_map(|p| {
                let index = p.name.parse::<usize>().ok()?;
                let object_id = p.value?.object_id?;
                Some((index, object_id))
            })
            .collect();
        slots.sort_by_key(|(index, _)| *index);

        let len = slots.last().map(|(i, _)| i + 1).unwrap_or(0);
        let mut ids = vec![None; len];
        for (index, object_id) in slots {
            ids[index] = self.describe_backend_node_id(&object_id).await?;
        }
        Ok(ids)
    }
}
