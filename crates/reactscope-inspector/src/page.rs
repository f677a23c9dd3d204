//! The inspected-page seam.
//!
//! Everything the engine needs from the inspected runtime goes through
//! [`InspectedPage`]. [`PageSession`] implements it over CDP; tests implement it
//! in memory.

use async_trait::async_trait;
use serde_json::Value;

use crate::cdp::{AXNode, CdpError, PageSession};

/// Read access to one inspected page.
#[async_trait]
pub trait InspectedPage: Send + Sync {
    /// Run `expression` in the page and return its JSON value.
    async fn evaluate(&self, expression: &str) -> Result<Value, CdpError>;

    /// Run `source` in every future document before the page's own scripts.
    async fn add_init_script(&self, source: &str) -> Result<(), CdpError>;

    /// Reload the page and wait for it to load.
    async fn reload(&self) -> Result<(), CdpError>;

    /// The platform accessibility tree as a flat, id-linked list.
    async fn full_ax_tree(&self) -> Result<Vec<AXNode>, CdpError>;

    /// Backend node ids of the DOM nodes in the array `array_expression`
    /// evaluates to, index-aligned.
    async fn backend_node_ids(&self, array_expression: &str)
        -> Result<Vec<Option<i64>>, CdpError>;
}

#[async_trait]
impl InspectedPage for PageSession {
    async fn evaluate(&self, expression: &str) -> Result<Value, CdpError> {
        PageSession::evaluate(self, expression).await
    }

    async fn add_init_script(&self, source: &str) -> Result<(), CdpError> {
        self.add_script_on_new_document(source).await.map(|_| ())
    }

    async fn reload(&self) -> Result<(), CdpError> {
        PageSession::reload(self).await
    }

    async fn full_ax_tree(&self) -> Result<Vec<AXNode>, CdpError> {
        self.get_full_ax_tree().await
    }

    async fn backend_node_ids(
        &self,
        array_expression: &str,
    ) -> Result<Vec<Option<i64>>, CdpError> {
        self.resolve_backend_node_ids(array_expression).await
    }
}
