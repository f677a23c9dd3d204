//! In-memory [`InspectedPage`] for unit tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};

use crate::cdp::{AXNode, CdpError};
use crate::page::InspectedPage;

/// Answers install, export and host-node requests from canned data.
#[derive(Default)]
pub struct FakePage {
    /// Queued replies to install evaluations; a default report once empty.
    pub install_replies: Mutex<VecDeque<Result<Value, CdpError>>>,
    /// Reply to export evaluations; `null` (no table) when unset.
    pub export: Mutex<Option<Value>>,
    pub host_ids: Mutex<Vec<Option<i64>>>,
    pub ax_nodes: Mutex<Vec<AXNode>>,
    pub init_scripts: AtomicUsize,
    pub reloads: AtomicUsize,
    pub evaluations: Mutex<Vec<String>>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_export(self, export: Value) -> Self {
        *self.export.lock() = Some(export);
        self
    }

    pub fn with_host_ids(self, ids: Vec<Option<i64>>) -> Self {
        *self.host_ids.lock() = ids;
        self
    }

    /// AX nodes in `Accessibility.getFullAXTree` wire form.
    pub fn with_ax_nodes(self, nodes: Value) -> Self {
        *self.ax_nodes.lock() = serde_json::from_value(nodes).unwrap();
        self
    }

    pub fn queue_install(&self, reply: Result<Value, CdpError>) {
        self.install_replies.lock().push_back(reply);
    }

    pub fn reload_count(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }

    pub fn init_script_count(&self) -> usize {
        self.init_scripts.load(Ordering::SeqCst)
    }
}

/// root -> App -> LoginForm -> form -> button -> "Log in"
pub fn login_export() -> Value {
    json!({
        "roots": [{"registrationId": 1, "rootIndex": 0, "node": 0}],
        "nodes": [
            {"tag": 3, "child": 1},
            {"tag": 1, "names": {"ownName": "App"}, "props": {"$ref": 0}, "state": {"$ref": 3}, "parent": 0, "child": 2},
            {"tag": 0, "names": {"ownName": "LoginForm"}, "props": {"$ref": 1}, "parent": 1, "child": 3},
            {"tag": 5, "hostType": "form", "host": 0, "parent": 2, "child": 4},
            {"tag": 5, "hostType": "button", "host": 1, "parent": 3, "child": 5},
            {"tag": 6, "hostType": "#text", "host": 2, "props": "Log in", "parent": 4}
        ],
        "values": [
            {"kind": "object", "entries": [["data-inspector-relative-path", "src/App.tsx"]]},
            {"kind": "object", "entries": [["title", "Sign in"], ["onSubmit", {"$ref": 2}]]},
            {"kind": "function", "name": "handleSubmit"},
            {"kind": "object", "entries": [["user", null]]}
        ],
        "truncated": false
    })
}

pub fn login_ax() -> Value {
    json!([
        {"nodeId": "1", "role": {"type": "role", "value": "RootWebArea"}, "childIds": ["2"], "backendDOMNodeId": 1},
        {"nodeId": "2", "role": {"type": "role", "value": "form"}, "childIds": ["3"], "backendDOMNodeId": 30},
        {"nodeId": "3", "role": {"type": "role", "value": "button"},
         "name": {"type": "computedString", "value": "Log in"}, "childIds": ["4"], "backendDOMNodeId": 31},
        {"nodeId": "4", "role": {"type": "role", "value": "StaticText"},
         "name": {"type": "computedString", "value": "Log in"}, "backendDOMNodeId": 32}
    ])
}

pub fn default_report() -> Value {
    json!({
        "version": 1,
        "registrations": [{"id": 1, "name": "react-dom", "version": "18.3.1", "bundleType": "development"}],
        "roots": [{"registrationId": 1, "count": 1}]
    })
}

#[async_trait]
impl InspectedPage for FakePage {
    async fn evaluate(&self, expression: &str) -> Result<Value, CdpError> {
        self.evaluations.lock().push(expression.to_string());
        if expression.contains(".report()") {
            return self
                .install_replies
                .lock()
                .pop_front()
                .unwrap_or_else(|| Ok(default_report()));
        }
        if expression.contains("exportTree(") {
            return Ok(self.export.lock().clone().unwrap_or(Value::Null));
        }
        Ok(Value::Null)
    }

    async fn add_init_script(&self, _source: &str) -> Result<(), CdpError> {
        self.init_scripts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn reload(&self) -> Result<(), CdpError> {
        self.reloads.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn full_ax_tree(&self) -> Result<Vec<AXNode>, CdpError> {
        Ok(self.ax_nodes.lock().clone())
    }

    async fn backend_node_ids(&self, _array_expression: &str) -> Result<Vec<Option<i64>>, CdpError> {
        Ok(self.host_ids.lock().clone())
    }
}

/// A page serving the login fixture with host ids 30..=32.
pub fn login_page() -> FakePage {
    FakePage::new()
        .with_export(login_export())
        .with_host_ids(vec![Some(30), Some(31), Some(32)])
        .with_ax_nodes(login_ax())
}
