//! # reactscope inspector
//!
//! Correlates a page's accessibility tree with its React component tree so an
//! agent reading the accessibility tree can find the component that rendered
//! each element, and read that component's props, state, source location and
//! owners.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   CDP (WebSocket)   ┌──────────────────────────────┐
//! │  Inspector   │ ◄─────────────────► │ page: hook.js                │
//! │  (this crate)│  export / AX tree   │ __REACT_DEVTOOLS_GLOBAL_HOOK__│
//! └──────────────┘                     └──────────────────────────────┘
//! ```
//!
//! The page-side script only records renderer registrations and committed
//! roots, and exports them as a flat, index-linked graph on request. Naming,
//! walks, ancestor resolution, serialization and correlation all run here on
//! the decoded export.
//!
//! ## Modules
//!
//! - [`hook`] - page script, install/reload protocol, registration table
//! - [`a11y`] - accessibility snapshot with per-snapshot uids
//! - [`fiber`] - component kinds, ids, walks, owners and descriptors
//! - [`value`] - bounded, cycle-safe serialization of props and state
//! - [`correlate`] - the merged component/accessibility map
//! - [`inspector`] - one facade per page for every public operation
//! - [`tools`] - the same operations as [`Tool`](reactscope_protocols::Tool)s
//!
//! ## Usage
//!
//! ```rust,ignore
//! let client = CdpClient::connect("http://127.0.0.1:9222").await?;
//! let page = client.find_page(Some("localhost:3000")).await?;
//! let session = client.attach_page(&page.id).await?;
//!
//! let inspector = Inspector::new(Arc::new(session), LimitsConfig::default());
//! inspector.ensure_installed().await?;
//! println!("{}", inspector.build_map(&MapOptions::default()).await?.render());
//! ```

pub mod a11y;
pub mod cdp;
pub mod correlate;
pub mod error;
pub mod fiber;
pub mod hook;
pub mod inspector;
pub mod page;
pub mod tools;
pub mod value;

mod text;

#[cfg(test)]
mod testing;

pub use a11y::{AccessibilityNode, AccessibilitySnapshot};
pub use cdp::{CdpClient, CdpError, PageInfo, PageSession};
pub use correlate::{ComponentMap, CorrelatedNode, MapOptions};
pub use error::{InspectError, Result};
pub use fiber::{ComponentDescriptor, ComponentId, DescribeOptions, FiberKind, Listing, WalkOptions};
pub use hook::{HookTable, InstallOutcome};
pub use inspector::{ElementMatch, Inspector};
pub use page::InspectedPage;
pub use tools::{inspector_tools, register_tools};
