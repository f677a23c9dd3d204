//! Chrome DevTools Protocol (CDP) client.
//!
//! Connects to an already-running Chrome/Chromium over WebSocket and speaks the
//! CDP JSON-RPC protocol. Only the domains the inspector needs are wrapped:
//! `Runtime`, `Page`, `DOM` and `Accessibility`.
//!
//! ```rust,ignore
//! let client = CdpClient::connect("http://localhost:9222").await?;
//! let page = client.attach_page(&target_id).await?;
//! let title = page.evaluate("document.title").await?;
//! ```

mod client;
mod error;
mod protocol;
mod session;

pub use client::CdpClient;
pub use error::CdpError;
pub use protocol::*;
pub use session::PageSession;
