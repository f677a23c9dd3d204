//! Fiber kinds and the tag table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of one fiber.
///
/// Authored kinds are the constructs users write; `Host` renders a platform
/// primitive; `Other` (fragments, providers, suspense, ...) is transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FiberKind {
    #[serde(rename = "function")]
    FunctionComponent,
    #[serde(rename = "class")]
    ClassComponent,
    ForwardRef,
    #[serde(rename = "memo")]
    MemoComponent,
    Host,
    Other,
}

/// Fiber work tags and their kinds. Tags not listed are `Other`.
const TAG_TABLE: &[(u32, FiberKind)] = &[
    (0, FiberKind::FunctionComponent),
    (1, FiberKind::ClassComponent),
    // IndeterminateComponent: a function component before its first render.
    (2, FiberKind::FunctionComponent),
    (5, FiberKind::Host),  // HostComponent
    (6, FiberKind::Host),  // HostText
    (11, FiberKind::ForwardRef),
    (14, FiberKind::MemoComponent),
    (15, FiberKind::MemoComponent), // SimpleMemoComponent
    (26, FiberKind::Host), // HostHoistable
    (27, FiberKind::Host), // HostSingleton
];

impl FiberKind {
    pub fn from_tag(tag: u32) -> Self {
        TAG_TABLE
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, kind)| *kind)
            .unwrap_or(FiberKind::Other)
    }

    /// Whether the kind is a user-authored construct.
    pub fn is_authored(self) -> bool {
        matches!(
            self,
            FiberKind::FunctionComponent
                | FiberKind::ClassComponent
                | FiberKind::ForwardRef
                | FiberKind::MemoComponent
        )
    }

    pub fn is_host(self) -> bool {
        self == FiberKind::Host
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FiberKind::FunctionComponent => "function",
            FiberKind::ClassComponent => "class",
            FiberKind::ForwardRef => "forward_ref",
            FiberKind::MemoComponent => "memo",
            FiberKind::Host => "host",
            FiberKind::Other => "other",
        }
    }
}

impl fmt::Display for FiberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
