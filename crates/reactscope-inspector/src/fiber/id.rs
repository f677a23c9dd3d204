//! Path-based component identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::InspectError;

/// `{registration}:{root}:{path}` where `path` is the dot-separated child
/// index path from the root. The root itself has an empty path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentId {
    pub registration_id: u32,
    pub root_index: usize,
    pub path: Vec<usize>,
}

impl ComponentId {
    pub fn root(registration_id: u32, root_index: usize) -> Self {
        Self {
            registration_id,
            root_index,
            path: Vec::new(),
        }
    }

    /// Id of the `index`-th child of this node.
    pub fn child(&self, index: usize) -> Self {
        let mut path = self.path.clone();
        path.push(index);
        Self {
            registration_id: self.registration_id,
            root_index: self.root_index,
            path,
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:", self.registration_id, self.root_index)?;
        for (i, segment) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for ComponentId {
    type Err = InspectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InspectError::InvalidId(s.to_string());

        let mut parts = s.trim().splitn(3, ':');
        let registration_id = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let root_index = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let path_part = parts.next().ok_or_else(invalid)?;

        let path = if path_part.is_empty() {
            Vec::new()
        } else {
            path_part
                .split('.')
                .map(|seg| seg.parse::<usize>().map_err(|_| invalid()))
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Self {
            registration_id,
            root_index,
            path,
        })
    }
}

impl Serialize for ComponentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
