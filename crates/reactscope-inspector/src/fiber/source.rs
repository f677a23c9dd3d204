//! Source locations carried on props by the build-time inspector plugin.

use std::fmt;

use serde::Serialize;

use crate::value::{HeapValue, ValueHeap};

pub const SOURCE_PATH_PROP: &str = "data-inspector-relative-path";
pub const SOURCE_LINE_PROP: &str = "data-inspector-line";
pub const SOURCE_COLUMN_PROP: &str = "data-inspector-column";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<i64>,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file.as_deref().unwrap_or("<unknown>"))?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
            if let Some(column) = self.column {
                write!(f, ":{}", column)?;
            }
        }
        Ok(())
    }
}

/// Whether `key` is one of the source annotation props.
pub fn is_source_prop(key: &str) -> bool {
    matches!(key, SOURCE_PATH_PROP | SOURCE_LINE_PROP | SOURCE_COLUMN_PROP)
}

/// Source location from a props object. `None` unless a path or line is present.
pub fn source_location(heap: &ValueHeap, props: &HeapValue) -> Option<SourceLocation> {
    let props = heap.deref(props)?;

    let file = props
        .entry(SOURCE_PATH_PROP)
        .and_then(HeapValue::as_str)
        .filter(|p| !p.is_empty())
        .map(str::to_string);
    let line = props.entry(SOURCE_LINE_PROP).and_then(HeapValue::as_int);
    let column = props.entry(SOURCE_COLUMN_PROP).and_then(HeapValue::as_int);

    if file.is_none() && line.is_none() {
        return None;
    }
    Some(SourceLocation { file, line, column })
}
