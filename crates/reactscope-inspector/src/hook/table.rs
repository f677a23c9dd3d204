//! The core-owned registration table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Layout version of `window.__REACTSCOPE__`.
pub const HOOK_TABLE_VERSION: u32 = 1;

/// Registration id reserved for roots found by scanning containers.
pub const DISCOVERED_REGISTRATION_ID: u32 = 0;

/// One framework instance attached to the hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookRegistration {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    /// `development` or `production`.
    #[serde(default)]
    pub bundle_type: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootSummary {
    pub registration_id: u32,
    pub count: usize,
}

/// What the page reports after an install.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookReport {
    pub version: u32,
    #[serde(default)]
    pub registrations: Vec<HookRegistration>,
    #[serde(default)]
    pub roots: Vec<RootSummary>,
}

/// Registrations and root counts seen across installs.
///
/// Registrations are only ever added: a report that no longer lists one (the
/// page navigated) keeps it. Root counts are replaced by each report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HookTable {
    pub registrations: BTreeMap<u32, HookRegistration>,
    pub roots: BTreeMap<u32, usize>,
    pub installs: usize,
}

impl HookTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a report. Returns the number of registrations not seen before.
    pub fn merge(&mut self, report: &HookReport) -> usize {
        let mut added = 0;
        for registration in &report.registrations {
            self.registrations
                .entry(registration.id)
                .or_insert_with(|| {
                    added += 1;
                    registration.clone()
                });
        }

        self.roots = report
            .roots
            .iter()
            .map(|r| (r.registration_id, r.count))
            .collect();
        self.installs += 1;
        added
    }

    pub fn root_count(&self) -> usize {
        self.roots.values().sum()
    }

    pub fn is_installed(&self) -> bool {
        self.installs > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(id: u32, name: &str) -> HookRegistration {
        HookRegistration {
            id,
            name: name.to_string(),
            version: Some("18.3.1".to_string()),
            bundle_type: Some("development".to_string()),
        }
    }

    fn report(registrations: Vec<HookRegistration>, roots: Vec<(u32, usize)>) -> HookReport {
        HookReport {
            version: HOOK_TABLE_VERSION,
            registrations,
            roots: roots
                .into_iter()
                .map(|(registration_id, count)| RootSummary {
                    registration_id,
                    count,
                })
                .collect(),
        }
    }

    #[test]
    fn test_merge_adds_registrations() {
        let mut table = HookTable::new();
        let added = table.merge(&report(vec![registration(1, "react-dom")], vec![(1, 1)]));
        assert_eq!(added, 1);
        assert_eq!(table.registrations.len(), 1);
        assert_eq!(table.root_count(), 1);
        assert!(table.is_installed());
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut table = HookTable::new();
        let r = report(vec![registration(1, "react-dom")], vec![(1, 2)]);
        table.merge(&r);
        let before = table.registrations.clone();
        assert_eq!(table.merge(&r), 0);
        assert_eq!(table.registrations, before);
        assert_eq!(table.installs, 2);
    }

    #[test]
    fn test_registrations_survive_later_reports() {
        let mut table = HookTable::new();
        table.merge(&report(vec![registration(1, "react-dom")], vec![(1, 1)]));
        // Registered between the two installs.
        table.merge(&report(
            vec![registration(1, "react-dom"), registration(2, "react-art")],
            vec![(1, 1), (2, 1)],
        ));
        // After navigation the page forgot everything.
        table.merge(&report(vec![], vec![]));

        assert_eq!(table.registrations.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(table.root_count(), 0);
    }

    #[test]
    fn test_known_registration_unchanged() {
        let mut table = HookTable::new();
        table.merge(&report(vec![registration(1, "react-dom")], vec![]));
        let mut renamed = registration(1, "something-else");
        renamed.version = None;
        table.merge(&report(vec![renamed], vec![]));
        assert_eq!(table.registrations[&1].name, "react-dom");
    }

    #[test]
    fn test_roots_are_superseded() {
        let mut table = HookTable::new();
        table.merge(&report(vec![registration(1, "react-dom")], vec![(1, 3)]));
        table.merge(&report(vec![registration(1, "react-dom")], vec![(1, 1)]));
        assert_eq!(table.roots.get(&1), Some(&1));
    }

    #[test]
    fn test_report_wire_format() {
        let report: HookReport = serde_json::from_value(serde_json::json!({
            "version": 1,
            "registrations": [
                {"id": 0, "name": "react-dom (discovered)", "version": null, "bundleType": null}
            ],
            "roots": [{"registrationId": 0, "count": 1}]
        }))
        .unwrap();
        assert_eq!(report.registrations[0].id, DISCOVERED_REGISTRATION_ID);
        assert_eq!(report.roots[0].count, 1);
    }
}
