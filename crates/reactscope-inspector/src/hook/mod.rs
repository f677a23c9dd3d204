//! The in-page hook: installation and the registration table.

mod installer;
mod script;
mod table;

pub use installer::{HookInstaller, InstallOutcome};
pub use script::{
    export_expression, host_nodes_expression, install_expression, ExportOptions, HOOK_SCRIPT,
    TABLE_GLOBAL,
};
pub use table::{
    HookRegistration, HookReport, HookTable, RootSummary, DISCOVERED_REGISTRATION_ID,
    HOOK_TABLE_VERSION,
};
