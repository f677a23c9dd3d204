//! CLI definitions for reactscope.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

/// reactscope CLI.
#[derive(Parser)]
#[command(name = "reactscope")]
#[command(about = "Map a page's accessibility tree to the React components that render it")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: ~/.reactscope/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// CDP HTTP endpoint, overriding the configured one
    #[arg(short, long, global = true, env = "REACTSCOPE_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Target id or URL substring of the page to inspect (default: first page)
    #[arg(short, long, global = true)]
    pub page: Option<String>,

    /// Print the full tool result as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub(crate) enum Commands {
    /// List the debuggable pages of the browser
    Pages,

    /// Install the React hook (reloads the page once if needed)
    Hook,

    /// Print the accessibility tree
    Snapshot {
        /// Include nodes the browser marks as ignored
        #[arg(long)]
        verbose: bool,
    },

    /// List React components with their ids
    Components {
        #[arg(long)]
        max_depth: Option<usize>,

        #[arg(long)]
        max_nodes: Option<usize>,

        /// Also list host elements and internal nodes
        #[arg(long)]
        all: bool,

        /// Case-insensitive name substring
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Describe one component by id
    Component {
        /// Component id, e.g. 1:0:0.2
        id: String,

        #[arg(long)]
        no_state: bool,

        #[arg(long)]
        no_owners: bool,

        /// Serialization depth for props and state
        #[arg(long)]
        depth: Option<usize>,
    },

    /// Find the component rendering a DOM element
    Inspect {
        /// Backend DOM node id
        backend_node_id: i64,

        #[arg(long)]
        depth: Option<usize>,
    },

    /// Find components by the accessible name of what they render
    Find {
        /// Text contained in the accessible name
        text: String,

        /// Exact accessibility role
        #[arg(short, long)]
        role: Option<String>,

        /// Include component state
        #[arg(long)]
        state: bool,
    },

    /// Print the component tree merged with the accessibility tree
    Map {
        /// Keep elements without an accessibility node
        #[arg(long)]
        verbose: bool,

        /// Include component state
        #[arg(long)]
        state: bool,
    },
}

impl Commands {
    /// Tool id and parameters this command invokes. `None` for commands that
    /// only talk to the browser.
    pub fn tool_call(&self) -> Option<(&'static str, Value)> {
        let call = match self {
            Commands::Pages => return None,
            Commands::Hook => ("react_install_hook", json!({})),
            Commands::Snapshot { verbose } => ("a11y_snapshot", json!({"verbose": verbose})),
            Commands::Components {
                max_depth,
                max_nodes,
                all,
                filter,
            } => {
                let mut params = json!({"include_all_types": all});
                if let Some(depth) = max_depth {
                    params["max_depth"] = json!(depth);
                }
                if let Some(nodes) = max_nodes {
                    params["max_nodes"] = json!(nodes);
                }
                if let Some(filter) = filter {
                    params["name_filter"] = json!(filter);
                }
                ("react_list_components", params)
            }
            Commands::Component {
                id,
                no_state,
                no_owners,
                depth,
            } => {
                let mut params = json!({
                    "id": id,
                    "include_state": !no_state,
                    "include_owners": !no_owners,
                });
                if let Some(depth) = depth {
                    params["depth"] = json!(depth);
                }
                ("react_get_component", params)
            }
            Commands::Inspect {
                backend_node_id,
                depth,
            } => {
                let mut params = json!({"backend_node_id": backend_node_id});
                if let Some(depth) = depth {
                    params["depth"] = json!(depth);
                }
                ("react_inspect_element", params)
            }
            Commands::Find { text, role, state } => {
                let mut params = json!({"text": text, "include_state": state});
                if let Some(role) = role {
                    params["role"] = json!(role);
                }
                ("react_find_by_text", params)
            }
            Commands::Map { verbose, state } => (
                "react_component_map",
                json!({"verbose": verbose, "include_state": state}),
            ),
        };
        Some(call)
    }

    /// Whether the hook must be in place before the command runs.
    pub fn needs_hook(&self) -> bool {
        !matches!(self, Commands::Pages | Commands::Hook | Commands::Snapshot { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("reactscope").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["map", "--page", "localhost:3000", "--json"]);
        assert_eq!(cli.page.as_deref(), Some("localhost:3000"));
        assert!(cli.json);
        assert_eq!(
            cli.command,
            Commands::Map {
                verbose: false,
                state: false
            }
        );
    }

    #[test]
    fn test_components_params() {
        let cli = parse(&["components", "--max-depth", "4", "-f", "button"]);
        let (tool, params) = cli.command.tool_call().unwrap();
        assert_eq!(tool, "react_list_components");
        assert_eq!(
            params,
            json!({"include_all_types": false, "max_depth": 4, "name_filter": "button"})
        );
    }

    #[test]
    fn test_component_flags_invert() {
        let cli = parse(&["component", "1:0:0.2", "--no-owners"]);
        let (tool, params) = cli.command.tool_call().unwrap();
        assert_eq!(tool, "react_get_component");
        assert_eq!(
            params,
            json!({"id": "1:0:0.2", "include_state": true, "include_owners": false})
        );
    }

    #[test]
    fn test_find_with_role() {
        let cli = parse(&["find", "Log in", "--role", "button"]);
        let (tool, params) = cli.command.tool_call().unwrap();
        assert_eq!(tool, "react_find_by_text");
        assert_eq!(
            params,
            json!({"text": "Log in", "role": "button", "include_state": false})
        );
    }

    #[test]
    fn test_pages_has_no_tool() {
        let cli = parse(&["pages"]);
        assert!(cli.command.tool_call().is_none());
        assert!(!cli.command.needs_hook());
    }

    #[test]
    fn test_needs_hook() {
        assert!(parse(&["inspect", "42"]).command.needs_hook());
        assert!(!parse(&["snapshot"]).command.needs_hook());
        assert!(!parse(&["hook"]).command.needs_hook());
    }

    #[test]
    fn test_inspect_requires_numeric_id() {
        assert!(Cli::try_parse_from(["reactscope", "inspect", "button"]).is_err());
    }
}
