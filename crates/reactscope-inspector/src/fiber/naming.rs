//! Display-name policy.

use super::graph::{FiberNode, NameHints};
use super::kind::FiberKind;

pub const ANONYMOUS: &str = "Anonymous";
pub const FORWARD_REF: &str = "ForwardRef";
pub const MEMO: &str = "Memo";
pub const UNKNOWN: &str = "Unknown";

/// Name shown for a fiber. Host nodes are named by their host type.
pub fn display_name(node: &FiberNode) -> String {
    let kind = node.kind();
    if kind.is_host() {
        return present(&node.host_type).unwrap_or(UNKNOWN).to_string();
    }
    component_name(kind, &node.names)
}

/// Name of an authored construct, in priority order: explicit display name,
/// then the kind-specific fallbacks.
pub fn component_name(kind: FiberKind, hints: &NameHints) -> String {
    if let Some(name) = present(&hints.display_name) {
        return name.to_string();
    }

    let name = match kind {
        FiberKind::FunctionComponent | FiberKind::ClassComponent => present(&hints.own_name)
            .or(present(&hints.element_type_name))
            .unwrap_or(ANONYMOUS),
        FiberKind::ForwardRef => present(&hints.render_name).unwrap_or(FORWARD_REF),
        FiberKind::MemoComponent => present(&hints.inner_name)
            .or(present(&hints.own_name))
            .unwrap_or(MEMO),
        FiberKind::Host | FiberKind::Other => UNKNOWN,
    };
    name.to_string()
}

fn present(name: &Option<String>) -> Option<&str> {
    name.as_deref().filter(|n| !n.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hints(f: impl FnOnce(&mut NameHints)) -> NameHints {
        let mut h = NameHints::default();
        f(&mut h);
        h
    }

    #[test]
    fn test_display_name_wins() {
        let h = hints(|h| {
            h.display_name = Some("Fancy".to_string());
            h.own_name = Some("Plain".to_string());
        });
        assert_eq!(component_name(FiberKind::FunctionComponent, &h), "Fancy");
        assert_eq!(component_name(FiberKind::MemoComponent, &h), "Fancy");
        assert_eq!(component_name(FiberKind::Other, &h), "Fancy");
    }

    #[test]
    fn test_function_and_class_fallbacks() {
        let own = hints(|h| h.own_name = Some("LoginForm".to_string()));
        assert_eq!(component_name(FiberKind::FunctionComponent, &own), "LoginForm");

        let element = hints(|h| h.element_type_name = Some("Legacy".to_string()));
        assert_eq!(component_name(FiberKind::ClassComponent, &element), "Legacy");

        let empty = hints(|h| h.own_name = Some(String::new()));
        assert_eq!(component_name(FiberKind::FunctionComponent, &empty), ANONYMOUS);
    }

    #[test]
    fn test_forward_ref_and_memo_fallbacks() {
        let render = hints(|h| h.render_name = Some("Input".to_string()));
        assert_eq!(component_name(FiberKind::ForwardRef, &render), "Input");
        assert_eq!(component_name(FiberKind::ForwardRef, &NameHints::default()), FORWARD_REF);

        let inner = hints(|h| h.inner_name = Some("Row".to_string()));
        assert_eq!(component_name(FiberKind::MemoComponent, &inner), "Row");
        assert_eq!(component_name(FiberKind::MemoComponent, &NameHints::default()), MEMO);
    }

    #[test]
    fn test_other_is_unknown() {
        let own = hints(|h| h.own_name = Some("Provider".to_string()));
        assert_eq!(component_name(FiberKind::Other, &own), UNKNOWN);
    }

    #[test]
    fn test_host_named_by_type() {
        let node = FiberNode {
            tag: 5,
            host_type: Some("button".to_string()),
            ..FiberNode::default()
        };
        assert_eq!(display_name(&node), "button");

        let text = FiberNode {
            tag: 6,
            host_type: Some("#text".to_string()),
            ..FiberNode::default()
        };
        assert_eq!(display_name(&text), "#text");
    }
}
