//! Integration tests for the style handler registry.

use wallaby_style::{
    HandlerKind, NativeValue, RegistryError, Serialized, StyleHandler, StyleRegistry, translate,
};

// ========== registration ==========

#[test]
fn test_empty_registry() {
    let registry = StyleRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.handler("margin").is_none());
}

#[test]
fn test_duplicate_registration_is_an_error() {
    let mut registry = StyleRegistry::new();
    registry
        .try_register("width", StyleHandler::simple("width"))
        .unwrap();
    assert_eq!(
        registry.try_register("width", StyleHandler::simple("width")),
        Err(RegistryError::Duplicate("width".to_string()))
    );
}

#[test]
fn test_simple_handler_must_not_declare_sub_properties() {
    let mut registry = StyleRegistry::new();
    let mut handler = StyleHandler::simple("margin");
    handler.sub_properties = vec!["margin-top".to_string()];
    assert_eq!(
        registry.try_register("margin", handler),
        Err(RegistryError::SimpleWithSubProperties("margin".to_string()))
    );
}

// ========== stock handlers ==========

#[test]
fn test_common_registry_contents() {
    let registry = StyleRegistry::common();
    assert_eq!(registry.len(), 8);
    for name in [
        "width",
        "height",
        "visibility",
        "background-color",
        "z-index",
        "margin",
        "padding",
        "border-width",
    ] {
        assert!(registry.handler(name).is_some(), "missing handler for {name}");
    }

    let z_index = registry.handler("z-index").unwrap();
    assert_eq!(z_index.property, "zIndex");
    assert_eq!(z_index.kind, HandlerKind::Simple);

    let margin = registry.handler("margin").unwrap();
    assert_eq!(margin.kind, HandlerKind::Composite);
    assert_eq!(
        margin.sub_properties,
        vec!["margin-top", "margin-right", "margin-bottom", "margin-left"]
    );
}

// ========== shorthand expansion ==========

#[test]
fn test_margin_shorthand_expands_two_values() {
    let registry = StyleRegistry::common();
    let margin = registry.handler("margin").unwrap();
    let produced = (margin.serialize)(translate("1px 2px"));
    assert_eq!(
        produced,
        Serialized::Apply(NativeValue::Expanded(vec![
            ("marginTop".to_string(), "1px".to_string()),
            ("marginRight".to_string(), "2px".to_string()),
            ("marginBottom".to_string(), "1px".to_string()),
            ("marginLeft".to_string(), "2px".to_string()),
        ]))
    );
}

#[test]
fn test_border_width_shorthand_expands_one_value() {
    let registry = StyleRegistry::common();
    let border_width = registry.handler("border-width").unwrap();
    let produced = (border_width.serialize)(translate("3px"));
    assert_eq!(
        produced,
        Serialized::Apply(NativeValue::Expanded(vec![
            ("borderTopWidth".to_string(), "3px".to_string()),
            ("borderRightWidth".to_string(), "3px".to_string()),
            ("borderBottomWidth".to_string(), "3px".to_string()),
            ("borderLeftWidth".to_string(), "3px".to_string()),
        ]))
    );
}

#[test]
fn test_shorthand_with_too_many_edges_vetoes() {
    let registry = StyleRegistry::common();
    let padding = registry.handler("padding").unwrap();
    assert_eq!(
        (padding.serialize)(translate("1px 2px 3px 4px 5px")),
        Serialized::Skip
    );
}
