/// Tests for root and element class name generation
use crate::convention::NamingConvention;
use crate::css_api::{css_api_key, CssApi};
use crate::generator::{ClassNameFactory, ClassNameGenerator};
use crate::modifiers::Modifiers;
use crate::props::Props;
use bemkit_common::{
    ClassNameError, CollectingSink, MISSING_CLASSES, MISSING_ELEMENT_CLASS,
    MISSING_MODIFIER_CLASS,
};
use serde_json::json;
use std::sync::Arc;

const COMPONENT_NAME: &str = "MyComponent";
const ELEMENT_NAME: &str = "subElement";
const TRUTHY_MODIFIER: &str = "isFoo";
const FALSY_MODIFIER: &str = "isBar";

fn has_class(class_names: &str, class_name: &str) -> bool {
    class_names.split(' ').any(|name| name == class_name)
}

fn modifiers() -> Modifiers {
    Modifiers::from([(TRUTHY_MODIFIER, true), (FALSY_MODIFIER, false)])
}

fn factory_with_sink() -> (ClassNameFactory, Arc<CollectingSink>) {
    let sink = Arc::new(CollectingSink::new());
    let factory = ClassNameFactory::new(COMPONENT_NAME)
        .unwrap()
        .with_sink(sink.clone());
    (factory, sink)
}

#[test]
fn test_curried_and_bound_generators_agree() {
    let props = Props::new().with_classes([("root", "root")]);
    let bound = ClassNameGenerator::new(COMPONENT_NAME, props.clone()).unwrap();
    let curried = ClassNameFactory::new(COMPONENT_NAME)
        .unwrap()
        .with_props(props);

    assert_eq!(bound.root(&Modifiers::new()), curried.root(&Modifiers::new()));
}

#[test]
fn test_curried_generator_requires_props_object() {
    let factory = ClassNameFactory::new(COMPONENT_NAME).unwrap();

    for value in [json!(null), json!("foo")] {
        assert!(matches!(
            factory.with_props_value(&value),
            Err(ClassNameError::MissingProps)
        ));
    }
    assert!(factory.with_props_value(&json!({})).is_ok());
}

#[test]
fn test_warns_when_props_lack_classes() {
    let (factory, sink) = factory_with_sink();

    factory.with_props(Props::new().with_classes(CssApi::new()));
    assert!(sink.is_empty());

    factory.with_props(Props::new());
    assert!(sink.has_rule(MISSING_CLASSES));
    assert!(sink.diagnostics()[0].suggestion.is_some());
}

#[test]
fn test_invalid_component_fails_at_construction() {
    assert!(matches!(
        ClassNameFactory::new("   "),
        Err(ClassNameError::EmptyComponentName { .. })
    ));
    assert!(matches!(
        ClassNameGenerator::new("", Props::new()),
        Err(ClassNameError::InvalidComponentIdentifier { .. })
    ));
}

mod without_props {
    use super::*;

    #[test]
    fn test_generates_block_identifier() {
        let root = ClassNameFactory::new(COMPONENT_NAME)
            .unwrap()
            .root(&Modifiers::new());
        assert_eq!(root, COMPONENT_NAME);
    }

    #[test]
    fn test_generates_conditional_root_modifiers() {
        let root = ClassNameFactory::new(COMPONENT_NAME)
            .unwrap()
            .root(&modifiers());

        assert!(has_class(&root, COMPONENT_NAME));
        assert!(has_class(&root, "MyComponent--isFoo"));
        assert!(!has_class(&root, "MyComponent--isBar"));
        assert_eq!(root, "MyComponent MyComponent--isFoo");
    }

    #[test]
    fn test_generates_element_names() {
        let element = ClassNameFactory::new(COMPONENT_NAME)
            .unwrap()
            .element(ELEMENT_NAME, &Modifiers::new())
            .unwrap();
        assert!(has_class(&element, "MyComponent__subElement"));
    }

    #[test]
    fn test_generates_conditional_element_modifiers() {
        let element = ClassNameFactory::new(COMPONENT_NAME)
            .unwrap()
            .element(ELEMENT_NAME, &modifiers())
            .unwrap();

        assert!(has_class(&element, "MyComponent__subElement"));
        assert!(has_class(&element, "MyComponent__subElement--isFoo"));
        assert!(!has_class(&element, "MyComponent__subElement--isBar"));
    }

    #[test]
    fn test_rejects_empty_element_names() {
        let factory = ClassNameFactory::new(COMPONENT_NAME).unwrap();
        for name in ["", "  "] {
            assert!(matches!(
                factory.element(name, &Modifiers::new()),
                Err(ClassNameError::InvalidElementName { .. })
            ));
        }
    }

    #[test]
    fn test_emits_no_diagnostics() {
        let (factory, sink) = factory_with_sink();
        factory.root(&modifiers());
        factory.element(ELEMENT_NAME, &modifiers()).unwrap();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_custom_convention() {
        let factory = ClassNameFactory::new(COMPONENT_NAME)
            .unwrap()
            .with_convention(NamingConvention {
                element_separator: "-".to_string(),
                modifier_separator: "_".to_string(),
            });

        assert_eq!(factory.root(&modifiers()), "MyComponent MyComponent_isFoo");
        assert_eq!(
            factory.element("icon", &modifiers()).unwrap(),
            "MyComponent-icon MyComponent-icon_isFoo"
        );
    }
}

mod with_props {
    use super::*;

    #[test]
    fn test_supplies_root_with_class_name() {
        let props = Props::new().with_class_name("props.className");
        let root = ClassNameFactory::new(COMPONENT_NAME)
            .unwrap()
            .with_props(props)
            .root(&Modifiers::new());

        assert!(has_class(&root, COMPONENT_NAME));
        assert!(has_class(&root, "props.className"));
    }

    #[test]
    fn test_supplies_root_with_classes_root() {
        let props = Props::new().with_classes([("root", "props.classes.root")]);
        let root = ClassNameGenerator::new(COMPONENT_NAME, props)
            .unwrap()
            .root(&Modifiers::new());

        assert!(has_class(&root, COMPONENT_NAME));
        assert!(has_class(&root, "props.classes.root"));
    }

    #[test]
    fn test_supplies_root_with_css_api_modifiers() {
        let props = Props::new().with_classes([
            (TRUTHY_MODIFIER, "props.classes.isFoo"),
            (FALSY_MODIFIER, "props.classes.isBar"),
        ]);
        let (factory, sink) = factory_with_sink();
        let root = factory.with_props(props).root(&modifiers());

        assert!(has_class(&root, "props.classes.isFoo"));
        assert!(!has_class(&root, "props.classes.isBar"));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_root_ordering() {
        let props = Props::new()
            .with_class_name("extra")
            .with_classes([("root", "root-x"), (TRUTHY_MODIFIER, "foo-x")]);
        let root = ClassNameGenerator::new(COMPONENT_NAME, props)
            .unwrap()
            .root(&Modifiers::from([(TRUTHY_MODIFIER, true)]));

        assert_eq!(root, "MyComponent MyComponent--isFoo extra root-x foo-x");
    }

    #[test]
    fn test_root_deduplicates_across_sources() {
        let props = Props::new()
            .with_class_name("MyComponent shared")
            .with_classes([("root", "shared"), (TRUTHY_MODIFIER, "shared")]);
        let root = ClassNameGenerator::new(COMPONENT_NAME, props)
            .unwrap()
            .root(&Modifiers::from([(TRUTHY_MODIFIER, true)]));

        assert_eq!(root, "MyComponent MyComponent--isFoo shared");
    }

    #[test]
    fn test_warns_for_modifiers_missing_from_css_api() {
        let (factory, sink) = factory_with_sink();
        let root = factory
            .with_props(Props::new().with_classes(CssApi::new()))
            .root(&Modifiers::from([(TRUTHY_MODIFIER, true)]));

        assert!(sink.has_rule(MISSING_MODIFIER_CLASS));
        assert_eq!(root, "MyComponent MyComponent--isFoo");
    }

    #[test]
    fn test_warns_for_modifiers_when_classes_absent() {
        let (factory, sink) = factory_with_sink();
        factory.with_props(Props::new()).root(&modifiers());

        let rules: Vec<String> = sink.take().into_iter().map(|d| d.rule).collect();
        assert_eq!(
            rules,
            vec![MISSING_CLASSES, MISSING_MODIFIER_CLASS, MISSING_MODIFIER_CLASS]
        );
    }

    #[test]
    fn test_supplies_elements_with_their_css_api_class() {
        let props = Props::new()
            .with_class_name("props.className")
            .with_classes([
                ("root", "props.classes.root"),
                (ELEMENT_NAME, "props.classes.subElement"),
            ]);
        let (factory, sink) = factory_with_sink();
        let element = factory
            .with_props(props)
            .element(ELEMENT_NAME, &Modifiers::new())
            .unwrap();

        assert!(has_class(&element, "props.classes.subElement"));
        assert!(!has_class(&element, "props.className"));
        assert!(!has_class(&element, "props.classes.root"));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_warns_for_elements_missing_from_css_api() {
        let (factory, sink) = factory_with_sink();
        factory
            .with_props_value(&json!({}))
            .unwrap()
            .element(ELEMENT_NAME, &Modifiers::new())
            .unwrap();

        assert!(sink.has_rule(MISSING_ELEMENT_CLASS));
    }

    #[test]
    fn test_supplies_elements_with_css_api_modifiers() {
        let props = Props::new().with_classes([
            (TRUTHY_MODIFIER.to_string(), "props.classes.isFoo"),
            (FALSY_MODIFIER.to_string(), "props.classes.isBar"),
            (
                css_api_key(Some(ELEMENT_NAME), TRUTHY_MODIFIER),
                "props.classes.subElementIsFoo",
            ),
            (
                css_api_key(Some(ELEMENT_NAME), FALSY_MODIFIER),
                "props.classes.subElementIsBar",
            ),
        ]);
        let element = ClassNameGenerator::new(COMPONENT_NAME, props)
            .unwrap()
            .element(ELEMENT_NAME, &modifiers())
            .unwrap();

        assert!(has_class(&element, "props.classes.subElementIsFoo"));
        assert!(!has_class(&element, "props.classes.subElementIsBar"));
        assert!(!has_class(&element, "props.classes.isFoo"));
        assert!(!has_class(&element, "props.classes.isBar"));
    }

    #[test]
    fn test_element_css_api_lookup_is_scoped() {
        let props = Props::new().with_classes([("sub", "sub-x"), ("isFoo", "x-foo")]);
        let (factory, sink) = factory_with_sink();
        let element = factory
            .with_props(props)
            .element("sub", &Modifiers::from([("isFoo", true)]))
            .unwrap();

        assert_eq!(element, "MyComponent__sub MyComponent__sub--isFoo sub-x");
        assert!(sink.has_rule(MISSING_MODIFIER_CLASS));
        assert!(sink.diagnostics()[0].message.contains("'subIsFoo'"));
    }
}
