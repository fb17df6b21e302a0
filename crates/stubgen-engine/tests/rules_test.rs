//! Rule document loading and rule set lookups.

mod common;

use std::path::Path;

use common::{method, rules_from_toml};
use stubgen_core::errors::{RuleError, TransformError};
use stubgen_core::StubgenErrorCode;
use stubgen_engine::rules::{
    generate_json_schema, load_from_file, load_from_str, loader::default_rules, RuleFormat,
};

const TOML_RULES: &str = r#"
strip_classes = [".*\\$Mock"]
skip_classes = ["com\\.acme\\.generated\\..*"]

[[inject]]
path = "support/classes"
classes = ["com\\.acme\\.support\\..*"]

[[methods]]
class_name = "com\\.acme\\..*"
method_name = "get.*"
body = "return null;"

[[methods]]
return_type = "java.lang.String"
body = "return $method;"

[[methods]]
signature = "()V"
keep = true
"#;

#[test]
fn toml_document_compiles_in_declaration_order() {
    let rules = rules_from_toml(TOML_RULES);
    let indices: Vec<_> = rules.matchers().iter().map(|m| m.index()).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert!(rules.matchers()[2].keeps_body());
    assert!(rules.has_inject_rules());
    assert_eq!(rules.inject_rules()[0].source(), Path::new("support/classes"));
    assert!(rules.inject_rules()[0].matches("com.acme.support.Helper"));
}

#[test]
fn strip_and_skip_use_full_matches() {
    let rules = rules_from_toml(TOML_RULES);
    assert!(rules.should_strip_class("com.acme.Foo$Mock"));
    assert!(!rules.should_strip_class("com.acme.Foo"));
    assert!(!rules.should_strip_class("com.acme.Foo$MockBuilder"));
    assert!(rules.should_skip_class("com.acme.generated.Api"));
    assert!(!rules.should_skip_class("org.com.acme.generated.Api"));
}

#[test]
fn xml_document_maps_elements_and_keep_attribute() {
    let xml = r#"
        <rules>
            <strip-class>.*Test</strip-class>
            <skip-class>.*Generated</skip-class>
            <strip-class>.*Mock</strip-class>
            <inject>
                <path>lib/support.jar</path>
                <class>com\.acme\.Support</class>
                <class>com\.acme\.Util.*</class>
            </inject>
            <methods>
                <method>
                    <classname>com\.acme\.Foo</classname>
                    <body>return 1;</body>
                </method>
                <method>
                    <methodname>toString</methodname>
                    <body keep="yes"/>
                </method>
                <method>
                    <signature>()V</signature>
                    <body/>
                </method>
                <method>
                    <returntype>int</returntype>
                </method>
            </methods>
        </rules>
    "#;
    let rules = load_from_str(xml, RuleFormat::Xml).unwrap();

    assert!(rules.should_strip_class("a.FooTest"));
    assert!(rules.should_strip_class("a.FooMock"));
    assert!(rules.should_skip_class("a.FooGenerated"));
    assert_eq!(rules.inject_rules()[0].patterns().len(), 2);

    let matchers = rules.matchers();
    assert_eq!(matchers.len(), 4);
    assert_eq!(matchers[0].body(), Some("return 1;"));
    assert!(matchers[1].keeps_body());
    assert_eq!(matchers[2].body(), Some(""));
    assert!(matchers[3].keeps_body());
}

#[test]
fn json_and_yaml_documents_share_the_schema() {
    let json = r#"{"methods": [{"method_name": "run", "body": "return;"}], "strip_classes": ["x\\..*"]}"#;
    let rules = load_from_str(json, RuleFormat::Json).unwrap();
    assert_eq!(rules.matchers()[0].body(), Some("return;"));
    assert!(rules.should_strip_class("x.Y"));

    let yaml = "methods:\n  - method_name: run\n    keep: true\nskip_classes:\n  - 'y\\..*'\n";
    let rules = load_from_str(yaml, RuleFormat::Yaml).unwrap();
    assert!(rules.matchers()[0].keeps_body());
    assert!(rules.should_skip_class("y.Z"));

    assert!(load_from_str("", RuleFormat::Yaml).unwrap().matchers().is_empty());
}

#[test]
fn matcher_without_constraints_fails_load() {
    let err = load_from_str(
        "[[methods]]\nclass_name = \"\"\nbody = \"return;\"\n",
        RuleFormat::Toml,
    )
    .unwrap_err();
    assert!(matches!(err, RuleError::EmptyMatcher { index: 0, .. }));
    assert_eq!(err.error_code(), "RULE_EMPTY_MATCHER");
}

#[test]
fn invalid_pattern_fails_load_with_location() {
    let err = load_from_str("strip_classes = [\"ok\", \"(broken\"]\n", RuleFormat::Toml).unwrap_err();
    match &err {
        RuleError::InvalidPattern { pattern, location, .. } => {
            assert_eq!(pattern, "(broken");
            assert_eq!(location, "strip_classes[1]");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.error_code(), "RULE_INVALID_PATTERN");
}

#[test]
fn malformed_documents_are_parse_errors() {
    let err = load_from_str("methods = 3", RuleFormat::Toml).unwrap_err();
    assert!(matches!(err, RuleError::Parse { .. }));
    let err = load_from_str("<rules><methods>", RuleFormat::Xml).unwrap_err();
    assert!(matches!(err, RuleError::Parse { .. }));
}

#[test]
fn conflicting_matchers_fail_unless_duplicates_ignored() {
    let rules = rules_from_toml(
        r#"
        [[methods]]
        method_name = "get.*"
        body = "return null;"

        [[methods]]
        return_type = "java.lang.String"
        body = "return \"\";"
        "#,
    );
    let member = method("com.acme.Foo", "getName", "()Ljava/lang/String;");

    let err = rules.find_matcher(&member, false).unwrap_err();
    match &err {
        TransformError::RuleConflict { member, matchers } => {
            assert_eq!(member, "com.acme.Foo.getName()Ljava/lang/String;");
            assert_eq!(matchers.len(), 2);
            assert!(matchers[0].contains("'get.*'"));
            assert!(matchers[1].contains("'java.lang.String'"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.error_code(), "RULE_CONFLICT");
    assert!(err.to_string().contains("More than one matcher"));

    let chosen = rules.find_matcher(&member, true).unwrap().unwrap();
    assert_eq!(chosen.index(), 0);
}

#[test]
fn single_or_no_match() {
    let rules = rules_from_toml(TOML_RULES);
    let getter = method("com.acme.Foo", "getCount", "()I");
    assert_eq!(rules.find_matcher(&getter, false).unwrap().unwrap().index(), 0);

    let other = method("org.other.Foo", "compute", "(I)J");
    assert!(rules.find_matcher(&other, false).unwrap().is_none());
}

#[test]
fn default_rules_skip_descriptors() {
    let rules = default_rules().unwrap();
    assert!(rules.should_skip_class("module-info"));
    assert!(rules.should_skip_class("com.acme.package-info"));
    assert!(!rules.should_skip_class("com.acme.Foo"));
    assert!(rules.matchers().is_empty());
}

#[test]
fn load_from_file_picks_format_by_extension() {
    let dir = tempfile::tempdir().unwrap();

    let toml_path = dir.path().join("rules.toml");
    std::fs::write(&toml_path, TOML_RULES).unwrap();
    assert_eq!(load_from_file(&toml_path).unwrap().matchers().len(), 3);

    let xml_path = dir.path().join("rules.XML");
    std::fs::write(&xml_path, "<rules><skip-class>a</skip-class></rules>").unwrap();
    assert!(load_from_file(&xml_path).unwrap().should_skip_class("a"));

    let txt_path = dir.path().join("rules.txt");
    std::fs::write(&txt_path, "").unwrap();
    assert!(matches!(
        load_from_file(&txt_path),
        Err(RuleError::UnsupportedFormat { .. })
    ));

    assert!(matches!(
        load_from_file(&dir.path().join("absent.toml")),
        Err(RuleError::Read { .. })
    ));
}

#[test]
fn json_schema_describes_rule_document() {
    let schema = serde_json::to_value(generate_json_schema()).unwrap();
    let properties = &schema["properties"];
    for key in ["strip_classes", "skip_classes", "inject", "methods"] {
        assert!(properties.get(key).is_some(), "missing {key}");
    }
}
