//! Serde types for rule documents.
//!
//! `RuleDocument` is the TOML/JSON/YAML schema. The `Xml*` types mirror the
//! element layout of XML rule documents and convert into a `RuleDocument`.

use serde::{Deserialize, Serialize};

/// Top-level rule document (one per file).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct RuleDocument {
    /// Classes whose qualified name fully matches any of these are dropped.
    pub strip_classes: Vec<String>,
    /// Classes whose qualified name fully matches any of these are copied unchanged.
    pub skip_classes: Vec<String>,
    /// Auxiliary classes to copy into the output.
    pub inject: Vec<InjectDef>,
    /// Member matchers, in priority order.
    pub methods: Vec<MethodDef>,
}

/// Copy classes matching `classes` from `path` into the output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct InjectDef {
    /// Folder or archive holding the classes.
    pub path: String,
    /// Class name patterns (OR).
    #[serde(default)]
    pub classes: Vec<String>,
}

/// One member matcher. Present constraints are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct MethodDef {
    /// Declaring class name pattern (full match).
    pub class_name: Option<String>,
    /// Method name pattern (full match).
    pub method_name: Option<String>,
    /// Exact method descriptor, e.g. `(I)Ljava/lang/String;`.
    pub signature: Option<String>,
    /// Exact qualified return type name, e.g. `java.lang.String`.
    pub return_type: Option<String>,
    /// Replacement body. `$method` and `$sign` expand to the method's name and signature.
    pub body: Option<String>,
    /// Keep the existing body. Wins over `body`.
    pub keep: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename = "rules")]
pub(crate) struct XmlRules {
    #[serde(rename = "strip-class", default)]
    strip_classes: Vec<String>,
    #[serde(rename = "skip-class", default)]
    skip_classes: Vec<String>,
    #[serde(rename = "inject", default)]
    inject: Vec<XmlInject>,
    #[serde(default)]
    methods: Option<XmlMethods>,
}

#[derive(Debug, Default, Deserialize)]
struct XmlMethods {
    #[serde(default)]
    method: Vec<XmlMethod>,
}

#[derive(Debug, Default, Deserialize)]
struct XmlInject {
    #[serde(default)]
    path: String,
    #[serde(rename = "class", default)]
    classes: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct XmlMethod {
    #[serde(default)]
    classname: Option<String>,
    #[serde(default)]
    methodname: Option<String>,
    #[serde(default)]
    signature: Option<String>,
    #[serde(default)]
    returntype: Option<String>,
    #[serde(default)]
    body: Option<XmlBody>,
}

#[derive(Debug, Default, Deserialize)]
struct XmlBody {
    #[serde(rename = "@keep", default)]
    keep: Option<String>,
    #[serde(rename = "$text", default)]
    text: Option<String>,
}

impl XmlBody {
    fn keeps_existing(&self) -> bool {
        self.keep
            .as_deref()
            .is_some_and(|k| k.eq_ignore_ascii_case("yes") || k.eq_ignore_ascii_case("true"))
    }
}

impl From<XmlRules> for RuleDocument {
    fn from(xml: XmlRules) -> Self {
        let methods = xml
            .methods
            .map(|m| m.method)
            .unwrap_or_default()
            .into_iter()
            .map(|m| {
                let keep = m.body.as_ref().is_some_and(XmlBody::keeps_existing);
                // An empty <body/> element is an empty replacement, not a missing one.
                let body = m
                    .body
                    .filter(|b| !b.keeps_existing())
                    .map(|b| b.text.unwrap_or_default());
                MethodDef {
                    class_name: m.classname,
                    method_name: m.methodname,
                    signature: m.signature,
                    return_type: m.returntype,
                    body,
                    keep,
                }
            })
            .collect();

        RuleDocument {
            strip_classes: xml.strip_classes,
            skip_classes: xml.skip_classes,
            inject: xml
                .inject
                .into_iter()
                .map(|i| InjectDef {
                    path: i.path,
                    classes: i.classes,
                })
                .collect(),
            methods,
        }
    }
}

/// Generate a JSON Schema for [`RuleDocument`].
///
/// Rule authors can use it to validate TOML, JSON and YAML rule documents.
pub fn generate_json_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(RuleDocument)
}
