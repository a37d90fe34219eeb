//! Builder for resource definition text used in acceptance fixtures.
//!
//! ```text
//! resource "google_container_node_pool" "np" {
//!     initial_node_count = 2
//!     node_config {
//!         machine_type = "n1-highmem-4"
//!     }
//! }
//! ```

use std::collections::BTreeMap;

/// Default indentation step used by `Display`.
const INDENT_LEN: usize = 4;

/// A value assigned to an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Int(i64),
    Bool(bool),
    Str(String),
    List(Vec<ConfigValue>),
    /// Nested block, rendered without `=`.
    Block(ConfigBuilder),
}

impl ConfigValue {
    fn render(&self, indent: usize, indent_len: usize) -> String {
        match self {
            ConfigValue::Int(v) => v.to_string(),
            ConfigValue::Bool(v) => v.to_string(),
            ConfigValue::Str(v) => quote(v),
            ConfigValue::List(items) => {
                let rendered: Vec<String> = items
                    .iter()
                    .map(|item| item.render(indent, indent_len))
                    .collect();
                format!("[{}]", rendered.join(", "))
            }
            ConfigValue::Block(block) => {
                block.render_with_indent(indent + indent_len, indent_len, true)
            }
        }
    }
}

impl From<i64> for ConfigValue {
    fn from(v: i64) -> Self {
        ConfigValue::Int(v)
    }
}

impl From<i32> for ConfigValue {
    fn from(v: i32) -> Self {
        ConfigValue::Int(i64::from(v))
    }
}

impl From<u32> for ConfigValue {
    fn from(v: u32) -> Self {
        ConfigValue::Int(i64::from(v))
    }
}

impl From<bool> for ConfigValue {
    fn from(v: bool) -> Self {
        ConfigValue::Bool(v)
    }
}

impl From<&str> for ConfigValue {
    fn from(v: &str) -> Self {
        ConfigValue::Str(v.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(v: String) -> Self {
        ConfigValue::Str(v)
    }
}

impl From<ConfigBuilder> for ConfigValue {
    fn from(v: ConfigBuilder) -> Self {
        ConfigValue::Block(v)
    }
}

impl<T: Into<ConfigValue>> From<Vec<T>> for ConfigValue {
    fn from(v: Vec<T>) -> Self {
        ConfigValue::List(v.into_iter().map(Into::into).collect())
    }
}

/// Builds a `resource "<type>" "<name>" { ... }` block, or an anonymous
/// nested block when no type/name is set.
///
/// Attributes render in key order so generated configs are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigBuilder {
    resource_type: Option<String>,
    resource_name: Option<String>,
    attributes: BTreeMap<String, ConfigValue>,
}

impl ConfigBuilder {
    /// Creates a builder for a resource with the given type and name.
    pub fn resource(resource_type: impl Into<String>, resource_name: impl Into<String>) -> Self {
        Self {
            resource_type: Some(resource_type.into()),
            resource_name: Some(resource_name.into()),
            attributes: BTreeMap::new(),
        }
    }

    /// Creates a nested block, e.g. for `labels` or `node_config`.
    pub fn nested() -> Self {
        Self::default()
    }

    pub fn with_resource_name(mut self, name: impl Into<String>) -> Self {
        self.resource_name = Some(name.into());
        self
    }

    pub fn with_resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = Some(resource_type.into());
        self
    }

    /// Sets an attribute, replacing any previous value for `key`.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Sets a list attribute.
    pub fn with_list<I, V>(self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ConfigValue>,
    {
        let list = ConfigValue::List(values.into_iter().map(Into::into).collect());
        self.with_attribute(key, list)
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.with_attribute("name", name.into())
    }

    pub fn with_zone(self, zone: impl Into<String>) -> Self {
        self.with_attribute("zone", zone.into())
    }

    pub fn resource_type(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }

    pub fn resource_name(&self) -> Option<&str> {
        self.resource_name.as_deref()
    }

    pub fn attribute(&self, key: &str) -> Option<&ConfigValue> {
        self.attributes.get(key)
    }

    /// The `name` attribute, if set to a string.
    pub fn name(&self) -> Option<&str> {
        self.str_attribute("name")
    }

    /// The `zone` attribute, if set to a string.
    pub fn zone(&self) -> Option<&str> {
        self.str_attribute("zone")
    }

    fn str_attribute(&self, key: &str) -> Option<&str> {
        match self.attributes.get(key) {
            Some(ConfigValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// Renders the block.
    ///
    /// `indent` is the indentation of the opening and closing lines and
    /// `indent_len` the extra indentation for attributes. An `embedded` block
    /// is a value inside a larger one, so its first line is not indented.
    pub fn render_with_indent(&self, indent: usize, indent_len: usize, embedded: bool) -> String {
        let mut out = String::new();

        if !embedded {
            out.push_str(&spaces(indent));
        }
        if let (Some(ty), Some(name)) = (&self.resource_type, &self.resource_name) {
            out.push_str(&format!("resource {} {} ", quote(ty), quote(name)));
        }
        out.push_str("{\n");

        for (key, value) in &self.attributes {
            out.push_str(&spaces(indent + indent_len));
            out.push_str(key);
            out.push(' ');
            match value {
                ConfigValue::Block(_) => out.push_str(&value.render(indent, indent_len)),
                _ => {
                    out.push_str("= ");
                    out.push_str(&value.render(indent, indent_len));
                    out.push('\n');
                }
            }
        }

        out.push_str(&spaces(indent));
        out.push_str("}\n");
        out
    }
}

impl std::fmt::Display for ConfigBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_with_indent(0, INDENT_LEN, false))
    }
}

fn spaces(len: usize) -> String {
    " ".repeat(len)
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
