// Field descriptors - self-validating, self-documenting dashboard configuration
use crate::domain::color;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("invalid value for field '{field}': {reason} (got {value})")]
    Invalid {
        field: String,
        value: Value,
        reason: String,
    },
    #[error("no configurable field named '{field}'")]
    Unknown { field: String },
}

/// Validation rule attached to a field. Every assignment and every declared
/// default is checked against the rule; nothing is coerced or clamped.
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// `null` or a colour the rendering backend recognises.
    Color,
    /// `null` or a name in the backend's colour-map catalog.
    ColorMap,
    /// A pair of two numbers (width, height).
    FigSize,
    /// A list where every element is numeric.
    FloatList,
    /// A numeric value of at least 8.
    FontSize,
    /// A mapping whose keys all belong to a fixed allowed set.
    Dict { allowed_keys: &'static [&'static str] },
    /// An integer count of at least 1.
    Count,
    /// A list where every element is a recognised colour.
    ColorList,
    /// No restriction; purely descriptive fields.
    Any,
}

impl FieldKind {
    pub fn validate(&self, field: &str, value: &Value) -> Result<(), FieldError> {
        let reject = |reason: String| FieldError::Invalid {
            field: field.to_string(),
            value: value.clone(),
            reason,
        };
        match self {
            FieldKind::Color => match value {
                Value::Null => Ok(()),
                Value::String(s) if color::is_color_like(s) => Ok(()),
                _ => Err(reject("not a recognised colour".to_string())),
            },
            FieldKind::ColorMap => match value {
                Value::Null => Ok(()),
                Value::String(s) if color::has_colormap(s) => Ok(()),
                _ => Err(reject("not a registered colour map".to_string())),
            },
            FieldKind::FigSize => match value.as_array() {
                Some(pair) if pair.len() == 2 && pair.iter().all(|v| v.as_f64().is_some()) => {
                    Ok(())
                }
                _ => Err(reject("expected a pair of two numbers".to_string())),
            },
            FieldKind::FloatList => match value.as_array() {
                Some(items) if items.iter().all(|v| v.as_f64().is_some()) => Ok(()),
                _ => Err(reject("expected a list of numbers".to_string())),
            },
            FieldKind::FontSize => match value.as_f64() {
                Some(size) if size >= 8.0 => Ok(()),
                Some(_) => Err(reject("font size must be at least 8".to_string())),
                None => Err(reject("font size must be numeric".to_string())),
            },
            FieldKind::Dict { allowed_keys } => match value.as_object() {
                Some(map) => {
                    for key in map.keys() {
                        if !allowed_keys.contains(&key.as_str()) {
                            return Err(reject(format!(
                                "key '{key}' is not one of the allowed keys {allowed_keys:?}"
                            )));
                        }
                    }
                    Ok(())
                }
                None => Err(reject("expected a mapping".to_string())),
            },
            FieldKind::Count => match value.as_i64() {
                Some(n) if n >= 1 => Ok(()),
                Some(_) => Err(reject("count must be at least 1".to_string())),
                None => Err(reject("count must be an integer".to_string())),
            },
            FieldKind::ColorList => match value.as_array() {
                Some(items) => {
                    for item in items {
                        let ok = item.as_str().is_some_and(color::is_color_like);
                        if !ok {
                            return Err(reject(format!("{item} is not a recognised colour")));
                        }
                    }
                    Ok(())
                }
                None => Err(reject("expected a list of colours".to_string())),
            },
            FieldKind::Any => Ok(()),
        }
    }
}

/// One declared configuration field: name, human description, default, rule.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: FieldKind,
    pub default: Value,
}

impl FieldDef {
    pub fn new(
        name: &'static str,
        description: &'static str,
        kind: FieldKind,
        default: Value,
    ) -> Self {
        Self {
            name,
            description,
            kind,
            default,
        }
    }
}

/// The per-dashboard-class field registry. Built once per dashboard type
/// (inside a `LazyLock`) and read-only afterwards; chains to the parent
/// class's registry so discovery can walk the ancestry.
#[derive(Debug)]
pub struct FieldSet {
    class_name: &'static str,
    fields: Vec<FieldDef>,
    parent: Option<&'static FieldSet>,
}

impl FieldSet {
    pub fn new(class_name: &'static str) -> Self {
        Self {
            class_name,
            fields: Vec::new(),
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: &'static FieldSet) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Register a field. A default that fails its own rule is a programming
    /// error in the dashboard declaration, so this panics at registry
    /// construction time rather than storing an unvalidated default.
    pub fn field(mut self, def: FieldDef) -> Self {
        if let Err(err) = def.kind.validate(def.name, &def.default) {
            panic!(
                "invalid default for field '{}' on {}: {err}",
                def.name, self.class_name
            );
        }
        self.fields.push(def);
        self
    }

    pub fn class_name(&self) -> &'static str {
        self.class_name
    }

    pub fn own_fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Every field declared on this class and its ancestors, own fields
    /// first, then each ancestor's in chain order.
    pub fn all_fields(&self) -> Vec<&FieldDef> {
        let mut all: Vec<&FieldDef> = self.fields.iter().collect();
        if let Some(parent) = self.parent {
            all.extend(parent.all_fields());
        }
        all
    }

    /// Find a field by name, shadowing ancestors with same-named fields.
    pub fn lookup(&self, name: &str) -> Option<&FieldDef> {
        self.fields
            .iter()
            .find(|def| def.name == name)
            .or_else(|| self.parent.and_then(|parent| parent.lookup(name)))
    }
}

/// Per-instance field values bound to a class registry. Reads fall back to
/// the declared default; writes validate first and leave the previous value
/// untouched on rejection.
#[derive(Debug, Clone)]
pub struct FieldValues {
    set: &'static FieldSet,
    values: HashMap<&'static str, Value>,
}

impl FieldValues {
    pub fn new(set: &'static FieldSet) -> Self {
        Self {
            set,
            values: HashMap::new(),
        }
    }

    pub fn field_set(&self) -> &'static FieldSet {
        self.set
    }

    pub fn get(&self, name: &str) -> Result<&Value, FieldError> {
        let def = self.lookup(name)?;
        Ok(self.values.get(def.name).unwrap_or(&def.default))
    }

    pub fn set(&mut self, name: &str, value: Value) -> Result<(), FieldError> {
        let def = self.lookup(name)?;
        def.kind.validate(def.name, &value)?;
        let key = def.name;
        self.values.insert(key, value);
        Ok(())
    }

    /// Remove the instance override, reverting reads to the default.
    pub fn unset(&mut self, name: &str) -> Result<(), FieldError> {
        let def = self.lookup(name)?;
        self.values.remove(def.name);
        Ok(())
    }

    pub fn get_str(&self, name: &str) -> Result<Option<&str>, FieldError> {
        Ok(self.get(name)?.as_str())
    }

    pub fn get_f64(&self, name: &str) -> Result<Option<f64>, FieldError> {
        Ok(self.get(name)?.as_f64())
    }

    pub fn get_i64(&self, name: &str) -> Result<Option<i64>, FieldError> {
        Ok(self.get(name)?.as_i64())
    }

    pub fn get_pair(&self, name: &str) -> Result<Option<(f64, f64)>, FieldError> {
        let pair = self.get(name)?.as_array().and_then(|items| {
            match (items.first()?.as_f64(), items.get(1)?.as_f64()) {
                (Some(a), Some(b)) => Some((a, b)),
                _ => None,
            }
        });
        Ok(pair)
    }

    fn lookup(&self, name: &str) -> Result<&'static FieldDef, FieldError> {
        self.set.lookup(name).ok_or_else(|| FieldError::Unknown {
            field: name.to_string(),
        })
    }
}
