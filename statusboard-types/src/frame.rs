//! Frames - columnar time-series data supplied by the dashboard host.

use std::collections::BTreeMap;

/// Labels attached to a field (not per row).
pub type Labels = BTreeMap<String, String>;

/// A columnar time-series unit.
///
/// Every field of a frame holds one value per row. The row count of a frame
/// is the length of its first field.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Optional frame name (usually the query or metric name).
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,

    /// Columns of the frame, in query order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fields: Vec<Field>,
}

impl Frame {
    /// Create an empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for constructing frames.
    pub fn builder() -> FrameBuilder {
        FrameBuilder::new()
    }

    /// Number of rows in the frame.
    pub fn len(&self) -> usize {
        self.fields.first().map_or(0, |f| f.values.len())
    }

    /// Check if the frame has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The first field typed as time, if any.
    pub fn time_field(&self) -> Option<&Field> {
        self.fields.iter().find(|f| f.field_type == FieldType::Time)
    }

    /// All fields typed as number, in field order.
    pub fn number_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.field_type == FieldType::Number)
    }
}

/// Type tag of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FieldType {
    Time,
    Number,
    String,
    Boolean,
    /// Any type tag this crate does not model.
    #[default]
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// The numeric reading of this cell, if it holds a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Check if this cell is null.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<Option<f64>> for FieldValue {
    fn from(n: Option<f64>) -> Self {
        n.map_or(FieldValue::Null, FieldValue::Number)
    }
}

/// A named, typed column of a frame.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    /// Field name as reported by the data source.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,

    /// Type tag.
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub field_type: FieldType,

    /// One value per row.
    #[cfg_attr(feature = "serde", serde(default))]
    pub values: Vec<FieldValue>,

    /// Labels describing the series this field carries.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "BTreeMap::is_empty")
    )]
    pub labels: Labels,
}

impl Field {
    /// Create a field without labels.
    pub fn new(name: impl Into<String>, field_type: FieldType, values: Vec<FieldValue>) -> Self {
        Self {
            name: name.into(),
            field_type,
            values,
            labels: Labels::new(),
        }
    }

    /// Look up a label value, ignoring empty values.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }

    /// Number of rows in this field.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if this field has no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ============================================================================
// Builders
// ============================================================================

/// Builder for `Frame`.
#[derive(Debug, Default)]
pub struct FrameBuilder {
    name: Option<String>,
    fields: Vec<Field>,
}

impl FrameBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the frame name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a time field from epoch-millisecond timestamps.
    pub fn time(mut self, name: impl Into<String>, timestamps: impl IntoIterator<Item = i64>) -> Self {
        let values = timestamps.into_iter().map(FieldValue::from).collect();
        self.fields.push(Field::new(name, FieldType::Time, values));
        self
    }

    /// Add a number field built using a closure.
    pub fn number<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(FieldBuilder) -> FieldBuilder,
    {
        let field = f(FieldBuilder::new(name, FieldType::Number)).build();
        self.fields.push(field);
        self
    }

    /// Add a pre-built field.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Build the frame.
    pub fn build(self) -> Frame {
        Frame {
            name: self.name,
            fields: self.fields,
        }
    }
}

/// Builder for `Field`.
#[derive(Debug)]
pub struct FieldBuilder {
    field: Field,
}

impl FieldBuilder {
    /// Create a new builder for a field of the given type.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            field: Field::new(name, field_type, Vec::new()),
        }
    }

    /// Append numeric values.
    pub fn values(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.field.values.extend(values.into_iter().map(FieldValue::Number));
        self
    }

    /// Append a single raw cell value.
    pub fn value(mut self, value: impl Into<FieldValue>) -> Self {
        self.field.values.push(value.into());
        self
    }

    /// Attach a label.
    pub fn label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.field.labels.insert(key.into(), value.into());
        self
    }

    /// Build the field.
    pub fn build(self) -> Field {
        self.field
    }
}
