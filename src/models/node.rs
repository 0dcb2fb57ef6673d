//! Graph node records as produced by the level file parser.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

/// Node identifier.
///
/// Level parsers emit either numeric or string ids. Numbers compare by
/// value (`1` and `1.0` are the same node); a number never equals a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum NodeId {
    /// Integral id (the common case for binary graph files).
    Int(i64),
    /// Integral id above `i64::MAX`.
    UInt(u64),
    /// Non-integral numeric id.
    Float(Number),
    /// Textual id.
    Text(String),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Int(id) => write!(f, "{}", id),
            NodeId::UInt(id) => write!(f, "{}", id),
            NodeId::Float(id) => write!(f, "{}", id),
            NodeId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for NodeId {
    fn from(id: i64) -> Self {
        NodeId::Int(id)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId::Text(id.to_string())
    }
}

impl From<Number> for NodeId {
    fn from(id: Number) -> Self {
        if let Some(id) = id.as_i64() {
            return NodeId::Int(id);
        }
        if let Some(id) = id.as_u64() {
            return NodeId::UInt(id);
        }
        match id.as_f64() {
            Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                NodeId::Int(f as i64)
            }
            _ => NodeId::Float(id),
        }
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Num(Number),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Num(id) => NodeId::from(id),
            RawId::Text(id) => NodeId::Text(id),
        })
    }
}

/// A numeric attribute kept exactly as it was read.
///
/// Integers stay integers and floats stay floats, so a node list written
/// back out keeps its original number types. Displays like the input
/// (`2` stays `2`, `2.0` stays `2.0`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scalar(Number);

impl Scalar {
    pub fn get(&self) -> f64 {
        self.0.as_f64().unwrap_or_default()
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Self(Number::from(0))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self(Number::from(value))
    }
}

/// Non-finite values become `0`.
impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map(Self).unwrap_or_default()
    }
}

impl PartialEq<f64> for Scalar {
    fn eq(&self, other: &f64) -> bool {
        self.get() == *other
    }
}

/// Raw material code as found in the input (number or string).
///
/// Lookups use the text form, so `7` and `"7"` name the same material,
/// while the raw value is what gets written back out.
#[derive(Debug, Clone, Default)]
pub struct MaterialCode {
    text: String,
    raw: Value,
}

impl MaterialCode {
    pub fn new(code: impl Into<String>) -> Self {
        let text = code.into();
        Self {
            raw: Value::String(text.clone()),
            text,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the input carried no material.
    pub fn is_missing(&self) -> bool {
        self.raw.is_null()
    }
}

impl PartialEq for MaterialCode {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for MaterialCode {}

impl Hash for MaterialCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for MaterialCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for MaterialCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<i64> for MaterialCode {
    fn from(code: i64) -> Self {
        Self {
            text: code.to_string(),
            raw: Value::from(code),
        }
    }
}

impl Serialize for MaterialCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MaterialCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        let text = match &raw {
            Value::Null => String::new(),
            Value::String(code) => code.clone(),
            other => other.to_string(),
        };
        Ok(Self { text, raw })
    }
}

/// A single node of the level graph.
///
/// Only `id` and the position are structural; every other field falls back
/// to an empty/zero value when missing or null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Unique node identifier.
    pub id: NodeId,
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
    /// Raw material code.
    #[serde(default, skip_serializing_if = "MaterialCode::is_missing")]
    pub material: MaterialCode,
    /// Display-only attribute.
    #[serde(default, deserialize_with = "null_as_default")]
    pub gamma: Scalar,
    /// Base marker size before scaling.
    #[serde(default, deserialize_with = "null_as_default")]
    pub radius: Scalar,
    /// Opaque display attribute.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub criteria: Value,
    /// Neighbor ids. May reference nodes missing from the list.
    #[serde(default, deserialize_with = "null_as_default")]
    pub edges: Vec<NodeId>,
}

impl GraphNode {
    /// Create a node at a position with no material, attributes or edges.
    pub fn new(id: impl Into<NodeId>, x: f64, y: f64, z: f64) -> Self {
        Self {
            id: id.into(),
            x: x.into(),
            y: y.into(),
            z: z.into(),
            material: MaterialCode::default(),
            gamma: Scalar::default(),
            radius: Scalar::default(),
            criteria: Value::Null,
            edges: Vec::new(),
        }
    }

    pub fn with_material(mut self, material: impl Into<MaterialCode>) -> Self {
        self.material = material.into();
        self
    }

    pub fn with_gamma_radius(
        mut self,
        gamma: impl Into<Scalar>,
        radius: impl Into<Scalar>,
    ) -> Self {
        self.gamma = gamma.into();
        self.radius = radius.into();
        self
    }

    pub fn with_criteria(mut self, criteria: Value) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn with_edges<I, T>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<NodeId>,
    {
        self.edges = edges.into_iter().map(Into::into).collect();
        self
    }

    /// Criteria as display text. Strings are shown bare, null as empty.
    pub fn criteria_text(&self) -> String {
        match &self.criteria {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
