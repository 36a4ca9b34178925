//! Typed model of the Yosys JSON netlist format
//!
//! Mirrors the document structure produced by `write_json`:
//! a `Netlist` holds named `Module`s, each with ports, cells, memories and
//! nets. Two format quirks are handled here:
//! - several booleans (`hide_name`, `signed`, `upto`) are encoded as 0/1
//!   integers
//! - connection bits are either a numeric signal id or one of the constant
//!   strings `"0"`, `"1"`, `"x"`, `"z"`
//!
//! Object key order is preserved (`IndexMap`) and unknown keys at every
//! level are retained in flattened maps, so a read-modify-write cycle does
//! not lose data the model does not know about.

use indexmap::IndexMap;
use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize,
};

/// Top-level netlist document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Netlist {
    /// Tool banner, e.g. "Yosys 0.38 (git sha1 ...)"
    pub creator: String,

    /// Modules by name
    pub modules: IndexMap<String, Module>,

    #[serde(flatten)]
    extra: IndexMap<String, serde_json::Value>,
}

impl Netlist {
    /// Create an empty netlist with the given creator banner
    pub fn new(creator: impl Into<String>) -> Self {
        Self {
            creator: creator.into(),
            modules: IndexMap::new(),
            extra: IndexMap::new(),
        }
    }

    pub fn from_reader(reader: impl std::io::Read) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    pub fn from_slice(input: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(input)
    }

    pub fn from_str(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn to_writer(&self, writer: impl std::io::Write) -> Result<(), serde_json::Error> {
        serde_json::to_writer(writer, self)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// A single hardware module
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    #[serde(default)]
    pub attributes: IndexMap<String, serde_json::Value>,

    #[serde(default)]
    pub ports: IndexMap<String, Port>,

    #[serde(default)]
    pub cells: IndexMap<String, Cell>,

    #[serde(default)]
    pub memories: IndexMap<String, Memory>,

    /// Named nets (Yosys calls these "netnames")
    #[serde(default, rename = "netnames")]
    pub nets: IndexMap<String, Net>,

    #[serde(flatten)]
    extra: IndexMap<String, serde_json::Value>,
}

/// A module port: direction plus the bits it drives or reads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Port {
    pub direction: Direction,
    pub bits: Vec<Bit>,

    #[serde(default)]
    pub offset: usize,

    #[serde(default)]
    pub upto: usize,

    #[serde(
        default,
        serialize_with = "serialize_bool_u64",
        deserialize_with = "deserialize_u64_bool"
    )]
    pub signed: bool,

    #[serde(flatten)]
    extra: IndexMap<String, serde_json::Value>,
}

/// An instantiated cell: a primitive gate or a sub-module instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    #[serde(
        default,
        serialize_with = "serialize_bool_u64",
        deserialize_with = "deserialize_u64_bool"
    )]
    pub hide_name: bool,

    /// Cell type: the instantiated module name (Yosys key "type")
    #[serde(rename = "type")]
    pub module: String,

    #[serde(default)]
    pub attributes: IndexMap<String, serde_json::Value>,

    #[serde(default)]
    pub parameters: IndexMap<String, serde_json::Value>,

    #[serde(default)]
    pub port_directions: IndexMap<String, Direction>,

    #[serde(default)]
    pub connections: IndexMap<String, Vec<Bit>>,

    #[serde(flatten)]
    extra: IndexMap<String, serde_json::Value>,
}

/// An inferred memory block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Memory {
    #[serde(
        default,
        serialize_with = "serialize_bool_u64",
        deserialize_with = "deserialize_u64_bool"
    )]
    pub hide_name: bool,

    #[serde(default)]
    pub attributes: IndexMap<String, serde_json::Value>,

    pub width: usize,
    pub size: usize,

    #[serde(default)]
    pub start_offset: usize,

    #[serde(flatten)]
    extra: IndexMap<String, serde_json::Value>,
}

/// A named net and the bits it spans
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Net {
    #[serde(
        default,
        serialize_with = "serialize_bool_u64",
        deserialize_with = "deserialize_u64_bool"
    )]
    pub hide_name: bool,

    #[serde(default)]
    pub attributes: IndexMap<String, serde_json::Value>,

    pub bits: Vec<Bit>,

    #[serde(default)]
    pub offset: usize,

    #[serde(default)]
    pub upto: usize,

    #[serde(
        default,
        serialize_with = "serialize_bool_u64",
        deserialize_with = "deserialize_u64_bool"
    )]
    pub signed: bool,

    #[serde(flatten)]
    extra: IndexMap<String, serde_json::Value>,
}

/// Port direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Input,
    Output,
    InOut,
}

/// One bit of a connection: a signal id or a constant driver
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bit {
    /// Numeric net id
    Signal(u64),
    /// Constant 0
    _0,
    /// Constant 1
    _1,
    /// High impedance
    Z,
    /// Don't care / undefined
    X,
}

impl std::fmt::Debug for Bit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Signal(signal) => write!(f, "{}", signal),
            Self::_0 => write!(f, "_0"),
            Self::_1 => write!(f, "_1"),
            Self::Z => write!(f, "Z"),
            Self::X => write!(f, "X"),
        }
    }
}

impl Serialize for Bit {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Bit::Signal(signal) => serializer.serialize_u64(signal),
            Bit::_0 => serializer.serialize_str("0"),
            Bit::_1 => serializer.serialize_str("1"),
            Bit::Z => serializer.serialize_str("z"),
            Bit::X => serializer.serialize_str("x"),
        }
    }
}

struct BitVisitor;

impl<'de> Visitor<'de> for BitVisitor {
    type Value = Bit;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "a signal number or one of \"0\", \"1\", \"z\", \"x\"")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Bit::Signal(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match v {
            "0" => Ok(Bit::_0),
            "1" => Ok(Bit::_1),
            "z" => Ok(Bit::Z),
            "x" => Ok(Bit::X),
            _ => Err(de::Error::invalid_value(de::Unexpected::Str(v), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for Bit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BitVisitor)
    }
}

/// Serialize a bool as the 0/1 integer Yosys emits
fn serialize_bool_u64<S: serde::Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::from(*value))
}

struct BoolU64Visitor;

impl<'de> Visitor<'de> for BoolU64Visitor {
    type Value = bool;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "an integer (1 for true, anything else for false)")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(v == 1)
    }
}

/// Deserialize the 0/1 integer Yosys emits into a bool
fn deserialize_u64_bool<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    deserializer.deserialize_u64(BoolU64Visitor)
}
