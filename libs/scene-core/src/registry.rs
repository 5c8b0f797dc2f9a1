//! # Persistence Registry
//!
//! Out-of-core save/restore for scene objects.
//!
//! Primitives do not serialize themselves. Each one exposes its parameters
//! as a named [`ParamSet`] through [`Persistable`]; the [`Registry`] maps a
//! type tag to a factory that revives an object from such a set. The
//! [`TaggedState`] envelope is serde-derived, so hosts can persist it in any
//! serde format without the shape crates knowing about files or wires.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::renderable::SceneObject;

/// A single typed parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    /// A real-valued parameter (radii, heights).
    Float(f64),
    /// A count parameter (tessellation resolution).
    UInt(u32),
    /// A flag parameter (cap toggles).
    Bool(bool),
}

impl ParamValue {
    fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Float(_) => "float",
            ParamValue::UInt(_) => "uint",
            ParamValue::Bool(_) => "bool",
        }
    }
}

/// An ordered collection of named parameter values.
///
/// Order is preserved so that an object's parameter list is stable and
/// enumerable, which keeps serialized state diffable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamSet {
    entries: Vec<(String, ParamValue)>,
}

impl ParamSet {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter, replacing any previous value under the same name.
    pub fn set(&mut self, name: impl Into<String>, value: ParamValue) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Returns the value stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<ParamValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    /// Returns the float stored under `name`.
    ///
    /// # Errors
    ///
    /// [`SceneError::MissingParameter`] if absent,
    /// [`SceneError::ParameterType`] if present with a different type.
    pub fn float(&self, name: &str) -> Result<f64, SceneError> {
        match self.get(name) {
            Some(ParamValue::Float(v)) => Ok(v),
            Some(other) => {
                debug!("parameter '{name}' is {}, expected float", other.type_name());
                Err(SceneError::wrong_type(name, "float"))
            }
            None => Err(SceneError::missing(name)),
        }
    }

    /// Returns the unsigned integer stored under `name`.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`ParamSet::float`].
    pub fn uint(&self, name: &str) -> Result<u32, SceneError> {
        match self.get(name) {
            Some(ParamValue::UInt(v)) => Ok(v),
            Some(other) => {
                debug!("parameter '{name}' is {}, expected uint", other.type_name());
                Err(SceneError::wrong_type(name, "uint"))
            }
            None => Err(SceneError::missing(name)),
        }
    }

    /// Returns the boolean stored under `name`.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`ParamSet::float`].
    pub fn boolean(&self, name: &str) -> Result<bool, SceneError> {
        match self.get(name) {
            Some(ParamValue::Bool(v)) => Ok(v),
            Some(other) => {
                debug!("parameter '{name}' is {}, expected bool", other.type_name());
                Err(SceneError::wrong_type(name, "bool"))
            }
            None => Err(SceneError::missing(name)),
        }
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ParamValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Save/restore capability exposed by persistable scene objects.
pub trait Persistable {
    /// Stable identifier used to look up the revive factory.
    fn type_tag(&self) -> &'static str;

    /// Captures the object's parameters by name.
    fn save_state(&self) -> ParamSet;

    /// Restores the object's parameters from a set captured earlier.
    ///
    /// # Errors
    ///
    /// Returns an error if a required parameter is missing or ill-typed.
    fn restore_state(&mut self, params: &ParamSet) -> Result<(), SceneError>;
}

/// Serializable envelope pairing a type tag with captured parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedState {
    /// Type tag identifying which factory can revive this state.
    pub type_tag: String,
    /// The captured parameter set.
    pub params: ParamSet,
}

impl TaggedState {
    /// Captures the current state of a persistable object.
    pub fn capture(object: &dyn Persistable) -> Self {
        Self {
            type_tag: object.type_tag().to_string(),
            params: object.save_state(),
        }
    }
}

/// Factory signature for reviving an object from captured parameters.
pub type ReviveFn = fn(&ParamSet) -> Result<Box<dyn SceneObject>, SceneError>;

/// Maps type tags to revive factories.
///
/// Shape crates register their types once at startup; hosts then revive
/// whole scenes from a stream of [`TaggedState`] values.
#[derive(Default)]
pub struct Registry {
    factories: HashMap<&'static str, ReviveFn>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a revive factory under a type tag. Re-registering a tag
    /// replaces the previous factory.
    pub fn register(&mut self, tag: &'static str, factory: ReviveFn) {
        debug!("registering scene object type '{tag}'");
        self.factories.insert(tag, factory);
    }

    /// Returns true if a factory is registered for `tag`.
    pub fn contains(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    /// Revives an object from a tagged state.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownTypeTag`] if no factory matches, or whatever the
    /// factory reports about the parameter set.
    pub fn revive(&self, state: &TaggedState) -> Result<Box<dyn SceneObject>, SceneError> {
        let factory = self
            .factories
            .get(state.type_tag.as_str())
            .ok_or_else(|| SceneError::unknown_tag(&state.type_tag))?;
        factory(&state.params)
    }
}
