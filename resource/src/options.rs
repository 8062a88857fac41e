//! Defines types for configuring graph materialization.

use indexmap::IndexMap;
use quadmesh_term::prefix::PrefixMap;
use quadmesh_term::{is_absolute_iri, is_valid_prefix};
use serde::Deserialize;

use crate::{GraphError, Result};

/// Which prefix map, if any, is used to compact IRIs into `prefix:local` names.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Prefixes {
    /// Use the prefix context registered in the factory of the dataset.
    #[default]
    Context,
    /// Keep full IRIs.
    Disabled,
    /// Use the given prefix map.
    Custom(PrefixMap),
}

/// Options of [`generate_graph`](crate::generate_graph).
///
/// All options have a default value,
/// and can be changed with the `with_*` methods:
/// ```
/// # use quadmesh_resource::options::GraphOptions;
/// let options = GraphOptions::new()
///     .with_blanks(true)
///     .with_compact(false);
/// assert!(options.blanks());
/// assert!(options.meshed());
/// ```
///
/// Options can also be read from JSON with [`GraphOptions::from_json`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphOptions {
    meshed: bool,
    blanks: bool,
    compact: bool,
    lists: bool,
    prefixes: Prefixes,
    strings: bool,
    types: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        GraphOptions {
            meshed: true,
            blanks: false,
            compact: true,
            lists: true,
            prefixes: Prefixes::Context,
            strings: true,
            types: true,
        }
    }
}

impl GraphOptions {
    /// Build the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether object references point to the referenced resource itself (default: `true`).
    ///
    /// Otherwise, they are detached `{"@id"}` stubs.
    pub fn meshed(&self) -> bool {
        self.meshed
    }

    /// Whether blank nodes appear as top-level entries of the graph (default: `false`).
    ///
    /// Blank nodes are materialized in any case,
    /// and remain reachable from the resources referencing them.
    pub fn blanks(&self) -> bool {
        self.blanks
    }

    /// Whether single-valued fields hold a bare value (default: `true`).
    ///
    /// Otherwise, every field is a sequence.
    pub fn compact(&self) -> bool {
        self.compact
    }

    /// Whether RDF collections are collapsed into lists (default: `true`).
    pub fn lists(&self) -> bool {
        self.lists
    }

    /// The prefix map used to compact IRIs (default: [`Prefixes::Context`]).
    pub fn prefixes(&self) -> &Prefixes {
        &self.prefixes
    }

    /// Whether `xsd:string` literals are rendered as bare strings (default: `true`).
    pub fn strings(&self) -> bool {
        self.strings
    }

    /// Whether `@type` values and literal datatypes are resource references (default: `true`).
    ///
    /// Otherwise, they are bare identifiers.
    pub fn types(&self) -> bool {
        self.types
    }

    /// Change the [`meshed`](Self::meshed) flag
    pub fn with_meshed(mut self, meshed: bool) -> Self {
        self.meshed = meshed;
        self
    }

    /// Change the [`blanks`](Self::blanks) flag
    pub fn with_blanks(mut self, blanks: bool) -> Self {
        self.blanks = blanks;
        self
    }

    /// Change the [`compact`](Self::compact) flag
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Change the [`lists`](Self::lists) flag
    pub fn with_lists(mut self, lists: bool) -> Self {
        self.lists = lists;
        self
    }

    /// Change the [`prefixes`](Self::prefixes)
    pub fn with_prefixes(mut self, prefixes: Prefixes) -> Self {
        self.prefixes = prefixes;
        self
    }

    /// Change the [`strings`](Self::strings) flag
    pub fn with_strings(mut self, strings: bool) -> Self {
        self.strings = strings;
        self
    }

    /// Change the [`types`](Self::types) flag
    pub fn with_types(mut self, types: bool) -> Self {
        self.types = types;
        self
    }

    /// Read options from a JSON object.
    ///
    /// Missing options keep their default value.
    /// `prefixes` is either a boolean or an object mapping prefixes to namespaces.
    /// Unknown option names and ill-typed values are rejected.
    pub fn from_json(txt: &str) -> Result<Self> {
        let raw: RawOptions = serde_json::from_str(txt)?;
        raw.try_into()
    }

    /// Read options from a parsed JSON value. See [`from_json`](Self::from_json).
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        let raw: RawOptions = serde_json::from_value(value)?;
        raw.try_into()
    }

    /// Check that these options can be used.
    pub fn validate(&self) -> Result<()> {
        if let Prefixes::Custom(map) = &self.prefixes {
            for (prefix, ns) in map.iter() {
                if !is_valid_prefix(prefix) {
                    return Err(GraphError::InvalidOptions(format!(
                        "invalid prefix '{prefix}'"
                    )));
                }
                if !is_absolute_iri(ns) {
                    return Err(GraphError::InvalidOptions(format!(
                        "prefix '{prefix}' maps to '{ns}', which is not an absolute IRI"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// The JSON form of [`GraphOptions`].
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOptions {
    meshed: Option<bool>,
    blanks: Option<bool>,
    compact: Option<bool>,
    lists: Option<bool>,
    prefixes: Option<RawPrefixes>,
    strings: Option<bool>,
    types: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPrefixes {
    Flag(bool),
    Map(IndexMap<String, String>),
}

impl TryFrom<RawOptions> for GraphOptions {
    type Error = GraphError;

    fn try_from(raw: RawOptions) -> Result<Self> {
        let default = GraphOptions::default();
        let prefixes = match raw.prefixes {
            None | Some(RawPrefixes::Flag(true)) => Prefixes::Context,
            Some(RawPrefixes::Flag(false)) => Prefixes::Disabled,
            Some(RawPrefixes::Map(map)) => {
                let mut pm = PrefixMap::new();
                for (prefix, ns) in &map {
                    pm.insert(prefix, ns)?;
                }
                Prefixes::Custom(pm)
            }
        };
        let options = GraphOptions {
            meshed: raw.meshed.unwrap_or(default.meshed),
            blanks: raw.blanks.unwrap_or(default.blanks),
            compact: raw.compact.unwrap_or(default.compact),
            lists: raw.lists.unwrap_or(default.lists),
            prefixes,
            strings: raw.strings.unwrap_or(default.strings),
            types: raw.types.unwrap_or(default.types),
        };
        options.validate()?;
        Ok(options)
    }
}
