//! Skin files and decoration resolution
//!
//! A skin maps style ids to ordered lists of decorations. Each decoration
//! names the component states it needs and carries one border fragment.
//! Resolving a style for a set of active states merges every applicable
//! fragment, least specific first, into one effective border.

use std::collections::BTreeMap;
use std::path::Path;

use drape_border::{Border, Merge};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::state::StateSet;

/// On-disk layout of a skin file
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(bound(deserialize = "B: Deserialize<'de>", serialize = "B: Serialize"))]
pub struct SkinFile<B> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub styles: BTreeMap<String, StyleDef<B>>,
}

/// One named style
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(bound(deserialize = "B: Deserialize<'de>", serialize = "B: Serialize"))]
pub struct StyleDef<B> {
    /// Parent style whose decorations apply underneath this one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decorations: Vec<DecorationDef<B>>,
}

/// A border fragment guarded by required states
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(bound(deserialize = "B: Deserialize<'de>", serialize = "B: Serialize"))]
pub struct DecorationDef<B> {
    /// All of these must be active; empty means always
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<String>,

    /// Drop everything resolved so far before applying this fragment
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub overwrite: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<B>,
}

/// Applicable decoration together with its place in the resolution order
#[derive(Debug)]
pub struct Applied<'a, B> {
    /// Style that declared the decoration
    pub style: &'a str,
    pub decoration: &'a DecorationDef<B>,
    /// Ancestor depth counted from the inheritance root (root = 0)
    depth: usize,
    index: usize,
}

/// A validated skin: every `extends` resolves and no inheritance cycles exist
#[derive(Clone, Debug)]
pub struct Skin<B> {
    name: Option<String>,
    styles: FxHashMap<String, StyleDef<B>>,
}

impl<B> Skin<B>
where
    B: Border + Merge + Clone + DeserializeOwned + Serialize,
{
    /// Parse a skin from TOML source
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let file: SkinFile<B> = toml::from_str(src)?;
        Self::from_file(file)
    }

    /// Read and parse a skin file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading skin");
        Self::from_toml_str(&src)
    }

    /// Validate a parsed skin file
    pub fn from_file(file: SkinFile<B>) -> Result<Self> {
        let skin = Self {
            name: file.name,
            styles: file.styles.into_iter().collect(),
        };

        for (id, style) in &skin.styles {
            if let Some(parent) = &style.extends {
                if !skin.styles.contains_key(parent) {
                    return Err(ThemeError::UnknownParent {
                        style: id.clone(),
                        parent: parent.clone(),
                    });
                }
            }
            skin.chain(id)?;

            for border in style.decorations.iter().filter_map(|d| d.border.as_ref()) {
                let opacity = border.opacity();
                if !(0.0..=1.0).contains(&opacity) {
                    tracing::warn!(style = %id, opacity, "border opacity outside 0..=1");
                }
            }
        }

        tracing::debug!(
            name = skin.name.as_deref().unwrap_or("<unnamed>"),
            styles = skin.styles.len(),
            "skin loaded"
        );
        Ok(skin)
    }

    /// Convert back to the on-disk layout
    pub fn to_file(&self) -> SkinFile<B> {
        SkinFile {
            name: self.name.clone(),
            styles: self
                .styles
                .iter()
                .map(|(id, style)| (id.clone(), style.clone()))
                .collect(),
        }
    }

    /// Serialize to TOML, styles in id order
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(&self.to_file())?)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn contains_style(&self, id: &str) -> bool {
        self.styles.contains_key(id)
    }

    /// Style ids, sorted
    pub fn style_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.styles.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Inheritance chain of `id`, root first
    fn chain<'a>(&'a self, id: &str) -> Result<Vec<(&'a str, &'a StyleDef<B>)>> {
        let mut chain = Vec::new();
        let mut seen = FxHashSet::default();
        let mut current = Some(id);

        while let Some(style_id) = current {
            if !seen.insert(style_id) {
                return Err(ThemeError::InheritanceCycle(style_id.to_string()));
            }
            let (key, style) = self
                .styles
                .get_key_value(style_id)
                .ok_or_else(|| ThemeError::UnknownStyle(style_id.to_string()))?;
            chain.push((key.as_str(), style));
            current = style.extends.as_deref();
        }

        chain.reverse();
        Ok(chain)
    }

    /// Decorations of `style_id` that apply to `states`, in merge order
    ///
    /// Fewer required states come first. Between decorations requiring the
    /// same number of states, ancestors come before descendants and then
    /// declaration order holds.
    pub fn applicable(&self, style_id: &str, states: &StateSet) -> Result<Vec<Applied<'_, B>>> {
        let mut applied = Vec::new();
        for (depth, (style, def)) in self.chain(style_id)?.into_iter().enumerate() {
            for (index, decoration) in def.decorations.iter().enumerate() {
                if states.contains_all(&decoration.states) {
                    applied.push(Applied {
                        style,
                        decoration,
                        depth,
                        index,
                    });
                }
            }
        }
        applied.sort_by_key(|a| (a.decoration.states.len(), a.depth, a.index));
        Ok(applied)
    }

    /// Effective border of `style_id` under `states`
    ///
    /// `None` when no applicable decoration carries a border, or when the
    /// last overwriting decoration has none.
    pub fn resolve(&self, style_id: &str, states: &StateSet) -> Result<Option<B>> {
        let applied = self.applicable(style_id, states)?;
        let mut resolved: Option<B> = None;

        for entry in &applied {
            if entry.decoration.overwrite {
                resolved = None;
            }
            if let Some(fragment) = &entry.decoration.border {
                match resolved.as_mut() {
                    Some(border) => {
                        border.merge(fragment);
                    }
                    None => resolved = Some(fragment.clone()),
                }
            }
        }

        tracing::debug!(
            style = style_id,
            states = ?states,
            fragments = applied.len(),
            "resolved border"
        );
        Ok(resolved)
    }
}
