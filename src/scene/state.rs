use std::collections::BTreeMap;

/// One named animation parameter value.
///
/// The host contract only fixes the shape: named scalar/string parameters, no nested mutable
/// objects. Which names a scene emits is scene-specific.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Param {
    /// Numeric parameter (position, scale, opacity, progress, ...).
    Num(f64),
    /// Textual parameter (revealed text, color, glyph, ...).
    Text(String),
}

/// A node in the visual-state tree handed to the rendering host.
///
/// Pure data: a name, a flat parameter map, and child nodes. Produced fresh on every evaluation
/// and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneState {
    /// Node name, unique enough for the host to bind styling to.
    pub name: String,
    /// Named parameters for this node.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, Param>,
    /// Child nodes in paint order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SceneState>,
}

impl SceneState {
    /// Start a new node with the given name.
    pub fn node(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Set a numeric parameter.
    pub fn num(mut self, key: &str, value: f64) -> Self {
        self.params.insert(key.to_owned(), Param::Num(value));
        self
    }

    /// Set a textual parameter.
    pub fn text(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.insert(key.to_owned(), Param::Text(value.into()));
        self
    }

    /// Set a boolean parameter, encoded as 0.0/1.0.
    pub fn flag(self, key: &str, value: bool) -> Self {
        self.num(key, if value { 1.0 } else { 0.0 })
    }

    /// Append one child node.
    pub fn child(mut self, child: SceneState) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child nodes.
    pub fn extend(mut self, children: impl IntoIterator<Item = SceneState>) -> Self {
        self.children.extend(children);
        self
    }

    /// Look up a numeric parameter on this node.
    pub fn get_num(&self, key: &str) -> Option<f64> {
        match self.params.get(key) {
            Some(Param::Num(v)) => Some(*v),
            _ => None,
        }
    }

    /// Look up a textual parameter on this node.
    pub fn get_text(&self, key: &str) -> Option<&str> {
        match self.params.get(key) {
            Some(Param::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Depth-first search for the first descendant (or self) with the given name.
    pub fn find(&self, name: &str) -> Option<&SceneState> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }
}
