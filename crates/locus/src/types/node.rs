use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Reserved key holding a locale's formatting rules inside its data.
pub const FORMATS_KEY: &str = "_formats";

/// A single entry of a locale's translation tree.
///
/// Whether a `Keyed` node acts as a plural map or as a variant map is decided
/// at lookup time: it is a plural map when the caller passes a `count`
/// parameter, a variant map otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationNode {
    /// Plain translation text.
    Literal(String),
    /// Named children: nested keys, plural forms, or variants.
    Keyed(IndexMap<String, TranslationNode>),
    /// An ordered list of texts, rendered as a serialized literal.
    List(Vec<String>),
}

impl TranslationNode {
    /// Convert a hierarchical value into a node.
    ///
    /// Numbers and booleans become literals of their canonical text. Returns
    /// `None` for `null`, which has no translation meaning.
    pub fn from_value(value: Value) -> Option<TranslationNode> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(TranslationNode::Literal(b.to_string())),
            Value::Number(n) => Some(TranslationNode::Literal(n.to_string())),
            Value::String(s) => Some(TranslationNode::Literal(s)),
            Value::Array(items) => Some(TranslationNode::List(
                items.into_iter().map(value_text).collect(),
            )),
            Value::Object(map) => Some(TranslationNode::Keyed(keyed_from_map(map))),
        }
    }

    /// Get the text of a literal node.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            TranslationNode::Literal(s) => Some(s),
            _ => None,
        }
    }

    /// Get the children of a keyed node.
    pub fn as_keyed(&self) -> Option<&IndexMap<String, TranslationNode>> {
        match self {
            TranslationNode::Keyed(children) => Some(children),
            _ => None,
        }
    }

    /// Get the literal text stored under `key` of a keyed node.
    ///
    /// Non-literal children are treated as absent.
    pub fn literal_child(&self, key: &str) -> Option<&str> {
        self.as_keyed()?.get(key)?.as_literal()
    }

    /// Render a list node as a JSON array literal.
    pub fn serialize_list(items: &[String]) -> String {
        Value::Array(items.iter().cloned().map(Value::String).collect()).to_string()
    }
}

/// The translations of one locale, addressed by dotted keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationTree {
    root: IndexMap<String, TranslationNode>,
}

impl TranslationTree {
    /// Build a tree from a JSON object, splitting off its `_formats` block.
    ///
    /// Returns the tree and the removed formats value, if any.
    pub fn from_map(mut map: Map<String, Value>) -> (TranslationTree, Option<Value>) {
        let formats = map.shift_remove(FORMATS_KEY);
        let tree = TranslationTree {
            root: keyed_from_map(map),
        };
        (tree, formats)
    }

    /// Look up a dotted key.
    ///
    /// Every segment but the last must name a keyed node. A missing segment
    /// or a non-keyed intermediate yields `None`.
    pub fn resolve(&self, key: &str) -> Option<&TranslationNode> {
        let mut segments = key_segments(key);
        let first = segments.next()?;
        let mut node = self.root.get(first)?;
        for segment in segments {
            node = node.as_keyed()?.get(segment)?;
        }
        Some(node)
    }

    /// Insert `node` at the given path, creating keyed parents as needed.
    ///
    /// A non-keyed node sitting on the path is replaced by a keyed one.
    pub fn insert_path(&mut self, path: &[&str], node: TranslationNode) {
        let Some((last, parents)) = path.split_last() else {
            return;
        };
        let mut children = &mut self.root;
        for segment in parents {
            let entry = children
                .entry((*segment).to_string())
                .or_insert_with(|| TranslationNode::Keyed(IndexMap::new()));
            if !matches!(entry, TranslationNode::Keyed(_)) {
                *entry = TranslationNode::Keyed(IndexMap::new());
            }
            let TranslationNode::Keyed(next) = entry else {
                return;
            };
            children = next;
        }
        children.insert((*last).to_string(), node);
    }

    /// Dotted keys of every non-keyed node, in document order.
    pub fn leaf_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_leaf_keys(&self.root, "", &mut keys);
        keys
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Whether the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

/// Split a dotted key into segments, dropping the empty tail of a trailing `.`.
fn key_segments(key: &str) -> impl Iterator<Item = &str> {
    let key = key.strip_suffix('.').unwrap_or(key);
    let empty = key.is_empty();
    key.split('.').filter(move |_| !empty)
}

fn keyed_from_map(map: Map<String, Value>) -> IndexMap<String, TranslationNode> {
    map.into_iter()
        .filter_map(|(key, value)| TranslationNode::from_value(value).map(|node| (key, node)))
        .collect()
}

fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn collect_leaf_keys(children: &IndexMap<String, TranslationNode>, prefix: &str, out: &mut Vec<String>) {
    for (key, node) in children {
        let full = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match node {
            TranslationNode::Keyed(nested) => collect_leaf_keys(nested, &full, out),
            TranslationNode::Literal(_) | TranslationNode::List(_) => out.push(full),
        }
    }
}
