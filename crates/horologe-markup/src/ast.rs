// ── Value ─────────────────────────────────────────────────────────────────

/// A literal value in a property.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Quoted string: `"red, blue"`
    Str(String),
    /// Floating-point literal: `200` or `0.5`
    Number(f32),
    /// Color literal, straight-alpha RGBA bytes.
    Color([u8; 4]),
    /// Unquoted identifier: keywords such as `analog`, `roman`, `clockClass`
    Ident(String),
}

impl Value {
    /// Renders the value the way an HTML attribute would carry it.
    ///
    /// Integral numbers drop the fraction (`200`, not `200.0`); colors come
    /// back as `#rrggbbaa`.
    pub fn to_attr_string(&self) -> String {
        match self {
            Value::Str(s) | Value::Ident(s) => s.clone(),
            Value::Number(n) if n.fract() == 0.0 && n.abs() < 1e9 => format!("{}", *n as i64),
            Value::Number(n) => format!("{}", n),
            Value::Color([r, g, b, a]) => format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a),
        }
    }
}

// ── Prop ──────────────────────────────────────────────────────────────────

/// A single `key: value` property inside an element block.
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub key: String,
    pub value: Value,
}

// ── Node ──────────────────────────────────────────────────────────────────

/// An element node in the tree.
///
/// ```hml
/// Canvas "lobby" {
///     class: clockClass
///     width: 200
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Element name or component alias: `"Page"`, `"Canvas"`, `"NightClock"`.
    pub element: String,
    /// Optional inline string content (the surface id for `Canvas`).
    pub content: Option<String>,
    /// Properties inside the block (`key: value` lines).
    pub props: Vec<Prop>,
    /// Nested element nodes inside the block.
    pub children: Vec<Node>,
    /// 1-based line of the element name.
    pub line: usize,
}

impl Node {
    /// Look up a property value by key. The last occurrence wins.
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.iter().rev().find(|p| p.key == key).map(|p| &p.value)
    }

    /// Get a property as `f32` if it is a `Number`.
    pub fn prop_f32(&self, key: &str) -> Option<f32> {
        match self.prop(key)? {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Get a property as `&str` if it is a `Str` or `Ident`.
    pub fn prop_str(&self, key: &str) -> Option<&str> {
        match self.prop(key)? {
            Value::Str(s) | Value::Ident(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Depth-first walk over this node and all of its descendants.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

// ── Import ────────────────────────────────────────────────────────────────

/// `import "path/to/file.hml" as Alias`
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub path: String,
    pub alias: String,
}

// ── HmlDocument ───────────────────────────────────────────────────────────

/// The top-level parse result for a `.hml` source file.
#[derive(Debug, Clone, PartialEq)]
pub struct HmlDocument {
    pub imports: Vec<Import>,
    pub root: Node,
}
