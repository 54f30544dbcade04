use std::collections::HashMap;
use std::fs;
use std::path::Path;

use horologe_markup::{parse_str, HmlDocument, Node, Value};

use super::{LoadError, SurfaceDocument};
use crate::surface::Surface;

/// Default surface size when `width` / `height` are absent (the HTML canvas default).
pub const DEFAULT_WIDTH: u32 = 300;
pub const DEFAULT_HEIGHT: u32 = 150;

/// Upper bound on either surface dimension.
pub const MAX_DIMENSION: u32 = 16_384;

/// Element name that declares a surface.
const SURFACE_ELEMENT: &str = "Canvas";

/// Properties consumed by the loader itself rather than stored as attributes.
const RESERVED_PROPS: [&str; 4] = ["id", "class", "width", "height"];

// ── DocumentLoader ────────────────────────────────────────────────────────

/// Parses `.hml` documents into [`SurfaceDocument`]s, resolving preset imports.
#[derive(Debug, Default)]
pub struct DocumentLoader {
    registry: HashMap<String, HmlDocument>,
}

impl DocumentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pre-parsed preset under an alias so other documents can
    /// reference it with `import "..." as Alias`.
    pub fn register(&mut self, alias: impl Into<String>, doc: HmlDocument) {
        self.registry.insert(alias.into(), doc);
    }

    /// Parse and immediately register a preset source under `alias`.
    pub fn parse_and_register(&mut self, alias: impl Into<String>, src: &str) -> Result<(), LoadError> {
        let doc = parse_str(src)?;
        self.register(alias, doc);
        Ok(())
    }

    pub fn is_registered(&self, alias: &str) -> bool {
        self.registry.contains_key(alias)
    }

    /// Parse `src` and build its surfaces. Imported aliases must already be registered.
    pub fn load_str(&self, src: &str) -> Result<SurfaceDocument, LoadError> {
        let doc = parse_str(src)?;
        self.build(&doc)
    }

    /// Read a document from disk. Imports that are not registered yet are read
    /// relative to the document's directory and registered under their alias.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<SurfaceDocument, LoadError> {
        let path = path.as_ref();
        let doc = parse_str(&read(path)?)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));

        for import in &doc.imports {
            if self.is_registered(&import.alias) {
                continue;
            }
            let preset_path = base.join(&import.path);
            log::debug!("loading preset {} from {}", import.alias, preset_path.display());
            let preset = parse_str(&read(&preset_path)?)?;
            self.register(import.alias.clone(), preset);
        }

        self.build(&doc)
    }

    /// Build every surface declared in `doc`, in document order.
    pub fn build(&self, doc: &HmlDocument) -> Result<SurfaceDocument, LoadError> {
        let mut out = SurfaceDocument::new();
        self.build_node(doc, &doc.root, &mut out)?;
        log::debug!("built {} surface(s)", out.len());
        Ok(out)
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn build_node(&self, doc: &HmlDocument, node: &Node, out: &mut SurfaceDocument) -> Result<(), LoadError> {
        match node.element.as_str() {
            SURFACE_ELEMENT => {
                out.push(surface_from_node(node)?);
                return Ok(());
            }
            alias => {
                if let Some(preset) = self.registry.get(alias) {
                    let merged = expand_preset(alias, preset, node)?;
                    out.push(surface_from_node(&merged)?);
                } else if doc.imports.iter().any(|i| i.alias == alias) {
                    return Err(LoadError::UnknownAlias { alias: alias.to_string(), line: node.line });
                }
            }
        }

        // Any other element is a plain container.
        for child in &node.children {
            self.build_node(doc, child, out)?;
        }
        Ok(())
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|e| LoadError::Io { path: path.to_path_buf(), message: e.to_string() })
}

/// The preset's first `Canvas`, with the alias node's own properties layered on top.
fn expand_preset(alias: &str, preset: &HmlDocument, node: &Node) -> Result<Node, LoadError> {
    let mut found = None;
    preset.root.walk(&mut |n| {
        if found.is_none() && n.element == SURFACE_ELEMENT {
            found = Some(n);
        }
    });
    let base = found.ok_or_else(|| LoadError::NotASurface { alias: alias.to_string() })?;

    let mut merged = base.clone();
    merged.line = node.line;
    if node.content.is_some() {
        merged.content = node.content.clone();
    }
    // Later properties win on lookup.
    merged.props.extend(node.props.iter().cloned());
    Ok(merged)
}

fn surface_from_node(node: &Node) -> Result<Surface, LoadError> {
    let width = dimension(node, "width", DEFAULT_WIDTH)?;
    let height = dimension(node, "height", DEFAULT_HEIGHT)?;
    let mut surface = Surface::new(width, height);

    if let Some(id) = node.content.as_deref().or_else(|| node.prop_str("id")) {
        surface = surface.with_id(id);
    }
    if let Some(class) = node.prop("class") {
        surface.add_classes(&class.to_attr_string());
    }

    for prop in &node.props {
        if RESERVED_PROPS.contains(&prop.key.as_str()) {
            continue;
        }
        surface.set_attr(&prop.key, prop.value.to_attr_string());
    }

    Ok(surface)
}

fn dimension(node: &Node, prop: &'static str, default: u32) -> Result<u32, LoadError> {
    let Some(value) = node.prop(prop) else {
        return Ok(default);
    };

    let parsed = match value {
        Value::Number(n) => Some(*n),
        Value::Str(s) => s.trim().parse::<f32>().ok(),
        _ => None,
    };

    match parsed {
        Some(n) if n.is_finite() && n >= 1.0 && n <= MAX_DIMENSION as f32 => Ok(n.round() as u32),
        _ => Err(LoadError::InvalidSize { prop, value: value.to_attr_string(), line: node.line }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(src: &str) -> SurfaceDocument {
        DocumentLoader::new().load_str(src).unwrap()
    }

    // ── surfaces ──────────────────────────────────────────────────────────

    #[test]
    fn every_canvas_becomes_a_surface() {
        let doc = load(
            r#"Page {
                Canvas "a" { class: clockClass }
                Section { Canvas "b" { } }
                Label { }
            }"#,
        );
        let ids: Vec<_> = doc.surfaces().iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![Some("a"), Some("b")]);
    }

    #[test]
    fn default_size_is_300_by_150() {
        let doc = load("Canvas { }");
        let s = &doc.surfaces()[0];
        assert_eq!((s.width(), s.height()), (300, 150));
    }

    #[test]
    fn props_become_attributes() {
        let doc = load(
            r#"Canvas "x" {
                class: "clockClass wide"
                width: 200
                height: 100
                data-type: digital
                background: "red, blue"
                color: #ff0000
            }"#,
        );
        let s = &doc.surfaces()[0];
        assert_eq!((s.width(), s.height()), (200, 100));
        assert_eq!(s.classes(), ["clockClass", "wide"]);
        assert_eq!(s.attr("type"), Some("digital"));
        assert_eq!(s.attr("background"), Some("red, blue"));
        assert_eq!(s.attr("color"), Some("#ff0000ff"));
        assert_eq!(s.attr("width"), None);
        assert_eq!(s.attr("class"), None);
    }

    #[test]
    fn id_prop_is_used_without_content() {
        let doc = load(r#"Canvas { id: "hall" }"#);
        assert_eq!(doc.surfaces()[0].id(), Some("hall"));
    }

    // ── sizes ─────────────────────────────────────────────────────────────

    #[test]
    fn invalid_sizes_are_rejected() {
        let loader = DocumentLoader::new();
        for src in ["Canvas { width: 0 }", "Canvas { height: -4 }", "Canvas { width: wide }", "Canvas { width: 99999 }"] {
            let err = loader.load_str(src).unwrap_err();
            assert!(matches!(err, LoadError::InvalidSize { .. }), "{src}: {err:?}");
        }
    }

    #[test]
    fn quoted_sizes_are_accepted() {
        let doc = load(r#"Canvas { width: "120" height: 80.4 }"#);
        let s = &doc.surfaces()[0];
        assert_eq!((s.width(), s.height()), (120, 80));
    }

    // ── presets ───────────────────────────────────────────────────────────

    #[test]
    fn alias_expands_with_overrides() {
        let mut loader = DocumentLoader::new();
        loader
            .parse_and_register(
                "NightClock",
                r##"Canvas "night" { class: clockClass  width: 100  height: 100  background: "#000"  color: white }"##,
            )
            .unwrap();

        let doc = loader
            .load_str(
                r#"import "night.hml" as NightClock
                Page { NightClock { width: 120  color: yellow } }"#,
            )
            .unwrap();

        let s = &doc.surfaces()[0];
        assert_eq!(s.id(), Some("night"));
        assert_eq!((s.width(), s.height()), (120, 100));
        assert_eq!(s.attr("color"), Some("yellow"));
        assert_eq!(s.attr("background"), Some("#000"));
        assert!(s.has_class("clockClass"));
    }

    #[test]
    fn unregistered_import_is_an_error() {
        let err = DocumentLoader::new()
            .load_str("import \"x.hml\" as Missing\nPage {\n  Missing { }\n}")
            .unwrap_err();
        assert_eq!(err, LoadError::UnknownAlias { alias: "Missing".into(), line: 3 });
    }

    #[test]
    fn preset_canvas_may_sit_below_the_root() {
        let mut loader = DocumentLoader::new();
        loader
            .parse_and_register(
                "Framed",
                r#"Page { Row { Canvas "inner" { width: 80  type: digital } } Canvas "second" { } }"#,
            )
            .unwrap();

        let doc = loader.load_str(r#"import "framed.hml" as Framed
            Page { Framed "mine" { class: clockClass } }"#).unwrap();

        assert_eq!(doc.len(), 1);
        let s = &doc.surfaces()[0];
        assert_eq!(s.id(), Some("mine"));
        assert_eq!(s.width(), 80);
        assert_eq!(s.attr("type"), Some("digital"));
        assert!(s.has_class("clockClass"));
    }

    #[test]
    fn preset_without_canvas_is_an_error() {
        let mut loader = DocumentLoader::new();
        loader.parse_and_register("Empty", "Page { }").unwrap();
        let err = loader.load_str("Page { Empty { } }").unwrap_err();
        assert_eq!(err, LoadError::NotASurface { alias: "Empty".into() });
    }

    #[test]
    fn parse_errors_pass_through() {
        let err = DocumentLoader::new().load_str("Page {").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
