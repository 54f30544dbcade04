use std::collections::BTreeMap;

use horologe_engine::canvas::Canvas;

/// A drawable surface: a fixed-size canvas plus the declarative attributes a
/// clock face is configured from.
///
/// Attribute names are stored without the HTML-style `data-` prefix, so
/// `data-numerals` and `numerals` address the same entry.
#[derive(Debug, Clone)]
pub struct Surface {
    id: Option<String>,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    title: Option<String>,
    canvas: Canvas,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            id: None,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            title: None,
            canvas: Canvas::new(width, height),
        }
    }

    // ── builder ───────────────────────────────────────────────────────────

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds every whitespace-separated class in `classes`.
    pub fn with_class(mut self, classes: &str) -> Self {
        self.add_classes(classes);
        self
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    // ── identity ──────────────────────────────────────────────────────────

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_classes(&mut self, classes: &str) {
        for class in classes.split_whitespace() {
            if !self.has_class(class) {
                self.classes.push(class.to_string());
            }
        }
    }

    /// Short label for log lines: the id, or `<anonymous>`.
    pub fn label(&self) -> &str {
        self.id.as_deref().unwrap_or("<anonymous>")
    }

    // ── attributes ────────────────────────────────────────────────────────

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(strip_data_prefix(name)).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attrs.insert(strip_data_prefix(name).to_string(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.remove(strip_data_prefix(name))
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    // ── presentation ──────────────────────────────────────────────────────

    /// Tooltip text; the renderer sets it to the painted timestamp.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    #[inline]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    #[inline]
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }
}

fn strip_data_prefix(name: &str) -> &str {
    name.strip_prefix("data-").unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_prefix_is_transparent() {
        let s = Surface::new(10, 10).with_attr("data-numerals", "roman");
        assert_eq!(s.attr("numerals"), Some("roman"));
        assert_eq!(s.attr("data-numerals"), Some("roman"));
        assert_eq!(s.attrs().collect::<Vec<_>>(), vec![("numerals", "roman")]);

        let mut s = s;
        assert_eq!(s.remove_attr("data-numerals").as_deref(), Some("roman"));
        assert_eq!(s.attr("numerals"), None);
    }

    #[test]
    fn class_list_dedupes() {
        let s = Surface::new(10, 10).with_class("clockClass  wide").with_class("wide");
        assert_eq!(s.classes(), ["clockClass", "wide"]);
        assert!(s.has_class("wide"));
        assert!(!s.has_class("clock"));
    }

    #[test]
    fn size_comes_from_canvas() {
        let s = Surface::new(300, 150);
        assert_eq!((s.width(), s.height()), (300, 150));
        assert_eq!(s.title(), None);
        assert_eq!(s.label(), "<anonymous>");
    }
}
