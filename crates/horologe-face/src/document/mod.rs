//! Surface documents.
//!
//! A [`SurfaceDocument`] is the queryable set of surfaces the scheduler
//! repaints. [`DocumentLoader`] builds one from `.hml` markup.

mod error;
mod loader;

pub use error::LoadError;
pub use loader::{DocumentLoader, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION};

use crate::surface::Surface;

/// Surfaces in document order.
#[derive(Debug, Clone, Default)]
pub struct SurfaceDocument {
    surfaces: Vec<Surface>,
}

impl SurfaceDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, surface: Surface) {
        self.surfaces.push(surface);
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn get(&self, id: &str) -> Option<&Surface> {
        self.surfaces.iter().find(|s| s.id() == Some(id))
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Surface> {
        self.surfaces.iter_mut().find(|s| s.id() == Some(id))
    }

    /// Surfaces carrying `class`, in document order.
    pub fn by_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Surface> + 'a {
        self.surfaces.iter().filter(move |s| s.has_class(class))
    }

    pub fn by_class_mut<'a>(&'a mut self, class: &'a str) -> impl Iterator<Item = &'a mut Surface> + 'a {
        self.surfaces.iter_mut().filter(move |s| s.has_class(class))
    }
}

impl FromIterator<Surface> for SurfaceDocument {
    fn from_iter<I: IntoIterator<Item = Surface>>(iter: I) -> Self {
        Self { surfaces: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_queries_keep_order() {
        let doc: SurfaceDocument = [
            Surface::new(10, 10).with_id("a").with_class("clockClass"),
            Surface::new(10, 10).with_id("b"),
            Surface::new(10, 10).with_id("c").with_class("wide clockClass"),
        ]
        .into_iter()
        .collect();

        let ids: Vec<_> = doc.by_class("clockClass").filter_map(Surface::id).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(doc.by_class("missing").count(), 0);
    }

    #[test]
    fn lookup_by_id() {
        let mut doc = SurfaceDocument::new();
        doc.push(Surface::new(10, 10).with_id("hall"));
        assert!(doc.get("hall").is_some());
        doc.get_mut("hall").unwrap().set_attr("color", "red");
        assert_eq!(doc.get("hall").unwrap().attr("color"), Some("red"));
        assert!(doc.get("lobby").is_none());
    }
}
