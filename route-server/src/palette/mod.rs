//! Line display colors.
//!
//! Segments carry a display color for the presentation layer. Networks may
//! color their own lines; otherwise the color comes from a fixed
//! line-name lookup table, falling back to a neutral gray.

use std::collections::HashMap;

use crate::domain::Line;

/// Color used for lines with no configured color, and for unknown lines.
pub const DEFAULT_LINE_COLOR: &str = "#64748B";

/// A lookup table from line display name to color.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    colors: HashMap<String, String>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color for a line name, replacing any previous entry.
    pub fn add(&mut self, line_name: impl Into<String>, color: impl Into<String>) {
        self.colors.insert(line_name.into(), color.into());
    }

    /// Get the configured color for a line name.
    pub fn get(&self, line_name: &str) -> Option<&str> {
        self.colors.get(line_name).map(String::as_str)
    }

    /// Get the color for a line name, or the default gray.
    pub fn color_or_default(&self, line_name: &str) -> &str {
        self.get(line_name).unwrap_or(DEFAULT_LINE_COLOR)
    }

    /// Resolve the display color of a line.
    ///
    /// The line's own non-empty color wins, then the table entry for its
    /// name, then the default gray.
    pub fn resolve<'a>(&'a self, line: &'a Line) -> &'a str {
        match line.color.as_deref() {
            Some(color) if !color.is_empty() => color,
            _ => self.color_or_default(&line.name),
        }
    }
}

/// Builder for creating palettes.
#[derive(Debug, Default)]
pub struct PaletteBuilder {
    inner: Palette,
}

impl PaletteBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line color.
    pub fn add(mut self, line_name: &str, color: &str) -> Self {
        self.inner.add(line_name, color);
        self
    }

    /// Build the palette.
    pub fn build(self) -> Palette {
        self.inner
    }
}

/// The standard line palette used by the passenger app.
pub fn standard_palette() -> Palette {
    PaletteBuilder::new()
        .add("Yellow Line", "#EAB308")
        .add("Blue Line", "#3B82F6")
        .add("Red Line", "#EF4444")
        .add("Green Line", "#22C55E")
        .add("Purple Line", "#A855F7")
        .add("Orange Line", "#F97316")
        .add("Pink Line", "#EC4899")
        .add("Aqua Line", "#06B6D4")
        .build()
}
