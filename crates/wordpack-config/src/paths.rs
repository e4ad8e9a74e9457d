//! Source/destination directory layout per asset category.

use serde::{Deserialize, Serialize};

/// Which side of the build a directory belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Src,
    Dist,
}

/// Asset category with its own directory pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Root,
    Scripts,
    Styles,
    Images,
    Fonts,
}

/// A directory pair, or one name shared by both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathEntry {
    Shared(String),
    Split { src: String, dist: String },
}

impl PathEntry {
    pub fn split(src: impl Into<String>, dist: impl Into<String>) -> Self {
        PathEntry::Split {
            src: src.into(),
            dist: dist.into(),
        }
    }

    pub fn get(&self, side: Side) -> &str {
        match (self, side) {
            (PathEntry::Shared(dir), _) => dir,
            (PathEntry::Split { src, .. }, Side::Src) => src,
            (PathEntry::Split { dist, .. }, Side::Dist) => dist,
        }
    }
}

impl From<&str> for PathEntry {
    fn from(value: &str) -> Self {
        PathEntry::Shared(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathConfig {
    #[serde(default = "default_root")]
    pub root: PathEntry,

    #[serde(default = "default_scripts")]
    pub scripts: PathEntry,

    #[serde(default = "default_styles")]
    pub styles: PathEntry,

    #[serde(default = "default_images")]
    pub images: PathEntry,

    #[serde(default = "default_fonts")]
    pub fonts: PathEntry,
}

impl PathConfig {
    pub fn entry(&self, kind: AssetKind) -> &PathEntry {
        match kind {
            AssetKind::Root => &self.root,
            AssetKind::Scripts => &self.scripts,
            AssetKind::Styles => &self.styles,
            AssetKind::Images => &self.images,
            AssetKind::Fonts => &self.fonts,
        }
    }

    /// Directory name of `kind` on `side`, relative to that side's root
    /// (or to the base path for [`AssetKind::Root`]).
    pub fn dir(&self, side: Side, kind: AssetKind) -> &str {
        self.entry(kind).get(side)
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            scripts: default_scripts(),
            styles: default_styles(),
            images: default_images(),
            fonts: default_fonts(),
        }
    }
}

fn default_root() -> PathEntry {
    PathEntry::split("assets", "dist")
}

fn default_scripts() -> PathEntry {
    "scripts".into()
}

fn default_styles() -> PathEntry {
    "styles".into()
}

fn default_images() -> PathEntry {
    "images".into()
}

fn default_fonts() -> PathEntry {
    "fonts".into()
}
