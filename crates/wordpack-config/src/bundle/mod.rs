//! Bundle declarations: named groups of script/style sources.

mod helpers;
mod types;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use types::{Devtool, SourceMaps, SplitChunks};

pub use helpers::{DEFAULT_CHUNK_MIN_SIZE, DEFAULT_CHUNK_NAME, DEFAULT_CHUNK_TEST};
use helpers::{
    SCRIPT_EXTENSIONS, STYLE_EXTENSIONS, default_chunk_min_size, entry_key, has_extension,
    substitute_name,
};

/// Entry map: entry point name -> ordered source files.
pub type EntryMap = IndexMap<String, Vec<String>>;

/// One named group of source files producing its own build graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBundle", into = "RawBundle")]
pub struct Bundle {
    pub name: String,

    /// Source files in declaration order.
    pub files: Vec<String>,

    pub split_chunks: SplitChunks,

    /// Explicit progress color (`#rgb` / `#rrggbb`).
    pub color: Option<String>,

    /// Partial build graph merged last for this bundle only.
    pub overrides: Map<String, Value>,

    /// Emit one entry point per file basename instead of one per bundle.
    pub group_entries: bool,

    /// Explicit entry map, set on the synthetic single-mode bundle.
    pub entry: Option<EntryMap>,
}

impl Bundle {
    pub fn new<I, S>(name: impl Into<String>, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            files: files.into_iter().map(Into::into).collect(),
            split_chunks: SplitChunks::Disabled,
            color: None,
            overrides: Map::new(),
            group_entries: false,
            entry: None,
        }
    }

    /// Enable vendor chunk splitting with the default test and name template.
    pub fn with_chunks(mut self, min_size: u64) -> Self {
        self.split_chunks = SplitChunks::Enabled {
            test: DEFAULT_CHUNK_TEST.to_string(),
            min_size,
            name: substitute_name(DEFAULT_CHUNK_NAME, &self.name),
        };
        self
    }

    pub fn with_split_chunks(mut self, split_chunks: SplitChunks) -> Self {
        self.split_chunks = split_chunks;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_overrides(mut self, overrides: Map<String, Value>) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn grouped(mut self) -> Self {
        self.group_entries = true;
        self
    }

    pub fn has_scripts(&self) -> bool {
        self.files.iter().any(|f| has_extension(f, SCRIPT_EXTENSIONS))
    }

    pub fn has_styles(&self) -> bool {
        self.files.iter().any(|f| has_extension(f, STYLE_EXTENSIONS))
    }

    /// Entry points declared by this bundle.
    ///
    /// An explicit map wins; otherwise files are either kept together under
    /// the bundle name or grouped by basename, preserving first-seen order.
    pub fn entry(&self) -> EntryMap {
        if let Some(entry) = &self.entry {
            return entry.clone();
        }

        let mut map = EntryMap::new();
        if self.group_entries {
            for file in &self.files {
                map.entry(entry_key(file)).or_default().push(file.clone());
            }
        } else {
            map.insert(self.name.clone(), self.files.clone());
        }
        map
    }

    /// Resolved vendor chunk name, if splitting is enabled.
    pub fn chunk_name(&self) -> Option<&str> {
        match &self.split_chunks {
            SplitChunks::Enabled { name, .. } => Some(name),
            SplitChunks::Disabled => None,
        }
    }
}

// Wire representation. Flat optional fields are folded into `SplitChunks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBundle {
    name: String,

    #[serde(default)]
    files: Vec<String>,

    #[serde(default)]
    split_chunks: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    chunk_test: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    chunk_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    chunk_min_size: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<String>,

    #[serde(default, rename = "override")]
    overrides: Map<String, Value>,

    #[serde(default)]
    group_entries: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    entry: Option<EntryMap>,
}

impl From<RawBundle> for Bundle {
    fn from(raw: RawBundle) -> Self {
        let split_chunks = if raw.split_chunks {
            SplitChunks::Enabled {
                test: raw
                    .chunk_test
                    .unwrap_or_else(|| DEFAULT_CHUNK_TEST.to_string()),
                min_size: raw.chunk_min_size.unwrap_or_else(default_chunk_min_size),
                name: substitute_name(
                    raw.chunk_name.as_deref().unwrap_or(DEFAULT_CHUNK_NAME),
                    &raw.name,
                ),
            }
        } else {
            SplitChunks::Disabled
        };

        Bundle {
            name: raw.name,
            files: raw.files,
            split_chunks,
            color: raw.color,
            overrides: raw.overrides,
            group_entries: raw.group_entries,
            entry: raw.entry,
        }
    }
}

impl From<Bundle> for RawBundle {
    fn from(bundle: Bundle) -> Self {
        let (split_chunks, chunk_test, chunk_name, chunk_min_size) = match bundle.split_chunks {
            SplitChunks::Enabled {
                test,
                min_size,
                name,
            } => (true, Some(test), Some(name), Some(min_size)),
            SplitChunks::Disabled => (false, None, None, None),
        };

        RawBundle {
            name: bundle.name,
            files: bundle.files,
            split_chunks,
            chunk_test,
            chunk_name,
            chunk_min_size,
            color: bundle.color,
            overrides: bundle.overrides,
            group_entries: bundle.group_entries,
            entry: bundle.entry,
        }
    }
}
