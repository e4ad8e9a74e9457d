use serde::{Deserialize, Serialize};

/// Source-map strategy understood by the engine's `devtool` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Devtool {
    #[serde(rename = "eval")]
    Eval,
    #[serde(rename = "eval-cheap-source-map")]
    EvalCheapSourceMap,
    #[serde(rename = "eval-cheap-module-source-map")]
    EvalCheapModuleSourceMap,
    #[serde(rename = "eval-source-map")]
    EvalSourceMap,
    #[serde(rename = "cheap-source-map")]
    CheapSourceMap,
    #[serde(rename = "cheap-module-source-map")]
    CheapModuleSourceMap,
    #[serde(rename = "source-map")]
    SourceMap,
}

impl Devtool {
    pub const ALL: [Devtool; 7] = [
        Devtool::Eval,
        Devtool::EvalCheapSourceMap,
        Devtool::EvalCheapModuleSourceMap,
        Devtool::EvalSourceMap,
        Devtool::CheapSourceMap,
        Devtool::CheapModuleSourceMap,
        Devtool::SourceMap,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Devtool::Eval => "eval",
            Devtool::EvalCheapSourceMap => "eval-cheap-source-map",
            Devtool::EvalCheapModuleSourceMap => "eval-cheap-module-source-map",
            Devtool::EvalSourceMap => "eval-source-map",
            Devtool::CheapSourceMap => "cheap-source-map",
            Devtool::CheapModuleSourceMap => "cheap-module-source-map",
            Devtool::SourceMap => "source-map",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == value)
    }
}

/// Source-map setting: a devtool mode, or `false` to disable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSourceMaps", into = "RawSourceMaps")]
pub enum SourceMaps {
    Disabled,
    Enabled(Devtool),
}

impl Default for SourceMaps {
    fn default() -> Self {
        SourceMaps::Enabled(Devtool::EvalCheapSourceMap)
    }
}

// Wire shape: `false` or a mode string. `true` is rejected by validation
// before deserialization and falls back to the default mode here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
enum RawSourceMaps {
    Flag(bool),
    Mode(Devtool),
}

impl From<RawSourceMaps> for SourceMaps {
    fn from(raw: RawSourceMaps) -> Self {
        match raw {
            RawSourceMaps::Flag(false) => SourceMaps::Disabled,
            RawSourceMaps::Flag(true) => SourceMaps::default(),
            RawSourceMaps::Mode(mode) => SourceMaps::Enabled(mode),
        }
    }
}

impl From<SourceMaps> for RawSourceMaps {
    fn from(value: SourceMaps) -> Self {
        match value {
            SourceMaps::Disabled => RawSourceMaps::Flag(false),
            SourceMaps::Enabled(mode) => RawSourceMaps::Mode(mode),
        }
    }
}

/// Per-bundle vendor chunk extraction.
///
/// The chunk test, size floor and name only exist while splitting is on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SplitChunks {
    Enabled {
        /// Module path pattern selecting vendor modules.
        test: String,
        /// Minimum chunk size in bytes.
        min_size: u64,
        /// Chunk name with `[name]` already substituted.
        name: String,
    },
    #[default]
    Disabled,
}

