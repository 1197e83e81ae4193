//! Glyph configuration: what each cell and actor looks like on screen.
//!
//! Loaded from a JSON file such as:
//!
//! ```json
//! {"player": "😋", "ghost": "👻", "wall": "🧱", "dot": "🔸", "pill": "💊",
//!  "death": "💀", "space": "  ", "use_emoji": true}
//! ```
//!
//! Missing keys default to empty strings (and `use_emoji: false`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::CellKind;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read glyph config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed glyph config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    pub player: String,
    pub ghost: String,
    pub wall: String,
    pub dot: String,
    pub pill: String,
    pub death: String,
    pub space: String,
    /// Glyphs are two terminal columns wide.
    pub use_emoji: bool,
}

impl GlyphConfig {
    /// Plain single-column characters; the maze looks like its source file.
    pub fn ascii() -> Self {
        Self {
            player: "P".into(),
            ghost: "G".into(),
            wall: "#".into(),
            dot: ".".into(),
            pill: "X".into(),
            death: "*".into(),
            space: " ".into(),
            use_emoji: false,
        }
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Load the config, falling back to blank glyphs on any error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("{e}; using blank glyphs");
                Self::default()
            }
        }
    }

    /// Terminal columns per grid column.
    pub fn cell_width(&self) -> u16 {
        if self.use_emoji {
            2
        } else {
            1
        }
    }

    pub fn for_cell(&self, kind: CellKind) -> &str {
        match kind {
            CellKind::Wall => &self.wall,
            CellKind::Dot => &self.dot,
            CellKind::Pill => &self.pill,
            CellKind::Empty => &self.space,
        }
    }

    /// Lives as shown in the status line: a row of player glyphs in emoji
    /// mode, a number otherwise.
    pub fn lives_text(&self, lives: u32) -> String {
        if self.use_emoji {
            self.player.repeat(lives as usize)
        } else {
            lives.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let cfg = GlyphConfig::from_json(
            r##"{"player":"P","ghost":"G","wall":"#","dot":".","pill":"X",
                "death":"*","space":" ","use_emoji":false}"##,
        )
        .unwrap();
        assert_eq!(cfg, GlyphConfig::ascii());
    }

    #[test]
    fn missing_keys_default_to_blank() {
        let cfg = GlyphConfig::from_json(r#"{"player":"@","use_emoji":true}"#).unwrap();
        assert_eq!(cfg.player, "@");
        assert_eq!(cfg.ghost, "");
        assert!(cfg.use_emoji);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            GlyphConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let path = "/definitely/not/here/config.json";
        assert!(matches!(GlyphConfig::load(path), Err(ConfigError::Io { .. })));
        assert_eq!(GlyphConfig::load_or_default(path), GlyphConfig::default());
    }

    #[test]
    fn cell_width_follows_emoji_flag() {
        let mut cfg = GlyphConfig::ascii();
        assert_eq!(cfg.cell_width(), 1);
        cfg.use_emoji = true;
        assert_eq!(cfg.cell_width(), 2);
    }

    #[test]
    fn lives_text_modes() {
        let mut cfg = GlyphConfig::ascii();
        assert_eq!(cfg.lives_text(3), "3");
        cfg.use_emoji = true;
        cfg.player = "😋".into();
        assert_eq!(cfg.lives_text(2), "😋😋");
        assert_eq!(cfg.lives_text(0), "");
    }
}
