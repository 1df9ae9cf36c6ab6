use anyhow::{Result, ensure};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Window title shared by every variant
pub const TITLE: &str = "UFAZ the Snake";

/// Which build of the game to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// 400x400 window with an on-screen game-over banner
    #[default]
    Classic,
    /// 800x800 window, terminal summary only
    Large,
}

impl Variant {
    /// Window side length in pixels
    pub fn window_size(&self) -> i32 {
        match self {
            Variant::Classic => 400,
            Variant::Large => 800,
        }
    }

    /// Whether the game-over banner (and therefore the font) is used
    pub fn shows_banner(&self) -> bool {
        matches!(self, Variant::Classic)
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Window width in pixels
    pub width: i32,
    /// Window height in pixels
    pub height: i32,
    /// Grid unit in pixels; every position is a multiple of it
    pub block: i32,
    /// Maximum number of snake segments
    pub max_length: usize,
    /// Delay between ticks
    pub tick_ms: u64,
    /// How long the game-over banner stays on screen
    pub banner_hold_ms: u64,
    /// Window title
    pub title: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::for_variant(Variant::Classic)
    }
}

impl GameConfig {
    /// Create a new configuration with a custom window size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            block: 20,
            max_length: 1000,
            tick_ms: 150,
            banner_hold_ms: 3000,
            title: TITLE.to_string(),
        }
    }

    /// Configuration matching one of the shipped variants
    pub fn for_variant(variant: Variant) -> Self {
        let size = variant.window_size();
        Self::new(size, size)
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(200, 200)
    }

    /// Number of block columns, walls included
    pub fn columns(&self) -> i32 {
        self.width / self.block
    }

    /// Number of block rows, walls included
    pub fn rows(&self) -> i32 {
        self.height / self.block
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.block > 0, "block size must be positive, got {}", self.block);
        ensure!(
            self.width % self.block == 0 && self.height % self.block == 0,
            "window {}x{} is not a multiple of the {}px block",
            self.width,
            self.height,
            self.block
        );
        ensure!(
            self.columns() >= 3 && self.rows() >= 3,
            "window {}x{} leaves no playable cell inside the walls",
            self.width,
            self.height
        );
        ensure!(self.max_length >= 1, "max_length must be at least 1");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.width, 400);
        assert_eq!(config.height, 400);
        assert_eq!(config.block, 20);
        assert_eq!(config.max_length, 1000);
        assert_eq!(config.tick_ms, 150);
        assert_eq!(config.title, "UFAZ the Snake");
    }

    #[test]
    fn test_variants() {
        let large = GameConfig::for_variant(Variant::Large);
        assert_eq!((large.width, large.height), (800, 800));
        assert_eq!(large.columns(), 40);
        assert!(Variant::Classic.shows_banner());
        assert!(!Variant::Large.shows_banner());
    }

    #[test]
    fn test_validation() {
        assert!(GameConfig::default().validate().is_ok());
        assert!(GameConfig::for_variant(Variant::Large).validate().is_ok());

        let mut config = GameConfig::new(410, 400);
        assert!(config.validate().is_err());

        config = GameConfig::new(40, 40);
        assert!(config.validate().is_err());

        config = GameConfig::new(60, 60);
        assert!(config.validate().is_ok());

        config.block = 0;
        assert!(config.validate().is_err());

        config = GameConfig::default();
        config.max_length = 0;
        assert!(config.validate().is_err());
    }
}
