use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid session config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid session config: {0}")]
    Invalid(String),
}

/// Spacing and limits used by the nested layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Gap between a container border and its children
    pub margin_padding: f32,
    /// Gap between sibling vertices, both across and down
    pub nodes_padding: f32,
    /// Intrinsic size given to vertices that arrive without one
    pub default_vertex_width: f32,
    pub default_vertex_height: f32,
    /// Containment depth at which recursion stops
    pub max_depth: u32,
    /// Lay out sibling subtrees on the rayon pool
    pub parallel: bool,
}

impl LayoutConfig {
    pub const DEFAULT_MARGIN_PADDING: f32 = 0.25;
    pub const DEFAULT_NODES_PADDING: f32 = 0.5;
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin_padding: Self::DEFAULT_MARGIN_PADDING,
            nodes_padding: Self::DEFAULT_NODES_PADDING,
            default_vertex_width: 1.0,
            default_vertex_height: 1.0,
            max_depth: 256,
            parallel: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EdgeStyle {
    #[default]
    Straight,
    Curved,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub style: EdgeStyle,
    /// Distance from the arrow tip to each base corner
    pub arrow_length: f32,
    /// Half-opening of the arrowhead, in radians
    pub arrow_angle_width: f32,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            style: EdgeStyle::Straight,
            arrow_length: 0.2,
            arrow_angle_width: std::f32::consts::FRAC_PI_6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub layout: LayoutConfig,
    pub router: RouterConfig,
}

impl SessionConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let layout = &self.layout;
        if !(layout.margin_padding >= 0.0 && layout.nodes_padding >= 0.0) {
            return Err(ConfigError::Invalid(
                "paddings must be non-negative".to_string(),
            ));
        }
        if !(layout.default_vertex_width > 0.0 && layout.default_vertex_height > 0.0) {
            return Err(ConfigError::Invalid(
                "default vertex size must be positive".to_string(),
            ));
        }
        if !(self.router.arrow_length >= 0.0) {
            return Err(ConfigError::Invalid(
                "arrow length must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}
