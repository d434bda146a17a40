use leptos::logging::{log, warn};
use leptos::prelude::document;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::view_state::DEFAULT_BACK_TO_TOP_THRESHOLD;

/// Id of the optional `<script type="application/json">` override in index.html.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "invalid site config: {msg}"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Theme {
    pub accent_color: String,
    pub accent_secondary: String,
    pub bg_primary: String,
    pub bg_surface: String,
    pub text_primary: String,
    pub text_muted: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent_color: "#6366f1".to_string(),
            accent_secondary: "#22d3ee".to_string(),
            bg_primary: "#0b0f1a".to_string(),
            bg_surface: "#151b2c".to_string(),
            text_primary: "#e5e7eb".to_string(),
            text_muted: "#9ca3af".to_string(),
        }
    }
}

impl Theme {
    pub fn css_variables(&self) -> String {
        format!(
            "--accent-color: {}; --accent-secondary: {}; --bg-primary: {}; --bg-surface: {}; --text-primary: {}; --text-muted: {};",
            self.accent_color,
            self.accent_secondary,
            self.bg_primary,
            self.bg_surface,
            self.text_primary,
            self.text_muted
        )
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub project_name: String,
    pub tagline: String,
    pub subtitle: String,
    pub highlight: String,
    pub repository_url: String,
    pub logo_text: String,
    pub thumbnail_src: String,
    pub video_src: String,
    pub video_caption: String,
    pub tech_stack: Vec<String>,
    pub copyright: String,
    pub back_to_top_threshold: f64,
    pub theme: Theme,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            project_name: "Auto Deploy".to_string(),
            tagline: "Agent CLI".to_string(),
            subtitle: "AI-Powered Automatic Deployment Tool".to_string(),
            highlight: "Uses local LLMs via Ollama".to_string(),
            repository_url: "https://github.com/MagicalCoder-12/Auto-Deploy".to_string(),
            logo_text: "🚀 AutoDeploy".to_string(),
            thumbnail_src: "public/thumbnail.png".to_string(),
            video_src: "public/video.mp4".to_string(),
            video_caption: "Click to play demo video".to_string(),
            tech_stack: ["Rust", "Leptos", "Ollama", "Python"]
                .into_iter()
                .map(String::from)
                .collect(),
            copyright: "© 2024 Auto Deploy Agent | MIT License".to_string(),
            back_to_top_threshold: DEFAULT_BACK_TO_TOP_THRESHOLD,
            theme: Theme::default(),
        }
    }
}

impl SiteConfig {
    /// Parses a full or partial config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Reads the override element from the page, falling back to defaults.
    pub fn load() -> Self {
        let Some(raw) = document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        if raw.trim().is_empty() {
            return Self::default();
        }
        match Self::from_json(&raw) {
            Ok(config) => {
                log!("loaded site config from #{CONFIG_ELEMENT_ID}");
                config
            }
            Err(e) => {
                warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.project_name, self.tagline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(
            r##"{ "project_name": "Ship It", "theme": { "accent_color": "#ff0000" } }"##,
        )
        .unwrap();
        assert_eq!(config.project_name, "Ship It");
        assert_eq!(config.tagline, "Agent CLI");
        assert_eq!(config.theme.accent_color, "#ff0000");
        assert_eq!(config.theme.bg_primary, Theme::default().bg_primary);
        assert_eq!(config.back_to_top_threshold, 30.0);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SiteConfig::from_json("{ project_name: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid site config"));
    }

    #[test]
    fn theme_renders_css_variables() {
        let css = Theme::default().css_variables();
        assert!(css.starts_with("--accent-color: #6366f1;"));
        assert!(css.contains("--text-muted: #9ca3af;"));
    }

    #[test]
    fn full_name_joins_project_and_tagline() {
        assert_eq!(SiteConfig::default().full_name(), "Auto Deploy Agent CLI");
    }
}
