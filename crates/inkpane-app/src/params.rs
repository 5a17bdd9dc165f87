//! Startup configuration: embedded JSON config plus URL overrides.

use inkpane_core::{EditorConfig, RgbaColor};

/// Brush overrides taken from the page URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParams {
    /// Initial brush size (`brush=12`).
    pub brush: Option<u32>,
    /// Initial brush color (`color=%23ff0000` or `color=ff0000`).
    pub color: Option<String>,
}

impl UrlParams {
    /// Fill fields still unset from `other`.
    pub fn or(self, other: UrlParams) -> UrlParams {
        UrlParams {
            brush: self.brush.or(other.brush),
            color: self.color.or(other.color),
        }
    }
}

/// Parse brush parameters from a query string or hash.
/// Supports formats like `?brush=8&color=%23336699`.
pub fn parse_params(s: &str) -> UrlParams {
    // Remove leading ? or #
    let s = s.trim_start_matches(['?', '#']);

    let mut params = UrlParams::default();

    for pair in s.split('&') {
        let mut parts = pair.splitn(2, '=');
        if let (Some(key), Some(value)) = (parts.next(), parts.next()) {
            if value.is_empty() {
                continue;
            }
            match key {
                "brush" => params.brush = value.parse().ok(),
                "color" => params.color = Some(normalize_color(value)),
                _ => {}
            }
        }
    }

    params
}

/// Accept `%23rrggbb`, `#rrggbb` and bare `rrggbb`.
fn normalize_color(value: &str) -> String {
    let hex = value
        .strip_prefix("%23")
        .or_else(|| value.strip_prefix('#'))
        .unwrap_or(value);
    format!("#{}", hex)
}

/// Apply URL overrides on top of a config.
pub fn apply_params(config: &mut EditorConfig, params: &UrlParams) {
    if let Some(size) = params.brush {
        config.brush_size = size;
    }
    if let Some(ref color) = params.color {
        match RgbaColor::from_hex(color) {
            Ok(color) => config.brush_color = color,
            Err(e) => log::warn!("Ignoring color parameter: {}", e),
        }
    }
}

/// Build the editor config from an optional embedded JSON block.
pub fn load_config(json: Option<&str>) -> EditorConfig {
    match json.map(str::trim).filter(|s| !s.is_empty()) {
        Some(json) => EditorConfig::from_json(json).unwrap_or_else(|e| {
            log::warn!("Invalid editor config, using defaults: {}", e);
            EditorConfig::default()
        }),
        None => EditorConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query() {
        let params = parse_params("?brush=12&color=%23336699");
        assert_eq!(params.brush, Some(12));
        assert_eq!(params.color.as_deref(), Some("#336699"));
    }

    #[test]
    fn test_parse_hash_and_bare_color() {
        let params = parse_params("#color=ff0000&unknown=1");
        assert_eq!(params.brush, None);
        assert_eq!(params.color.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_bad_brush_ignored() {
        assert_eq!(parse_params("?brush=big").brush, None);
        assert_eq!(parse_params("?brush=").brush, None);
    }

    #[test]
    fn test_query_wins_over_hash() {
        let query = parse_params("?brush=3");
        let hash = parse_params("#brush=9&color=000");
        let merged = query.or(hash);
        assert_eq!(merged.brush, Some(3));
        assert_eq!(merged.color.as_deref(), Some("#000"));
    }

    #[test]
    fn test_apply_params() {
        let mut config = EditorConfig::default();
        apply_params(
            &mut config,
            &UrlParams {
                brush: Some(20),
                color: Some("#00ff00".to_string()),
            },
        );
        assert_eq!(config.brush_size, 20);
        assert_eq!(config.brush_color, RgbaColor::new(0, 255, 0, 255));

        apply_params(
            &mut config,
            &UrlParams {
                brush: None,
                color: Some("#zz".to_string()),
            },
        );
        assert_eq!(config.brush_color, RgbaColor::new(0, 255, 0, 255));
    }

    #[test]
    fn test_load_config() {
        assert_eq!(load_config(None), EditorConfig::default());
        assert_eq!(load_config(Some("  ")), EditorConfig::default());
        assert_eq!(load_config(Some("{ oops")), EditorConfig::default());
        assert_eq!(load_config(Some(r#"{"brush_size": 9}"#)).brush_size, 9);
    }
}
