//! Element ids and classes the host page must provide.

pub const CANVAS: &str = "main-canvas";
pub const CONTAINER: &str = "canvas-container";
pub const DRAW_TOOL: &str = "draw-tool";
pub const MOVE_TOOL: &str = "move-tool";
pub const CLEAR: &str = "clear-canvas";
pub const UPLOAD: &str = "image-upload";
pub const BRUSH_SIZE: &str = "brush-size";
pub const BRUSH_COLOR: &str = "brush-color";
pub const SIZE_VALUE: &str = "size-value";
pub const DRAW_OPTIONS: &str = "draw-options";
pub const CONFIG: &str = "inkpane-config";

/// Class of the resize handle overlay elements.
pub const HANDLE_CLASS: &str = "resize-handle";

/// Ids the shell looks up at startup. A missing one aborts the shell.
pub const REQUIRED: [&str; 10] = [
    CANVAS,
    CONTAINER,
    DRAW_TOOL,
    MOVE_TOOL,
    CLEAR,
    UPLOAD,
    BRUSH_SIZE,
    BRUSH_COLOR,
    SIZE_VALUE,
    DRAW_OPTIONS,
];

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX_HTML: &str = include_str!("../index.html");

    #[test]
    fn test_index_html_has_required_ids() {
        let missing: Vec<&str> = REQUIRED
            .iter()
            .chain(std::iter::once(&CONFIG))
            .copied()
            .filter(|id| !INDEX_HTML.contains(&format!("id=\"{}\"", id)))
            .collect();
        assert!(missing.is_empty(), "ids missing from index.html: {:?}", missing);
    }

    #[test]
    fn test_index_html_styles_handles() {
        assert!(INDEX_HTML.contains(&format!(".{}", HANDLE_CLASS)));
    }
}
