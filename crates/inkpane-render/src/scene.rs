//! Full redraw and the incremental stroke fast path.

use crate::renderer::{Painter, RenderContext};
use inkpane_core::shapes::StrokePath;
use inkpane_core::Mode;
use peniko::Color;

/// Redraw the whole surface from retained state.
///
/// Z-order is fixed: every image (insertion order), then every stroke
/// (insertion order). The selected image gets an outline in move mode only.
pub fn render_scene(ctx: &RenderContext, painter: &mut impl Painter) {
    let editor = ctx.editor;
    let canvas = editor.canvas();
    painter.clear(canvas.size());

    let highlighted = match editor.mode() {
        Mode::Move => editor.selected(),
        Mode::Draw => None,
    };

    for (index, image) in canvas.images().iter().enumerate() {
        if let Err(e) = painter.draw_image(image) {
            log::warn!("Skipping image {}: {}", index, e);
        }
        if highlighted == Some(index) {
            painter.stroke_rect(image.as_rect(), ctx.highlight_color, ctx.highlight_width);
        }
    }

    for path in canvas.paths() {
        render_stroke(path, painter);
    }
}

/// Draw one stroke path in full.
///
/// A single-point path is a dot of the stroke's diameter; an empty one draws nothing.
pub fn render_stroke(path: &StrokePath, painter: &mut impl Painter) {
    let color: Color = path.color.into();
    match path.points.as_slice() {
        [] => {}
        [point] => painter.fill_circle(*point, path.size / 2.0, color),
        points => painter.stroke_polyline(points, color, path.size),
    }
}

/// Draw only what the most recent point added to `path`.
///
/// Paints a subset of what [`render_stroke`] paints for the same path, so a
/// later full redraw never disagrees with it.
pub fn render_stroke_tail(path: &StrokePath, painter: &mut impl Painter) {
    let color: Color = path.color.into();
    match path.last_segment() {
        Some((from, to)) => painter.stroke_polyline(&[from, to], color, path.size),
        None => {
            if let Some(point) = path.points.first() {
                painter.fill_circle(*point, path.size / 2.0, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawCommand, RecordingPainter};
    use inkpane_core::{DecodedBitmap, Editor, EditorConfig};
    use kurbo::{Point, Rect, Size};

    fn editor() -> Editor {
        Editor::with_size(EditorConfig::default(), Size::new(800.0, 600.0))
    }

    fn draw(editor: &Editor) -> Vec<DrawCommand> {
        let mut painter = RecordingPainter::new();
        render_scene(&RenderContext::new(editor), &mut painter);
        painter.commands
    }

    #[test]
    fn test_empty_scene_only_clears() {
        let commands = draw(&editor());
        assert_eq!(commands, vec![DrawCommand::Clear(Size::new(800.0, 600.0))]);
    }

    #[test]
    fn test_three_point_stroke_is_one_polyline() {
        let mut editor = editor();
        editor.set_mode(Mode::Draw);
        editor.pointer_down(Point::new(10.0, 10.0));
        editor.pointer_move(Point::new(20.0, 10.0));
        editor.pointer_move(Point::new(20.0, 20.0));
        editor.pointer_up();

        let commands = draw(&editor);
        assert_eq!(commands.len(), 2);
        match &commands[1] {
            DrawCommand::Polyline { points, width, .. } => {
                assert_eq!(
                    points,
                    &vec![Point::new(10.0, 10.0), Point::new(20.0, 10.0), Point::new(20.0, 20.0)]
                );
                assert!((width - 5.0).abs() < f64::EPSILON);
            }
            other => panic!("expected polyline, got {:?}", other),
        }
    }

    #[test]
    fn test_single_point_stroke_redraws_as_dot() {
        let mut editor = editor();
        editor.set_mode(Mode::Draw);
        editor.set_brush_size(8);
        editor.pointer_down(Point::new(30.0, 40.0));
        editor.pointer_up();

        let commands = draw(&editor);
        match &commands[1] {
            DrawCommand::Circle { center, radius, .. } => {
                assert_eq!(*center, Point::new(30.0, 40.0));
                assert!((radius - 4.0).abs() < f64::EPSILON);
            }
            other => panic!("expected dot, got {:?}", other),
        }
    }

    #[test]
    fn test_images_under_strokes_regardless_of_creation_order() {
        let mut editor = editor();
        editor.set_mode(Mode::Draw);
        editor.pointer_down(Point::new(1.0, 1.0));
        editor.pointer_move(Point::new(2.0, 2.0));
        editor.pointer_up();
        let bitmap = DecodedBitmap::new(200, 100);
        editor.insert_image(bitmap).unwrap();

        let commands = draw(&editor);
        assert!(matches!(commands[0], DrawCommand::Clear(_)));
        match &commands[1] {
            DrawCommand::Image { bitmap: id, rect } => {
                assert_eq!(*id, bitmap.id);
                let expected = Rect::new(190.0, 195.0, 610.0, 405.0);
                assert!((rect.x0 - expected.x0).abs() < 1e-9);
                assert!((rect.y1 - expected.y1).abs() < 1e-9);
            }
            other => panic!("expected image, got {:?}", other),
        }
        assert!(matches!(commands[2], DrawCommand::Rect { .. }));
        assert!(matches!(commands[3], DrawCommand::Polyline { .. }));
    }

    #[test]
    fn test_highlight_only_in_move_mode() {
        let mut editor = editor();
        editor.insert_image(DecodedBitmap::new(200, 100)).unwrap();
        editor.insert_image(DecodedBitmap::new(50, 50)).unwrap();

        let commands = draw(&editor);
        let outlines: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { rect, width, .. } => Some((*rect, *width)),
                _ => None,
            })
            .collect();
        assert_eq!(outlines.len(), 1);
        assert_eq!(outlines[0].0, editor.selected_image().unwrap().as_rect());
        assert!((outlines[0].1 - 2.0).abs() < f64::EPSILON);
        // Outline follows the selected (second) image, drawn right after it.
        assert!(matches!(commands[3], DrawCommand::Rect { .. }));

        editor.set_mode(Mode::Draw);
        let commands = draw(&editor);
        assert!(!commands.iter().any(|c| matches!(c, DrawCommand::Rect { .. })));
    }

    #[test]
    fn test_redraw_replaces_previous_frame() {
        let mut editor = editor();
        editor.set_mode(Mode::Draw);
        editor.pointer_down(Point::new(1.0, 1.0));

        let mut painter = RecordingPainter::new();
        render_scene(&RenderContext::new(&editor), &mut painter);
        render_stroke_tail(editor.canvas().last_path().unwrap(), &mut painter);
        assert_eq!(painter.commands.len(), 3);

        render_scene(&RenderContext::new(&editor), &mut painter);
        assert_eq!(painter.commands, draw(&editor));
    }

    #[test]
    fn test_missing_bitmap_does_not_stop_redraw() {
        let mut editor = editor();
        editor.insert_image(DecodedBitmap::new(10, 10)).unwrap();
        editor.set_mode(Mode::Draw);
        editor.pointer_down(Point::new(5.0, 5.0));

        let mut painter = RecordingPainter::new().failing_images();
        render_scene(&RenderContext::new(&editor), &mut painter);
        assert!(matches!(painter.commands.last(), Some(DrawCommand::Circle { .. })));
    }

    #[test]
    fn test_tail_matches_full_redraw() {
        let mut editor = editor();
        editor.set_mode(Mode::Draw);
        editor.pointer_down(Point::new(0.0, 0.0));

        let mut tail = RecordingPainter::new();
        render_stroke_tail(editor.canvas().last_path().unwrap(), &mut tail);
        assert!(matches!(tail.commands[0], DrawCommand::Circle { .. }));

        editor.pointer_move(Point::new(5.0, 5.0));
        editor.pointer_move(Point::new(9.0, 3.0));
        let mut tail = RecordingPainter::new();
        render_stroke_tail(editor.canvas().last_path().unwrap(), &mut tail);
        match &tail.commands[0] {
            DrawCommand::Polyline { points, .. } => {
                assert_eq!(points, &vec![Point::new(5.0, 5.0), Point::new(9.0, 3.0)]);
            }
            other => panic!("expected segment, got {:?}", other),
        }

        // The segment lies on the polyline the full redraw produces.
        let full = draw(&editor);
        let DrawCommand::Polyline { points, .. } = &full[1] else {
            panic!("expected polyline");
        };
        assert!(points.windows(2).any(|w| w == [Point::new(5.0, 5.0), Point::new(9.0, 3.0)]));
    }
}
