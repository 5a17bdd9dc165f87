//! Pointer and touch input, normalized to surface-local coordinates.

use kurbo::{Point, Vec2};

/// Pointer event type for unified mouse/touch handling.
///
/// Positions are relative to the surface's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up,
    /// The pointer left the surface; treated like `Up`.
    Leave,
}

/// Phase of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// Convert a client-space position to surface-local coordinates.
///
/// `surface_origin` is the top-left of the surface's bounding rect in client space.
pub fn to_surface(client: Point, surface_origin: Point) -> Point {
    let offset: Vec2 = client - surface_origin;
    offset.to_point()
}

/// Map a touch event onto the pointer event it stands for.
///
/// Start and move are only honoured for single-touch gestures; anything with
/// zero or several active touches is ignored. End and cancel always release.
/// `touches` are client-space positions of the currently active touches.
pub fn pointer_from_touches(phase: TouchPhase, touches: &[Point], surface_origin: Point) -> Option<PointerEvent> {
    match (phase, touches) {
        (TouchPhase::Start, [touch]) => Some(PointerEvent::Down {
            position: to_surface(*touch, surface_origin),
        }),
        (TouchPhase::Move, [touch]) => Some(PointerEvent::Move {
            position: to_surface(*touch, surface_origin),
        }),
        (TouchPhase::End | TouchPhase::Cancel, _) => Some(PointerEvent::Up),
        _ => None,
    }
}
