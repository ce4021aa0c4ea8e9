//! Popup positioning
//!
//! Pure functions that decide where a menu renders. Nothing here touches a
//! rendering surface: callers measure first and pass sizes in.

use ctxmenu_core::{EventKind, Point, PointerEvent, Rect, Size};

/// Horizontal side a submenu expands toward
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalSide {
    /// To the right of the parent row
    #[default]
    Start,
    /// Flipped to the left of the parent row
    End,
}

/// Vertical anchoring of a submenu against its parent row
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalSide {
    /// Top edges aligned, expanding downward
    #[default]
    Top,
    /// Bottom edges aligned, expanding upward
    Bottom,
}

/// Where a submenu renders relative to its parent row
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SubmenuPlacement {
    pub horizontal: HorizontalSide,
    pub vertical: VerticalSide,
}

/// Anchor point for a menu opened by `event`
///
/// Uses the pointer's client coordinates. A `touchend` without coordinates
/// falls back to its first changed touch. Missing, negative or non-finite
/// axes become `0`.
pub fn resolve_trigger_position(event: &PointerEvent) -> Point {
    let (mut x, mut y) = event.client_position();

    if event.kind == EventKind::TouchEnd && (x.is_none() || y.is_none()) {
        if let Some(touch) = event.changed_touches.first() {
            x = Some(touch.client_x);
            y = Some(touch.client_y);
        }
    }

    Point::new(non_negative(x), non_negative(y))
}

fn non_negative(value: Option<f32>) -> f32 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Shift `point` so an element of `element` size stays inside `viewport`
///
/// Each axis moves back by its overflow, but never past `0`.
pub fn clamp_to_viewport(point: Point, element: Size, viewport: Size) -> Point {
    Point::new(
        clamp_axis(point.x, element.width, viewport.width),
        clamp_axis(point.y, element.height, viewport.height),
    )
}

fn clamp_axis(origin: f32, extent: f32, limit: f32) -> f32 {
    let overflow = origin + extent - limit;
    if overflow > 0.0 {
        origin - overflow.min(origin)
    } else {
        origin
    }
}

/// Pick the side a mounted submenu expands toward
///
/// `rect` is the submenu's client rect in its default (right, top-aligned)
/// placement. Each axis flips independently when that edge leaves the
/// viewport.
pub fn resolve_submenu_side(rect: Rect, viewport: Size) -> SubmenuPlacement {
    let horizontal = if rect.right() < viewport.width {
        HorizontalSide::Start
    } else {
        HorizontalSide::End
    };

    let vertical = if rect.bottom() > viewport.height {
        VerticalSide::Bottom
    } else {
        VerticalSide::Top
    };

    SubmenuPlacement {
        horizontal,
        vertical,
    }
}
