//! Frame geometry rules shared by the reducer and the window chrome.

use crate::model::{PointerPosition, Viewport, WindowFrameState, WindowRect};

/// Resize commits only when the new width is strictly greater than this.
pub const RESIZE_FLOOR_WIDTH: i32 = 400;
/// Resize commits only when the new height is strictly greater than this.
pub const RESIZE_FLOOR_HEIGHT: i32 = 300;

/// Keeps a frame inside the desktop layer, preferring the top-left edge when it cannot fit.
pub fn clamp_to_viewport(rect: WindowRect, viewport: Viewport) -> WindowRect {
    let max_x = (viewport.w - rect.w).max(0);
    let max_y = (viewport.h - rect.h).max(0);
    WindowRect {
        x: rect.x.clamp(0, max_x),
        y: rect.y.clamp(0, max_y),
        ..rect
    }
}

/// Size the bottom-right handle proposes for `pointer`, or `None` when at or below the floor.
pub fn resize_candidate(rect: WindowRect, pointer: PointerPosition) -> Option<WindowRect> {
    let w = pointer.x - rect.x;
    let h = pointer.y - rect.y;
    (w > RESIZE_FLOOR_WIDTH && h > RESIZE_FLOOR_HEIGHT).then_some(WindowRect { w, h, ..rect })
}

/// Drag preview rect for a pointer that moved from `pointer_start` to `pointer`.
pub fn drag_preview(
    rect_start: WindowRect,
    pointer_start: PointerPosition,
    pointer: PointerPosition,
) -> WindowRect {
    rect_start.offset(pointer.x - pointer_start.x, pointer.y - pointer_start.y)
}

/// Inline style for a frame; maximized frames carry no geometry of their own.
pub fn frame_style(frame: WindowFrameState, preview: Option<WindowRect>) -> String {
    if frame.maximized {
        String::new()
    } else {
        preview.unwrap_or(frame.rect).css()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rect(x: i32, y: i32, w: i32, h: i32) -> WindowRect {
        WindowRect { x, y, w, h }
    }

    #[test]
    fn clamp_keeps_frame_inside_layer() {
        let viewport = Viewport { w: 1200, h: 800 };
        assert_eq!(
            clamp_to_viewport(rect(-30, -5, 800, 500), viewport),
            rect(0, 0, 800, 500)
        );
        assert_eq!(
            clamp_to_viewport(rect(700, 600, 800, 500), viewport),
            rect(400, 300, 800, 500)
        );
        assert_eq!(
            clamp_to_viewport(rect(120, 90, 800, 500), viewport),
            rect(120, 90, 800, 500)
        );
    }

    #[test]
    fn clamp_pins_oversized_frame_to_origin() {
        let viewport = Viewport { w: 600, h: 400 };
        assert_eq!(
            clamp_to_viewport(rect(80, 40, 800, 500), viewport),
            rect(0, 0, 800, 500)
        );
    }

    #[test]
    fn resize_floor_is_exclusive() {
        let start = rect(50, 50, 800, 500);
        assert_eq!(resize_candidate(start, PointerPosition { x: 450, y: 500 }), None);
        assert_eq!(resize_candidate(start, PointerPosition { x: 600, y: 350 }), None);
        assert_eq!(
            resize_candidate(start, PointerPosition { x: 451, y: 351 }),
            Some(rect(50, 50, 401, 301))
        );
    }

    #[test]
    fn maximized_frames_have_no_inline_geometry() {
        let frame = WindowFrameState {
            rect: rect(10, 20, 800, 500),
            maximized: true,
        };
        assert_eq!(frame_style(frame, None), "");
        let restored = WindowFrameState {
            maximized: false,
            ..frame
        };
        assert_eq!(
            frame_style(restored, Some(rect(15, 25, 800, 500))),
            "left:15px;top:25px;width:800px;height:500px;"
        );
        assert_eq!(
            drag_preview(
                rect(10, 20, 800, 500),
                PointerPosition { x: 100, y: 100 },
                PointerPosition { x: 90, y: 130 }
            ),
            rect(0, 50, 800, 500)
        );
    }
}
