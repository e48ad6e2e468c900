//! Event dispatch layer.
//!
//! Raw terminal events are mapped to semantic [`UiEvent`]s against the
//! last computed [`LayoutMap`], so behavior handlers never touch the
//! terminal directly and can be driven from tests with hand-built rects.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// A semantic UI event, the only vocabulary `App` reacts to besides keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Collapse/expand the rail, or open the drawer when narrow.
    ToggleSidebar,
    /// Close whatever overlay is open (drawer, tooltip source).
    CloseOverlay,
    /// Pointer moved; the app diffs this into enter/leave transitions.
    PointerAt(u16, u16),
    /// A menu entry was clicked.
    ActivateMenu(usize),
    /// A form field was clicked.
    FocusField(usize),
    /// The submit control was clicked.
    Submit,
    /// A list row was clicked.
    SelectRow(usize),
    ScrollUp,
    ScrollDown,
}

/// Where everything was last laid out. Rendering writes it, hit-testing
/// reads it.
#[derive(Debug, Clone, Default)]
pub struct LayoutMap {
    pub frame: Rect,
    pub header: Rect,
    pub toggle: Option<Rect>,
    pub sidebar: Option<Rect>,
    pub menu_items: Vec<Rect>,
    pub content: Rect,
    pub alerts: Rect,
    pub cards: Vec<Rect>,
    pub rows: Vec<Rect>,
    pub fields: Vec<Rect>,
    pub submit: Option<Rect>,
    pub footer: Rect,
}

impl LayoutMap {
    pub fn menu_item_at(&self, x: u16, y: u16) -> Option<usize> {
        self.menu_items.iter().position(|r| hit(*r, x, y))
    }

    pub fn row_at(&self, x: u16, y: u16) -> Option<usize> {
        self.rows.iter().position(|r| hit(*r, x, y))
    }

    pub fn field_at(&self, x: u16, y: u16) -> Option<usize> {
        self.fields.iter().position(|r| hit(*r, x, y))
    }

    pub fn in_sidebar(&self, x: u16, y: u16) -> bool {
        self.sidebar.is_some_and(|r| hit(r, x, y))
    }

    pub fn on_toggle(&self, x: u16, y: u16) -> bool {
        self.toggle.is_some_and(|r| hit(r, x, y))
    }

    pub fn on_submit(&self, x: u16, y: u16) -> bool {
        self.submit.is_some_and(|r| hit(r, x, y))
    }
}

fn hit(rect: Rect, x: u16, y: u16) -> bool {
    rect.contains(Position::new(x, y))
}

/// Map a mouse event to its semantic meaning.
///
/// While the drawer is open every click outside it closes the overlay,
/// and content scrolling is swallowed by the scroll lock.
pub fn map_mouse(
    event: MouseEvent,
    layout: &LayoutMap,
    drawer_open: bool,
    scroll_locked: bool,
) -> Option<UiEvent> {
    let (x, y) = (event.column, event.row);
    match event.kind {
        MouseEventKind::Moved => Some(UiEvent::PointerAt(x, y)),
        MouseEventKind::Down(MouseButton::Left) => {
            if drawer_open {
                if let Some(i) = layout.menu_item_at(x, y) {
                    return Some(UiEvent::ActivateMenu(i));
                }
                if layout.in_sidebar(x, y) {
                    return None;
                }
                return Some(UiEvent::CloseOverlay);
            }
            if layout.on_toggle(x, y) {
                return Some(UiEvent::ToggleSidebar);
            }
            if let Some(i) = layout.menu_item_at(x, y) {
                return Some(UiEvent::ActivateMenu(i));
            }
            if let Some(i) = layout.field_at(x, y) {
                return Some(UiEvent::FocusField(i));
            }
            if layout.on_submit(x, y) {
                return Some(UiEvent::Submit);
            }
            layout.row_at(x, y).map(UiEvent::SelectRow)
        }
        MouseEventKind::ScrollUp if scroll_locked => None,
        MouseEventKind::ScrollDown if scroll_locked => None,
        MouseEventKind::ScrollUp => Some(UiEvent::ScrollUp),
        MouseEventKind::ScrollDown => Some(UiEvent::ScrollDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn sample_layout() -> LayoutMap {
        LayoutMap {
            frame: Rect::new(0, 0, 120, 40),
            toggle: Some(Rect::new(27, 0, 3, 1)),
            sidebar: Some(Rect::new(0, 0, 26, 40)),
            menu_items: vec![Rect::new(1, 2, 24, 1), Rect::new(1, 3, 24, 1)],
            rows: vec![Rect::new(30, 10, 80, 1)],
            ..Default::default()
        }
    }

    #[test]
    fn clicking_the_toggle_control_toggles_the_sidebar() {
        let layout = sample_layout();
        let event = mouse(MouseEventKind::Down(MouseButton::Left), 28, 0);
        assert_eq!(
            map_mouse(event, &layout, false, false),
            Some(UiEvent::ToggleSidebar)
        );
    }

    #[test]
    fn clicking_outside_an_open_drawer_closes_it() {
        let layout = sample_layout();
        let event = mouse(MouseEventKind::Down(MouseButton::Left), 60, 20);
        assert_eq!(
            map_mouse(event, &layout, true, true),
            Some(UiEvent::CloseOverlay)
        );
    }

    #[test]
    fn clicking_inside_an_open_drawer_does_not_close_it() {
        let layout = sample_layout();
        let event = mouse(MouseEventKind::Down(MouseButton::Left), 5, 20);
        assert_eq!(map_mouse(event, &layout, true, true), None);

        let on_item = mouse(MouseEventKind::Down(MouseButton::Left), 5, 2);
        assert_eq!(
            map_mouse(on_item, &layout, true, true),
            Some(UiEvent::ActivateMenu(0))
        );
    }

    #[test]
    fn scroll_lock_swallows_wheel_events() {
        let layout = sample_layout();
        let event = mouse(MouseEventKind::ScrollDown, 60, 20);
        assert_eq!(map_mouse(event, &layout, false, true), None);
        assert_eq!(
            map_mouse(event, &layout, false, false),
            Some(UiEvent::ScrollDown)
        );
    }

    #[test]
    fn pointer_motion_is_reported_for_hover_tracking() {
        let layout = sample_layout();
        let event = mouse(MouseEventKind::Moved, 3, 3);
        assert_eq!(
            map_mouse(event, &layout, false, false),
            Some(UiEvent::PointerAt(3, 3))
        );
        assert_eq!(layout.menu_item_at(3, 3), Some(1));
    }
}
