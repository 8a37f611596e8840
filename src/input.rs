use egui::{Context, Key, KeyboardShortcut, Modifiers, Pos2, Rect, pos2};

use crate::geometry::Point;

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO_SHORTCUT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const REDO_ALT_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

/// Input events in canvas pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
    Undo,
    Redo,
}

/// Handles converting raw egui input into canvas [`InputEvent`]s
#[derive(Debug, Default)]
pub struct InputHandler {
    /// Primary button went down inside the canvas and is still held
    pressed: bool,
    last_point: Option<Point>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a screen position into the pixel grid of a canvas shown in `canvas_rect`
    pub fn to_canvas(pos: Pos2, canvas_rect: Rect, canvas_size: [u32; 2]) -> Point {
        let scale = |pixels: u32, extent: f32| {
            if extent > 0.0 { pixels as f32 / extent } else { 1.0 }
        };
        let rel = pos - canvas_rect.min;
        Point::from_pos2(pos2(
            rel.x * scale(canvas_size[0], canvas_rect.width()),
            rel.y * scale(canvas_size[1], canvas_rect.height()),
        ))
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(
        &mut self,
        ctx: &Context,
        canvas_rect: Rect,
        canvas_size: [u32; 2],
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input_mut(|input| {
            // Check the shifted shortcut first so it isn't taken as undo
            if input.consume_shortcut(&REDO_SHORTCUT)
                || input.consume_shortcut(&REDO_ALT_SHORTCUT)
            {
                events.push(InputEvent::Redo);
            } else if input.consume_shortcut(&UNDO_SHORTCUT) {
                events.push(InputEvent::Undo);
            }

            let pointer = &input.pointer;
            let point = pointer
                .interact_pos()
                .map(|pos| (pos, Self::to_canvas(pos, canvas_rect, canvas_size)));

            if let Some((pos, point)) = point {
                if pointer.primary_pressed() && canvas_rect.contains(pos) {
                    self.pressed = true;
                    self.last_point = Some(point);
                    events.push(InputEvent::PointerDown(point));
                } else if self.pressed && pointer.primary_down() && self.last_point != Some(point) {
                    self.last_point = Some(point);
                    events.push(InputEvent::PointerMove(point));
                }
            }

            if self.pressed && pointer.primary_released() {
                let end = point.map(|(_, point)| point).or(self.last_point);
                if let Some(end) = end {
                    events.push(InputEvent::PointerUp(end));
                }
                self.pressed = false;
                self.last_point = None;
            }
        });

        events
    }
}
