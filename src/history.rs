use crate::scene::Scene;
use crate::stroke::StrokeRef;

/// Owns the live scene and the undo/redo stacks of scene snapshots.
///
/// Every operation is total: at a history boundary it does nothing and
/// returns `false`.
#[derive(Debug, Default)]
pub struct History {
    scene: Scene,
    /// Snapshots to return to on undo, most recent last
    undo_stack: Vec<Scene>,
    /// Snapshots undone and not yet redone, most recent last
    redo_stack: Vec<Scene>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Append `stroke`, remembering the scene as it was before
    pub fn commit(&mut self, stroke: StrokeRef) {
        self.undo_stack.push(self.scene.clone());
        self.scene.add_stroke(stroke);
        self.redo_stack.clear();
        log::debug!("Committed stroke, scene has {} strokes", self.scene.len());
    }

    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.scene, previous);
        self.redo_stack.push(current);
        log::debug!("Undo, scene has {} strokes", self.scene.len());
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.scene, next);
        self.undo_stack.push(current);
        log::debug!("Redo, scene has {} strokes", self.scene.len());
        true
    }

    /// Empty the scene as one undoable step
    pub fn clear(&mut self) -> bool {
        if self.scene.is_empty() {
            return false;
        }
        let current = std::mem::take(&mut self.scene);
        self.undo_stack.push(current);
        self.redo_stack.clear();
        log::debug!("Cleared scene");
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_stack(&self) -> &[Scene] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Scene] {
        &self.redo_stack
    }
}
