use crate::stroke::MutableStroke;

/// Pointer interaction state
#[derive(Debug, Default)]
pub enum EditorState {
    #[default]
    Idle,
    /// A pointer is held down and the transient stroke follows it
    Drawing { stroke: MutableStroke },
}

impl EditorState {
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    pub fn transient(&self) -> Option<&MutableStroke> {
        match self {
            Self::Drawing { stroke } => Some(stroke),
            Self::Idle => None,
        }
    }

    pub fn transient_mut(&mut self) -> Option<&mut MutableStroke> {
        match self {
            Self::Drawing { stroke } => Some(stroke),
            Self::Idle => None,
        }
    }

    /// Return to idle, handing back the transient stroke if there was one
    pub fn take_stroke(&mut self) -> Option<MutableStroke> {
        match std::mem::take(self) {
            Self::Drawing { stroke } => Some(stroke),
            Self::Idle => None,
        }
    }
}
