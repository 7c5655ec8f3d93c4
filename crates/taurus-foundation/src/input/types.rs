use smallvec::SmallVec;
use taurus_ui_graphics::Point;

pub type PointerId = u64;

/// What happened in a pointer event.
///
/// `PointerDown`/`PointerUp` describe an additional pointer joining or leaving
/// an ongoing gesture; `index` points into the event's pointer list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
    PointerDown { index: usize },
    PointerUp { index: usize },
}

/// Position of one pointer within an event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub id: PointerId,
    pub position: Point,
}

impl PointerSample {
    pub const fn new(id: PointerId, position: Point) -> Self {
        Self { id, position }
    }

    /// Sample that only carries a vertical coordinate.
    pub const fn at_y(id: PointerId, y: f32) -> Self {
        Self {
            id,
            position: Point::new(0.0, y),
        }
    }
}

/// Pointer event: an action plus the ordered samples of every pointer that
/// is down while it happens.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pointers: SmallVec<[PointerSample; 4]>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, pointers: impl IntoIterator<Item = PointerSample>) -> Self {
        Self {
            kind,
            pointers: pointers.into_iter().collect(),
        }
    }

    pub fn down(id: PointerId, y: f32) -> Self {
        Self::new(PointerEventKind::Down, [PointerSample::at_y(id, y)])
    }

    pub fn moved(id: PointerId, y: f32) -> Self {
        Self::new(PointerEventKind::Move, [PointerSample::at_y(id, y)])
    }

    pub fn up(id: PointerId, y: f32) -> Self {
        Self::new(PointerEventKind::Up, [PointerSample::at_y(id, y)])
    }

    pub fn cancel(id: PointerId, y: f32) -> Self {
        Self::new(PointerEventKind::Cancel, [PointerSample::at_y(id, y)])
    }

    pub fn pointer(&self, index: usize) -> Option<&PointerSample> {
        self.pointers.get(index)
    }

    /// Vertical position of pointer `id`, if it is part of this event.
    pub fn y_of(&self, id: PointerId) -> Option<f32> {
        self.pointers
            .iter()
            .find(|sample| sample.id == id)
            .map(|sample| sample.position.y)
    }

    /// Index of the pointer the action refers to; zero for primary actions.
    pub fn action_index(&self) -> usize {
        match self.kind {
            PointerEventKind::PointerDown { index } | PointerEventKind::PointerUp { index } => {
                index
            }
            _ => 0,
        }
    }

    pub fn action_pointer_id(&self) -> Option<PointerId> {
        self.pointer(self.action_index()).map(|sample| sample.id)
    }
}
