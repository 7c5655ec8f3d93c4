pub mod pull;

pub use pull::{DragSession, DragUpdate, GestureTracker};
