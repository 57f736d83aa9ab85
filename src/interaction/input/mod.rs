pub mod input_interaction;
pub mod pointer;

pub use input_interaction::{InputInteractionPlugin, PrimaryTouch};
pub use pointer::{InputStateMachine, PointerEvent, PointerIntent, PointerPhase};
