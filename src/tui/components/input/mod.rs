mod model;
mod view;

pub use model::{InputAction, InputResult, InputState};
pub use view::Input;
