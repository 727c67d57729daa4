pub mod display;
pub mod keyboard;
pub mod tone;
pub mod via6522;

pub use display::Display;
pub use keyboard::KeyboardMatrix;
pub use tone::ToneGenerator;
pub use via6522::Via6522;
