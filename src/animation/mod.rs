pub mod ease;
pub mod progress;
pub mod reveal;
pub mod speed;
