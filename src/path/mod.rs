pub mod cache;
pub mod locate;
pub mod measure;
pub mod reveal;
pub mod runtime;
pub mod sample;
pub mod worker;
