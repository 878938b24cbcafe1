pub mod hand;
pub mod jitter;
pub mod smooth;
