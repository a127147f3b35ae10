pub mod bridge;
pub mod timestamp;
