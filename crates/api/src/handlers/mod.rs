pub mod dependent;
pub mod item;
pub mod transfer;
