pub mod shared;
pub mod sweep;
