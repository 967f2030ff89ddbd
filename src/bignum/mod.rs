pub mod dynamic;
pub mod fixed;

pub use dynamic::DynamicBigNum;
pub use fixed::FixedBigNum;
