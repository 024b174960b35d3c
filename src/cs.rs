pub mod randomized;
pub mod sort;

// Re-export all modules
pub use randomized::*;
pub use sort::*;
