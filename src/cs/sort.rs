pub mod stable_partition;

pub use stable_partition::stable_partition;
