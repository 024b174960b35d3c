pub mod cs;
pub mod error;
pub mod harness;

pub use cs::randomized::{
    random_item_dual_iterate, random_item_select, random_item_sort_array,
    random_item_temp_array, sample_one_iter, Algorithm, RandomSource, RangeMode, RngSource,
    TakeRand, XorShift32,
};
pub use cs::sort::stable_partition;
pub use error::{Error, Result};
