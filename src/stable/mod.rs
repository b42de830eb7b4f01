pub mod merge;

pub mod rust_mergesort;

// Reference implementation, stdlib slice::sort.
pub mod rust_std;
