pub mod patterns;

// Re-exported for the test instantiation macros.
pub use paste;

/// Common interface every sort implementation under test is exposed through.
///
/// Elements are restricted to `Copy` types: the implementations work on fixed-width integers and
/// the stability tests pair those integers with their original index.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Copy;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Copy,
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}
