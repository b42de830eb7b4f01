//! Top-down recursive merge sort over integer slices, plus the demo that prints a fixed sample
//! before and after sorting.
//!
//! Every sort implementation lives in its own module under [`stable`] and is exposed as a
//! `SortImpl` through the [`sort_test_tools::Sort`] trait, so the tests and the benchmark can
//! drive all of them the same way.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Copy,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Copy,
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod demo;
mod error;
pub mod stable;

pub use error::SortError;
