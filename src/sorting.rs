//! In-place comparison and distribution sorts. Every routine sorts ascending and leaves empty
//! and single element slices untouched.

mod bubble;
mod heap;
mod merge;
mod quick;
mod radix;
mod shell;

pub use bubble::bubble_sort;
pub use heap::heap_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use radix::radix_sort;
pub use shell::shell_sort;
