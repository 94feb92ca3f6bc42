//! Sorts that keep equal elements in their original relative order.

pub mod bubblesort;
pub mod insertionsort;
pub mod mergesort;
pub mod rust_std;
