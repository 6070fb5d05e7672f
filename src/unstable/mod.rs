pub mod fargo_andrew;
pub mod quicksort;

// Also serves as the base case of fargo_andrew.
pub mod selection;
