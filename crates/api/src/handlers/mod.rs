pub mod diagnostics;
pub mod pages;
pub mod posts;
pub mod visitors;
