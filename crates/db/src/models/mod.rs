pub mod post;
pub mod visitor;
