pub mod post_repo;
pub mod visitor_repo;

pub use post_repo::PostRepo;
pub use visitor_repo::VisitorRepo;
