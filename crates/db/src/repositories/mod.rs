pub mod form_repo;
pub mod project_repo;

pub use form_repo::FormRepo;
pub use project_repo::ProjectRepo;
