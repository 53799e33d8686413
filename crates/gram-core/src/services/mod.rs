//! Query layer - turns raw identifiers and filters into repository calls.

mod posts;
mod users;

pub use posts::PostService;
pub use users::UserService;
