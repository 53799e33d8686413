//! Domain entities - the core business objects.

mod object_id;
mod page;
mod post;
mod user;

pub use object_id::{InvalidObjectId, ObjectId};
pub use page::{DEFAULT_LIMIT, DEFAULT_MAX_LIMIT, DEFAULT_SKIP, MAX_SKIP, Page};
pub use post::Post;
pub use user::User;
