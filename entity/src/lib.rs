pub mod prelude;

pub mod blog_user;
pub mod comment;
pub mod post;
