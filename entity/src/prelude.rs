pub use super::blog_user::Entity as BlogUser;
pub use super::comment::Entity as Comment;
pub use super::post::Entity as Post;
