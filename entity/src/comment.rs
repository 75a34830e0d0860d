use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A reader's comment on a [`super::post`].
///
/// `user_id` is cleared, not cascaded, when the author's `blog_user` row goes
/// away; `user_name` keeps the display name around for that case.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "comment")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_deserializing)]
    pub id: i32,
    pub user_id: Option<i32>,
    pub user_name: Option<String>,
    pub post_id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    pub created: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id"
    )]
    Post,
    #[sea_orm(
        belongs_to = "super::blog_user::Entity",
        from = "Column::UserId",
        to = "super::blog_user::Column::Id",
        on_delete = "SetNull"
    )]
    BlogUser,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl Related<super::blog_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlogUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
