use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "post")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_deserializing)]
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    #[sea_orm(unique)]
    pub title_slug: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::blog_user::Entity",
        from = "Column::UserId",
        to = "super::blog_user::Column::Id",
        on_delete = "Cascade"
    )]
    BlogUser,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::blog_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlogUser.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
