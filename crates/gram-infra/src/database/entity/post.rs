//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use gram_core::error::RepoError;

use super::parse_stored_id;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Owning account. Not a foreign key; checked at write time only.
    #[sea_orm(indexed)]
    pub uid: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub caption: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,
    pub posted_timestamp: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl TryFrom<Model> for gram_core::domain::Post {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_stored_id(&model.id)?,
            uid: parse_stored_id(&model.uid)?,
            caption: model.caption,
            image_url: model.image_url,
            posted_timestamp: model.posted_timestamp,
        })
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<gram_core::domain::Post> for ActiveModel {
    fn from(post: gram_core::domain::Post) -> Self {
        Self {
            id: Set(post.id.to_hex()),
            uid: Set(post.uid.to_hex()),
            caption: Set(post.caption),
            image_url: Set(post.image_url),
            posted_timestamp: Set(post.posted_timestamp),
        }
    }
}
