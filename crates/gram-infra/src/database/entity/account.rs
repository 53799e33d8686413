//! Account entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use gram_core::error::RepoError;

use super::parse_stored_id;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain User.
impl TryFrom<Model> for gram_core::domain::User {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_stored_id(&model.id)?,
            name: model.name,
            email: model.email,
            password: model.password,
        })
    }
}

/// Conversion from Domain User to SeaORM ActiveModel.
impl From<gram_core::domain::User> for ActiveModel {
    fn from(user: gram_core::domain::User) -> Self {
        Self {
            id: Set(user.id.to_hex()),
            name: Set(user.name),
            email: Set(user.email),
            password: Set(user.password),
        }
    }
}
