use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub image: Option<String>,
    pub servings: Option<String>,
    pub time_needed: Json,
    pub difficulty: String,
    pub status: String,
    pub needs_reapproval: bool,
    pub rejection_reason: Option<String>,
    pub steps: Json,
    /// Exactly one of `user_id` / `anonymous_author_id` is set.
    pub user_id: Option<Uuid>,
    pub anonymous_author_id: Option<Uuid>,
    pub city_id: Option<Uuid>,
    pub approved_by: Option<Uuid>,
    pub approved_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
