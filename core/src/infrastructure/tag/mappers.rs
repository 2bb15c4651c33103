use crate::domain::tag::entities::Tag;
use crate::entity::tags::Model as TagModel;

impl From<TagModel> for Tag {
    fn from(model: TagModel) -> Self {
        Tag {
            id: model.id,
            name: model.name,
            slug: model.slug,
        }
    }
}
