use crate::domain::author::entities::AnonymousAuthor;
use crate::entity::anonymous_authors::Model as AuthorModel;

impl From<AuthorModel> for AnonymousAuthor {
    fn from(model: AuthorModel) -> Self {
        AnonymousAuthor {
            id: model.id,
            name: model.name,
            bio: model.bio,
        }
    }
}
