use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    structuring::value_objects::{
        BulkTagOutcome, LlmCredentials, StructureContentInput, StructuredContent,
    },
    user::value_objects::Identity,
};

#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// One completion round trip. The reply is the raw model text; callers
    /// own fence-stripping and parsing.
    fn generate_text(
        &self,
        credentials: LlmCredentials,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait StructuringService: Send + Sync {
    fn structure_content(
        &self,
        identity: Identity,
        input: StructureContentInput,
    ) -> impl Future<Output = Result<StructuredContent, CoreError>> + Send;

    /// Retags each recipe independently. One failure is recorded and the
    /// loop continues.
    fn bulk_tag(
        &self,
        identity: Identity,
        recipe_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<BulkTagOutcome, CoreError>> + Send;
}
