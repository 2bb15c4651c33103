use crate::domain::{
    author::ports::AnonymousAuthorRepository,
    city::ports::CityRepository,
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    list::ports::{ListPolicy, ListRepository},
    recipe::ports::{RecipePolicy, RecipeRepository},
    report::{
        entities::{MAX_REPORT_MESSAGE_LEN, Report, Reportable},
        ports::{ReportRepository, ReportService},
        value_objects::{CreateReportInput, GetReportsFilter, UpdateReportInput},
    },
    revision::ports::RevisionRepository,
    settings::ports::SettingsRepository,
    structuring::ports::LLMClient,
    tag::ports::TagRepository,
    user::{ports::UserRepository, value_objects::Identity},
};

impl<U, RE, IN, TA, CI, AU, RV, LI, RP, SE, LLM, HC> ReportService
    for Service<U, RE, IN, TA, CI, AU, RV, LI, RP, SE, LLM, HC>
where
    U: UserRepository,
    RE: RecipeRepository,
    IN: IngredientRepository,
    TA: TagRepository,
    CI: CityRepository,
    AU: AnonymousAuthorRepository,
    RV: RevisionRepository,
    LI: ListRepository,
    RP: ReportRepository,
    SE: SettingsRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    async fn create_report(
        &self,
        identity: Identity,
        input: CreateReportInput,
    ) -> Result<Report, CoreError> {
        let message = input.message.trim();
        if message.is_empty() {
            return Err(CoreError::Validation(
                "a report needs a message".to_string(),
            ));
        }
        if message.chars().count() > MAX_REPORT_MESSAGE_LEN {
            return Err(CoreError::Validation(format!(
                "report message must be at most {MAX_REPORT_MESSAGE_LEN} characters"
            )));
        }

        // The target must resolve under the reporter's own visibility.
        match input.reportable {
            Reportable::Recipe(recipe_id) => {
                let recipe = self
                    .recipe_repository
                    .get_by_id(recipe_id)
                    .await?
                    .ok_or(CoreError::NotFound)?;
                if !RecipePolicy::can_view(&self.policy, Some(&identity), &recipe) {
                    return Err(CoreError::NotFound);
                }
            }
            Reportable::List(list_id) => {
                let list = self
                    .list_repository
                    .get_by_id(list_id)
                    .await?
                    .ok_or(CoreError::NotFound)?;
                if !ListPolicy::can_view(&self.policy, Some(&identity), &list) {
                    return Err(CoreError::NotFound);
                }
            }
        }

        let report = Report::new(
            identity.id(),
            input.reportable,
            input.kind,
            message.to_string(),
        );
        self.report_repository.create(report).await
    }

    async fn get_reports(
        &self,
        identity: Identity,
        filter: GetReportsFilter,
    ) -> Result<Vec<Report>, CoreError> {
        ensure_policy(
            Ok(identity.is_moderator()),
            "insufficient permissions to view reports",
        )?;

        self.report_repository.list(filter).await
    }

    async fn update_report(
        &self,
        identity: Identity,
        input: UpdateReportInput,
    ) -> Result<Report, CoreError> {
        ensure_policy(
            Ok(identity.is_moderator()),
            "insufficient permissions to resolve reports",
        )?;

        let mut report = self
            .report_repository
            .get_by_id(input.report_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        report.resolve(input.status, input.admin_note, input.admin_reply);
        self.report_repository.update(report).await
    }
}
