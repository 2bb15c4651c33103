use crate::domain::common::{WasfaConfig, services::Service};
use crate::infrastructure::{
    author::PostgresAnonymousAuthorRepository,
    city::PostgresCityRepository,
    db::postgres::{Postgres, PostgresConfig},
    health::PostgresHealthCheckRepository,
    ingredient::PostgresIngredientRepository,
    list::PostgresListRepository,
    llm::GeminiLLMClient,
    recipe::PostgresRecipeRepository,
    report::PostgresReportRepository,
    revision::PostgresRevisionRepository,
    settings::PostgresSettingsRepository,
    tag::PostgresTagRepository,
    user::PostgresUserRepository,
};

pub type WasfaService = Service<
    PostgresUserRepository,
    PostgresRecipeRepository,
    PostgresIngredientRepository,
    PostgresTagRepository,
    PostgresCityRepository,
    PostgresAnonymousAuthorRepository,
    PostgresRevisionRepository,
    PostgresListRepository,
    PostgresReportRepository,
    PostgresSettingsRepository,
    GeminiLLMClient,
    PostgresHealthCheckRepository,
>;

/// Connects to Postgres, runs migrations, and wires every repository into
/// the aggregate service.
pub async fn create_service(config: WasfaConfig) -> Result<WasfaService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.connection_url(),
    })
    .await?;
    let db = postgres.get_db();

    Ok(Service::new(
        PostgresUserRepository::new(db.clone()),
        PostgresRecipeRepository::new(db.clone()),
        PostgresIngredientRepository::new(db.clone()),
        PostgresTagRepository::new(db.clone()),
        PostgresCityRepository::new(db.clone()),
        PostgresAnonymousAuthorRepository::new(db.clone()),
        PostgresRevisionRepository::new(db.clone()),
        PostgresListRepository::new(db.clone()),
        PostgresReportRepository::new(db.clone()),
        PostgresSettingsRepository::new(db.clone()),
        GeminiLLMClient::new(),
        PostgresHealthCheckRepository::new(db),
    ))
}
