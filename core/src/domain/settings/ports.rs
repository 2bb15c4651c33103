use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    settings::entities::{SiteSettings, UpdateSettingsInput},
    user::value_objects::Identity,
};

#[cfg_attr(test, mockall::automock)]
pub trait SettingsRepository: Send + Sync {
    /// Missing keys fall back to [`SiteSettings::default`] values.
    fn load(&self) -> impl Future<Output = Result<SiteSettings, CoreError>> + Send;

    fn save(
        &self,
        settings: SiteSettings,
    ) -> impl Future<Output = Result<SiteSettings, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait SettingsService: Send + Sync {
    fn get_settings(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<SiteSettings, CoreError>> + Send;

    fn update_settings(
        &self,
        identity: Identity,
        input: UpdateSettingsInput,
    ) -> impl Future<Output = Result<SiteSettings, CoreError>> + Send;
}
