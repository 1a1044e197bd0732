use std::collections::VecDeque;

use ::log::error;

use crate::{Settings, SettingsRepository, SettingsService, ViewMode, log};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repository
    }
}

impl<R: log::Repository> log::Service for Service<R> {
    fn get_log_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.repository.read_entries()
    }

    fn add_log_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        self.repository.write_entry(entry)
    }
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    async fn get_settings(&self) -> Result<Settings, String> {
        self.repository
            .read_settings()
            .await
            .inspect_err(|err| error!("failed to read settings: {err}"))
    }

    async fn set_settings(&self, settings: Settings) -> Result<(), String> {
        self.repository
            .write_settings(settings)
            .await
            .inspect_err(|err| error!("failed to write settings: {err}"))
    }

    async fn toggle_view_mode(&self) -> Result<ViewMode, String> {
        let settings = self.get_settings().await?;
        let view_mode = settings.view_mode.toggled();
        self.set_settings(Settings {
            view_mode,
            ..settings
        })
        .await?;
        Ok(view_mode)
    }

    async fn set_api_url(&self, api_url: &str) -> Result<Settings, String> {
        let settings = self.get_settings().await?.with_api_url(api_url);
        self.set_settings(settings.clone()).await?;
        Ok(settings)
    }
}
