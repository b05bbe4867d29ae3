use super::constants::*;
use ptvsign_core::Context;

/// Config carries all the configuration for the timetable client.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// `dev_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`PTV_DEV_ID`]
    pub dev_id: Option<String>,
    /// `api_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`PTV_API_KEY`]
    pub api_key: Option<String>,
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`PTV_ENDPOINT`]
    ///
    /// Defaults to the production host when unset.
    pub endpoint: Option<String>,
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(PTV_DEV_ID) {
            self.dev_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(PTV_API_KEY) {
            self.api_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(PTV_ENDPOINT) {
            self.endpoint.get_or_insert(v);
        }

        self
    }
}
