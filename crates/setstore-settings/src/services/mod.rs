//! Settings service: validation and store/cache orchestration

mod settings_service;

pub use settings_service::{NewSetting, SettingUpdate, SettingWithTtl, SettingsService};
