use chrono::NaiveTime;
use log::debug;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Application-wide settings, adjustable from the admin console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Election name shown across the app and stamped onto archives.
    pub election_name: String,
    /// Default start-of-day time applied to newly created sessions.
    pub default_session_start: NaiveTime,
    /// Default end-of-day time applied to newly created sessions.
    pub default_session_end: NaiveTime,
    /// Whether voters may leave a category without choosing a candidate.
    pub allow_skip: bool,
    /// UI theme name. Opaque here, interpreted by the embedding UI.
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            election_name: "CampusVote General Election".to_string(),
            default_session_start: NaiveTime::from_hms_opt(9, 0, 0)
                .expect("09:00 is a valid time"),
            default_session_end: NaiveTime::from_hms_opt(17, 0, 0)
                .expect("17:00 is a valid time"),
            allow_skip: false,
            theme: "default".to_string(),
        }
    }
}

/// Owner of the live [`Settings`] value.
///
/// Reads hand out a clone; writers go through the setters so that validation
/// and logging happen in one place.
#[derive(Debug, Default)]
pub struct SettingsStore {
    inner: Mutex<Settings>,
}

impl SettingsStore {
    pub fn new(initial: Settings) -> Self {
        Self {
            inner: Mutex::new(initial),
        }
    }

    /// A snapshot of the current settings.
    pub fn get(&self) -> Settings {
        self.inner.lock().clone()
    }

    pub fn election_name(&self) -> String {
        self.inner.lock().election_name.clone()
    }

    pub fn allow_skip(&self) -> bool {
        self.inner.lock().allow_skip
    }

    pub fn set_election_name(&self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::validation("Election name cannot be empty."));
        }
        self.inner.lock().election_name = name.to_string();
        debug!("election name set to '{}'", name);
        Ok(())
    }

    pub fn set_default_session_times(&self, start: NaiveTime, end: NaiveTime) {
        let mut settings = self.inner.lock();
        settings.default_session_start = start;
        settings.default_session_end = end;
        debug!("default session times set to {} - {}", start, end);
    }

    pub fn set_allow_skip(&self, allow: bool) {
        self.inner.lock().allow_skip = allow;
        debug!("allow_skip set to {}", allow);
    }

    pub fn set_theme(&self, theme: &str) {
        self.inner.lock().theme = theme.to_string();
        debug!("theme set to '{}'", theme);
    }
}
