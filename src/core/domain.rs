use std::env;
use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by registry entries
pub trait Identifiable {
    fn id(&self) -> String;
}

pub const DEFAULT_LOAN_DAYS: i64 = 14;
pub const MAX_LOAN_DAYS: i64 = 3650;

// Configuration abstracts config options for the lending and ordering drivers
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub loan_days: i64,
    pub json_logs: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            loan_days: DEFAULT_LOAN_DAYS,
            json_logs: false,
        }
    }

    // from_env reads LMS_BRANCH, LMS_LOAN_DAYS and LMS_JSON_LOGS from the process environment
    pub fn from_env(branch_id: &str) -> Self {
        Self::from_lookup(branch_id, |key| env::var(key).ok())
    }

    // from_lookup overrides the defaults with whatever `lookup` finds. A loan
    // period that is unparsable or outside 1..=MAX_LOAN_DAYS keeps the default.
    pub fn from_lookup<F>(branch_id: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Configuration::new(branch_id);
        if let Some(branch) = lookup("LMS_BRANCH") {
            config.branch_id = branch;
        }
        if let Some(days) = lookup("LMS_LOAN_DAYS").and_then(|v| v.trim().parse::<i64>().ok()) {
            if (1..=MAX_LOAN_DAYS).contains(&days) {
                config.loan_days = days;
            }
        }
        if let Some(json) = lookup("LMS_JSON_LOGS") {
            config.json_logs = matches!(json.as_str(), "1" | "true" | "yes");
        }
        config
    }
}
