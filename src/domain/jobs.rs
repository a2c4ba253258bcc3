// src/domain/jobs.rs

/// Who may trigger scheduled jobs: any signed-in user, or a caller presenting
/// the cron secret as a bearer token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobAccessPolicy {
    cron_secret: Option<String>,
}

impl JobAccessPolicy {
    pub fn new(cron_secret: Option<String>) -> Self {
        Self {
            cron_secret: cron_secret.filter(|secret| !secret.is_empty()),
        }
    }

    /// `bearer_token` is the token part of an `Authorization: Bearer ...`
    /// header, if any.
    #[must_use]
    pub fn can_run(&self, has_user: bool, bearer_token: Option<&str>) -> bool {
        if has_user {
            return true;
        }
        match (self.cron_secret.as_deref(), bearer_token) {
            (Some(secret), Some(token)) => secret == token,
            _ => false,
        }
    }
}
