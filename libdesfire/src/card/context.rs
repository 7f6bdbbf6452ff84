// libdesfire-rs/libdesfire/src/card/context.rs

use crate::auth::AuthenticatedKey;
use crate::types::ApplicationId;

/// Session state that outlives a single command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardContext {
    /// `None` until the first successful select.
    pub selected_application: Option<ApplicationId>,
    pub authenticated: Option<AuthenticatedKey>,
}

impl CardContext {
    /// Record a newly selected application. Authentication never carries
    /// over to another application.
    pub fn select(&mut self, aid: ApplicationId) {
        self.selected_application = Some(aid);
        self.authenticated = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.is_some()
    }
}
