use crate::settings::DashboardConfiguration;

/// Role id granted dashboard creation when the descriptor names no creators.
/// The value is opaque; it matches whatever the identity store calls that role.
pub const DEFAULT_CREATOR_ROLE_ID: &str = "1";

/// Effective list of role ids allowed to create dashboards.
///
/// Resolved once from a configuration snapshot; immutable afterwards, so it is
/// safe to share across threads without locking.
#[derive(Debug, Clone)]
pub struct RoleResolver {
    creator_role_ids: Vec<String>,
}

impl RoleResolver {
    pub fn new(config: &DashboardConfiguration) -> Self {
        let mut creator_role_ids = vec![DEFAULT_CREATOR_ROLE_ID.to_string()];

        if let Some(roles) = &config.roles {
            if !roles.creators.is_empty() {
                // A configured list replaces the default outright.
                creator_role_ids = roles.creators.clone();
            }
        }

        Self { creator_role_ids }
    }

    pub fn creator_role_ids(&self) -> &[String] {
        &self.creator_role_ids
    }
}
