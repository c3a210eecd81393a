pub mod roles;
pub mod settings;

pub use roles::{RoleResolver, DEFAULT_CREATOR_ROLE_ID};
pub use settings::{ConfigError, DashboardConfiguration, RolesConfig};
