use anyhow::Result;
use eventsphere_core::api::ApiClient;
use eventsphere_core::config::EventSphereConfig;
use eventsphere_core::dashboard::Role;
use owo_colors::OwoColorize;

use super::{events, profile, watch};

/// Accepts a role name (`organizer` too) or its route, e.g. `/admin`.
pub fn parse_role(input: &str) -> Result<Role> {
    match Role::from_route(input.trim()) {
        Some(role) => Ok(role),
        None => Ok(input.parse::<Role>()?),
    }
}

/// Show the dashboard a role lands on.
pub async fn run(role: Role, client: ApiClient, config: EventSphereConfig) -> Result<()> {
    println!(
        "{} {} {}",
        "Opening".dimmed(),
        format!("{role} dashboard").bold(),
        format!("({})", role.route()).dimmed()
    );
    println!();

    match role {
        Role::Admin => profile::run(&client).await,
        Role::Organiser => watch::run(client, config, None, None).await,
        Role::User => events::run(None, config.selection_policy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_parse_from_names_and_routes() {
        assert_eq!(parse_role("/admin").unwrap(), Role::Admin);
        assert_eq!(parse_role("organizer").unwrap(), Role::Organiser);
        assert_eq!(parse_role(" User ").unwrap(), Role::User);
        assert!(parse_role("/guest").is_err());
    }
}
