use anyhow::Result;
use eventsphere_core::api::ApiClient;
use eventsphere_core::dashboard::AdminDashboard;

use super::with_spinner;
use crate::render::Render;

pub async fn run(client: &ApiClient) -> Result<()> {
    let dashboard = with_spinner("Loading EventSphere Admin", AdminDashboard::load(client)).await;

    println!("{}", dashboard.render());

    Ok(())
}
