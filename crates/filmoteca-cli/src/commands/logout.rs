//! Logout command implementation.

use anyhow::Result;
use clap::Args;
use filmoteca::ApiClient;

use crate::output;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs, client: &ApiClient) -> Result<()> {
    client.logout().await;
    output::success("Logged out");
    Ok(())
}
