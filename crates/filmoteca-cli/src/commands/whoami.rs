//! Whoami command implementation.

use anyhow::Result;
use clap::Args;
use filmoteca::{Access, ApiClient};

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs, client: &ApiClient) -> Result<()> {
    let session = session::require(client, Access::Authenticated).await?;

    output::optional_field("Email", session.email.as_deref());
    output::optional_field("Name", session.name.as_deref());
    output::optional_field("Role", session.role.as_deref());
    output::field("API", &client.api().to_string());

    Ok(())
}
