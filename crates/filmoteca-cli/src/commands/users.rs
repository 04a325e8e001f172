//! User search command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use filmoteca::{Access, ApiClient, Pager, UserQuery};

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct UsersArgs {
    /// Name to search for
    #[arg(long)]
    pub name: Option<String>,

    /// Email to search for
    #[arg(long)]
    pub email: Option<String>,

    /// Zero-based page index
    #[arg(long, default_value_t = 0)]
    pub page: u32,
}

pub async fn run(args: UsersArgs, client: &ApiClient) -> Result<()> {
    session::require(client, Access::Authenticated).await?;

    let mut query = UserQuery::default();
    query.name = args.name;
    query.email = args.email;
    let pager = Pager::at(args.page);

    let page = client.find_users(&pager.apply(&query)).await;
    if page.is_empty() {
        output::note("No users found.");
        return Ok(());
    }

    for user in &page {
        println!("{} <{}>", user.name.bold(), user.email);
    }
    println!();
    output::pager(&page, pager.page());

    Ok(())
}
