//! Profile command implementation.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use filmoteca::hooks::UserHook;
use filmoteca::{Access, ApiClient};

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// User email (defaults to the logged-in user)
    pub email: Option<String>,

    /// Print the profile as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ProfileArgs, client: &ApiClient) -> Result<()> {
    session::require(client, Access::Authenticated).await?;

    let hook = UserHook::new(client.clone());
    hook.set_id(args.email.as_deref()).await;
    let Some(user) = hook.user().await else {
        bail!("User not found");
    };

    if args.json {
        return output::json_pretty(&user);
    }

    println!("{}", user.name.bold());
    output::field("Email", &user.email);
    output::optional_field("Country", user.country.as_deref());
    output::optional_field("Picture", user.picture.as_deref());
    if let Some(birthday) = &user.birthday {
        output::field("Birthday", &birthday.to_string());
    }

    let friends: Vec<_> = user.accepted_friends().collect();
    if !friends.is_empty() {
        println!();
        println!("{}", "Friends".underline());
        for friend in friends {
            let since = friend.since().map(|d| d.to_string()).unwrap_or_default();
            println!("  {} <{}> {}", friend.friend_name, friend.friend_email, since.dimmed());
        }
    }

    Ok(())
}
