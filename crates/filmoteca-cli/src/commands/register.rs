//! Register command implementation.

use anyhow::{Context, Result};
use clap::Args;
use filmoteca::hooks::{MutationStatus, UserHook};
use filmoteca::model::{Date, NewUser};
use filmoteca::{ApiClient, Email};

use crate::output;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Account email
    pub email: String,

    /// Display name
    #[arg(long)]
    pub name: String,

    /// Account password
    #[arg(long, env = "FILMOTECA_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Birthday as YYYY-MM-DD
    #[arg(long, value_parser = super::parse_date)]
    pub birthday: Date,

    /// Country
    #[arg(long)]
    pub country: Option<String>,

    /// Picture URL
    #[arg(long)]
    pub picture: Option<String>,
}

pub async fn run(args: RegisterArgs, client: &ApiClient) -> Result<()> {
    let email = Email::new(&args.email).context("Invalid email")?;

    let new_user = NewUser {
        email: email.to_string(),
        name: args.name,
        country: args.country,
        picture: args.picture,
        birthday: args.birthday,
        password: args.password,
    };

    let hook = UserHook::new(client.clone());
    if hook.create(&new_user).await != MutationStatus::Success {
        anyhow::bail!("Registration failed: the email may already be in use");
    }

    output::success("Account created");
    output::note("Run 'filmoteca login' to start a session.");
    if let Some(user) = hook.user().await {
        output::field("Email", &user.email);
        output::field("Name", &user.name);
    }

    Ok(())
}
