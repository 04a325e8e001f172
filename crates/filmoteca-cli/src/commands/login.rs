//! Login command implementation.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use filmoteca::{ApiClient, Credentials};

use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email
    pub email: String,

    /// Account password
    #[arg(long, env = "FILMOTECA_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub async fn run(args: LoginArgs, client: &ApiClient) -> Result<()> {
    let credentials = Credentials::new(&args.email, &args.password);

    eprintln!("{}", "Logging in...".dimmed());

    if !client.login_with(&credentials).await {
        bail!("Login failed: wrong email or password, or the server is unreachable");
    }

    let session = client.session().await;
    output::success("Logged in successfully");
    println!();
    output::field("Email", session.email.as_deref().unwrap_or(&args.email));
    output::optional_field("Name", session.name.as_deref());
    output::optional_field("Role", session.role.as_deref());

    Ok(())
}
