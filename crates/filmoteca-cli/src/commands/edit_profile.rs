//! Edit profile command implementation.

use anyhow::{Result, bail};
use clap::Args;
use filmoteca::hooks::{MutationStatus, UserHook};
use filmoteca::model::Date;
use filmoteca::{Access, ApiClient, ProfileEdit};

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct EditProfileArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    /// Picture URL
    #[arg(long)]
    pub picture: Option<String>,

    /// Birthday as YYYY-MM-DD
    #[arg(long, value_parser = super::parse_date)]
    pub birthday: Option<Date>,
}

pub async fn run(args: EditProfileArgs, client: &ApiClient) -> Result<()> {
    let email = session::own_email(client).await?;
    session::require(client, Access::SelfOnly(email.clone())).await?;

    let hook = UserHook::new(client.clone());
    hook.set_id(Some(email.as_str())).await;
    let Some(user) = hook.user().await else {
        bail!("Could not load your profile");
    };

    let mut edit = ProfileEdit::new(user);
    if let Some(name) = args.name {
        edit.name = name;
    }
    if args.country.is_some() {
        edit.country = args.country;
    }
    if args.picture.is_some() {
        edit.picture = args.picture;
    }
    if args.birthday.is_some() {
        edit.birthday = args.birthday;
    }

    let ops = edit.operations();
    if ops.is_empty() {
        output::note("Nothing to change.");
        return Ok(());
    }

    match hook.update(&ops).await {
        MutationStatus::Success => {
            output::success("Profile updated");
            Ok(())
        }
        _ => bail!("Could not update your profile"),
    }
}
