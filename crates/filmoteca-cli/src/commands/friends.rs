//! Friend management commands.

use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use colored::Colorize;
use filmoteca::hooks::{MutationStatus, UserHook};
use filmoteca::{ApiClient, FriendStatus, PatchOperation, User};

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct FriendsCommand {
    #[command(subcommand)]
    pub command: Option<FriendsSubcommand>,
}

#[derive(Subcommand, Debug)]
pub enum FriendsSubcommand {
    /// List friends and pending requests (default)
    List,

    /// Send a friend request
    Add {
        email: String,

        /// Friend's display name (looked up when omitted)
        #[arg(long)]
        name: Option<String>,
    },

    /// Accept a pending request
    Accept { email: String },

    /// Decline a pending request
    Decline { email: String },

    /// Remove a friend
    Remove { email: String },
}

pub async fn handle(cmd: FriendsCommand, client: &ApiClient) -> Result<()> {
    let email = session::own_email(client).await?;
    let hook = UserHook::new(client.clone());
    hook.set_id(Some(email.as_str())).await;

    let (status, done) = match cmd.command.unwrap_or(FriendsSubcommand::List) {
        FriendsSubcommand::List => {
            let Some(user) = hook.user().await else {
                bail!("Could not load your profile");
            };
            print_friends(&user);
            return Ok(());
        }
        FriendsSubcommand::Add { email, name } => {
            let name = match name {
                Some(name) => name,
                None => match client.find_user(&email).await {
                    Some(friend) => friend.name,
                    None => bail!("No user found with email {email}"),
                },
            };
            (
                hook.add_friend(&email, &name).await,
                format!("Friend request sent to {name} <{email}>"),
            )
        }
        FriendsSubcommand::Accept { email } => {
            let ops = [PatchOperation::friend_status(FriendStatus::Accepted)];
            (
                hook.update_friend(&email, &ops).await,
                format!("{email} is now your friend"),
            )
        }
        FriendsSubcommand::Decline { email } => {
            let ops = [PatchOperation::friend_status(FriendStatus::Declined)];
            (
                hook.update_friend(&email, &ops).await,
                format!("Declined request from {email}"),
            )
        }
        FriendsSubcommand::Remove { email } => (
            hook.delete_friend(&email).await,
            format!("Removed {email}"),
        ),
    };

    if status != MutationStatus::Success {
        bail!("Friend operation failed");
    }
    output::success(&done);
    Ok(())
}

fn print_friends(user: &User) {
    let pending: Vec<_> = user.pending_requests().collect();
    let friends: Vec<_> = user.accepted_friends().collect();

    if pending.is_empty() && friends.is_empty() {
        output::note("No friends yet.");
        return;
    }

    if !pending.is_empty() {
        println!("{}", "Pending requests".underline());
        for request in pending {
            println!("  {} <{}>", request.friend_name, request.friend_email);
        }
        println!();
    }

    if !friends.is_empty() {
        println!("{}", "Friends".underline());
        for friend in friends {
            let since = friend.since().map(|d| d.to_string()).unwrap_or_default();
            println!(
                "  {} <{}> {}",
                friend.friend_name,
                friend.friend_email,
                since.dimmed()
            );
        }
    }
}
