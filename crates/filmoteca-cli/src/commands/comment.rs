//! Comment command implementation.

use anyhow::{Result, bail};
use clap::Args;
use filmoteca::hooks::{CommentsHook, MutationStatus};
use filmoteca::model::NewComment;
use filmoteca::{Access, ApiClient, CommentQuery};

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct CommentArgs {
    /// Movie id
    pub movie: String,

    /// Rating from 1 to 10
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub rating: u8,

    /// Comment text
    pub text: String,
}

pub async fn run(args: CommentArgs, client: &ApiClient) -> Result<()> {
    session::require(client, Access::Authenticated).await?;

    let comment = NewComment::new(&args.movie, args.rating, &args.text);
    let hook = CommentsHook::new(client.clone());
    hook.set_query(CommentQuery::for_movie(&args.movie)).await;

    if hook.create(&comment).await != MutationStatus::Success {
        bail!("Could not post the comment on movie '{}'", args.movie);
    }

    output::success("Comment posted");
    Ok(())
}
