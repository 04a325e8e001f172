//! Edit movie command implementation.

use anyhow::{Result, bail};
use clap::Args;
use filmoteca::hooks::{MovieHook, MutationStatus};
use filmoteca::model::MovieStatus;
use filmoteca::patch::MovieEdit;
use filmoteca::{Access, ApiClient};

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct EditMovieArgs {
    /// Movie id
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub overview: Option<String>,

    #[arg(long)]
    pub tagline: Option<String>,

    #[arg(long)]
    pub status: Option<MovieStatus>,

    /// Runtime in minutes
    #[arg(long)]
    pub runtime: Option<u32>,
}

pub async fn run(args: EditMovieArgs, client: &ApiClient) -> Result<()> {
    session::require(client, Access::Admin).await?;

    let hook = MovieHook::new(client.clone());
    hook.set_id(&args.id).await;
    let Some(movie) = hook.movie().await else {
        bail!("Movie '{}' not found", args.id);
    };

    let mut edit = MovieEdit::new(movie);
    if let Some(title) = args.title {
        edit.title = title;
    }
    if args.overview.is_some() {
        edit.overview = args.overview;
    }
    if args.tagline.is_some() {
        edit.tagline = args.tagline;
    }
    if args.status.is_some() {
        edit.status = args.status;
    }
    if args.runtime.is_some() {
        edit.runtime = args.runtime;
    }

    let ops = edit.operations();
    if ops.is_empty() {
        output::note("Nothing to change.");
        return Ok(());
    }

    match hook.update(&ops).await {
        MutationStatus::Success => {
            output::success(&format!("Updated {} field(s)", ops.len()));
            Ok(())
        }
        _ => bail!("Could not update movie '{}'", args.id),
    }
}
