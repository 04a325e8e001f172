//! Comment listing command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use filmoteca::hooks::CommentsHook;
use filmoteca::query::{COMMENT_PAGE_SIZE, Sort};
use filmoteca::{ApiClient, Assessment, CommentQuery, Page, Pager};

use crate::output;

#[derive(Args, Debug)]
pub struct CommentsArgs {
    /// Comments on this movie
    #[arg(long, required_unless_present = "user", conflicts_with = "user")]
    pub movie: Option<String>,

    /// Comments written by this user
    #[arg(long)]
    pub user: Option<String>,

    /// Sort keys, `-` for descending
    #[arg(long, allow_hyphen_values = true)]
    pub sort: Option<String>,

    /// Zero-based page index
    #[arg(long, default_value_t = 0)]
    pub page: u32,

    /// Comments per page
    #[arg(long, default_value_t = COMMENT_PAGE_SIZE)]
    pub size: u32,
}

pub async fn run(args: CommentsArgs, client: &ApiClient) -> Result<()> {
    let mut query = match (&args.movie, &args.user) {
        (Some(movie), _) => CommentQuery::for_movie(movie),
        (None, Some(user)) => CommentQuery::for_user(user),
        (None, None) => CommentQuery::default(),
    }
    .size(args.size);
    if let Some(sort) = &args.sort {
        query.sort = Sort::parse(sort);
    }

    let pager = Pager::at(args.page);
    let hook = CommentsHook::new(client.clone());
    hook.set_query(pager.apply(&query)).await;

    print_comments(&hook.comments().await, pager.page());
    Ok(())
}

/// Print a page of comments followed by its navigation line.
pub fn print_comments(page: &Page<Assessment>, index: u32) {
    if page.is_empty() {
        output::note("No comments yet.");
        return;
    }

    for comment in page {
        let author = comment
            .user
            .as_ref()
            .map(|u| if u.name.is_empty() { u.email.as_str() } else { u.name.as_str() })
            .unwrap_or("anonymous");
        let movie = comment
            .movie
            .as_ref()
            .map(|m| format!(" on {}", m.title))
            .unwrap_or_default();

        println!(
            "{} {}{}",
            output::stars(comment.rating).yellow(),
            author.bold(),
            movie.dimmed()
        );
        if !comment.comment.is_empty() {
            println!("  {}", comment.comment);
        }
    }
    println!();
    output::pager(page, index);
}
