//! Movie detail command implementation.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use filmoteca::hooks::{CommentsHook, MovieHook};
use filmoteca::model::ResourceType;
use filmoteca::{ApiClient, CommentQuery, Pager};

use super::comments::print_comments;
use crate::output;

#[derive(Args, Debug)]
pub struct MovieArgs {
    /// Movie id
    pub id: String,

    /// Page of comments to show
    #[arg(long, default_value_t = 0)]
    pub comments_page: u32,

    /// Print the movie as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: MovieArgs, client: &ApiClient) -> Result<()> {
    let movie_hook = MovieHook::new(client.clone());
    let comments_hook = CommentsHook::new(client.clone());
    let pager = Pager::at(args.comments_page);

    tokio::join!(
        movie_hook.set_id(&args.id),
        comments_hook.set_query(pager.apply(&CommentQuery::for_movie(&args.id))),
    );

    let Some(movie) = movie_hook.movie().await else {
        bail!("Movie '{}' not found", args.id);
    };

    if args.json {
        return output::json_pretty(&movie);
    }

    println!(
        "{} ({})",
        movie.title.bold(),
        output::year(movie.release_date.as_ref())
    );
    output::optional_field("Tagline", movie.tagline.as_deref());
    if let Some(status) = movie.status {
        output::field("Status", status.as_str());
    }
    if let Some(runtime) = movie.runtime {
        output::field("Runtime", &format!("{runtime} min"));
    }
    if !movie.genres.is_empty() {
        output::field("Genres", &movie.genres.join(", "));
    }
    output::optional_field("Poster", movie.poster());
    output::optional_field("Trailer", movie.resource(ResourceType::Trailer));
    if let Some(overview) = &movie.overview {
        println!();
        println!("{}", overview);
    }

    println!();
    println!("{}", "Comments".underline());
    let comments = comments_hook.comments().await;
    print_comments(&comments, pager.page());

    Ok(())
}
