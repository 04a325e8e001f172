//! Movie listing command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use filmoteca::hooks::MoviesHook;
use filmoteca::model::MovieStatus;
use filmoteca::query::{MOVIE_PAGE_SIZE, Sort};
use filmoteca::{ApiClient, MovieQuery, Pager};

use crate::output;

#[derive(Args, Debug)]
pub struct MoviesArgs {
    /// Only movies of this genre
    #[arg(long)]
    pub genre: Option<String>,

    /// Only movies whose title matches
    #[arg(long)]
    pub title: Option<String>,

    /// Only movies with this status (e.g. released, post-production)
    #[arg(long)]
    pub status: Option<MovieStatus>,

    /// Sort keys, `-` for descending (e.g. -rating,title)
    #[arg(long, allow_hyphen_values = true)]
    pub sort: Option<String>,

    /// Zero-based page index
    #[arg(long, default_value_t = 0)]
    pub page: u32,

    /// Movies per page
    #[arg(long, default_value_t = MOVIE_PAGE_SIZE)]
    pub size: u32,

    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
}

impl MoviesArgs {
    fn query(&self) -> MovieQuery {
        let mut query = MovieQuery::default().size(self.size);
        query.filter.genre = self.genre.clone();
        query.filter.title = self.title.clone();
        query.filter.status = self.status;
        if let Some(sort) = &self.sort {
            query.sort = Sort::parse(sort);
        }
        query
    }
}

pub async fn run(args: MoviesArgs, client: &ApiClient) -> Result<()> {
    let hook = MoviesHook::new(client.clone());
    let pager = Pager::at(args.page);
    hook.set_query(pager.apply(&args.query())).await;

    let page = hook.movies().await;
    if args.json {
        return output::json_pretty(&page);
    }

    if page.is_empty() {
        output::note("No movies found.");
        return Ok(());
    }

    for movie in &page {
        let status = movie.status.map(|s| s.to_string()).unwrap_or_default();
        println!(
            "{:>8}  {} ({})  {}  {}",
            movie.id.dimmed(),
            movie.title.bold(),
            output::year(movie.release_date.as_ref()),
            movie.genres.join(", ").cyan(),
            status.dimmed()
        );
    }
    println!();
    output::pager(&page, pager.page());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        args: MoviesArgs,
    }

    #[test]
    fn arguments_build_query() {
        let wrapper = Wrapper::try_parse_from([
            "movies", "--genre", "Action", "--sort", "-rating", "--page", "2",
        ])
        .unwrap();
        let query = Pager::at(wrapper.args.page).apply(&wrapper.args.query());
        assert_eq!(query.query_string(), "genres=Action&sort=-rating&page=2&size=7");
    }
}
