//! Subcommand implementations.

mod comment;
mod comments;
mod edit_movie;
mod edit_profile;
mod friends;
mod login;
mod logout;
mod movie;
mod movies;
mod profile;
mod register;
mod users;
mod whoami;

use anyhow::Result;
use clap::Subcommand;
use filmoteca::ApiClient;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and remember the session
    Login(login::LoginArgs),

    /// Forget the stored session
    Logout(logout::LogoutArgs),

    /// Display the active session
    Whoami(whoami::WhoamiArgs),

    /// Create a new account
    Register(register::RegisterArgs),

    /// List movies
    Movies(movies::MoviesArgs),

    /// Show one movie and its latest comments
    Movie(movie::MovieArgs),

    /// Change a movie's details (administrators only)
    EditMovie(edit_movie::EditMovieArgs),

    /// Show a user profile
    Profile(profile::ProfileArgs),

    /// Change your own profile
    EditProfile(edit_profile::EditProfileArgs),

    /// List comments of a movie or a user
    Comments(comments::CommentsArgs),

    /// Rate and comment on a movie
    Comment(comment::CommentArgs),

    /// Manage friends and friend requests
    Friends(friends::FriendsCommand),

    /// Look up users
    Users(users::UsersArgs),
}

pub async fn handle(cmd: Commands, client: &ApiClient) -> Result<()> {
    match cmd {
        Commands::Login(args) => login::run(args, client).await,
        Commands::Logout(args) => logout::run(args, client).await,
        Commands::Whoami(args) => whoami::run(args, client).await,
        Commands::Register(args) => register::run(args, client).await,
        Commands::Movies(args) => movies::run(args, client).await,
        Commands::Movie(args) => movie::run(args, client).await,
        Commands::EditMovie(args) => edit_movie::run(args, client).await,
        Commands::Profile(args) => profile::run(args, client).await,
        Commands::EditProfile(args) => edit_profile::run(args, client).await,
        Commands::Comments(args) => comments::run(args, client).await,
        Commands::Comment(args) => comment::run(args, client).await,
        Commands::Friends(cmd) => friends::handle(cmd, client).await,
        Commands::Users(args) => users::run(args, client).await,
    }
}

/// Parse a `YYYY-MM-DD` date argument.
pub(crate) fn parse_date(s: &str) -> Result<filmoteca::model::Date, String> {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(filmoteca::model::Date::from)
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}
