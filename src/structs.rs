use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Path of the config file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Log in as this user id instead of reading the session file.
    #[arg(long)]
    pub user_id: Option<String>,

    /// Username for `--user-id`, defaults to the id.
    #[arg(long, requires = "user_id")]
    pub username: Option<String>,

    /// Bearer token for `--user-id`.
    #[arg(long, requires = "user_id")]
    pub token: Option<String>,

    /// Skip the broker connection and only use REST.
    #[arg(long)]
    pub no_connect: bool,
}
