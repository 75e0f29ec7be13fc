pub mod example;
pub mod fetch;

use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand};

use crate::infrastructure::client::DEFAULT_API_URL;
use example::ExampleCommand;
use fetch::FetchCommand;

#[derive(Debug, Parser)]
#[command(author, version, about = "Find product images through the image fetch API", long_about = None)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "IMAGEFETCH_API_URL",
        default_value = DEFAULT_API_URL
    )]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the image form as a web page
    Serve(ServeCommand),

    /// Submit the form once and print the resulting image cards
    Fetch(FetchCommand),

    /// Print the example request without sending it
    Example(ExampleCommand),
}

#[derive(Debug, Args)]
pub struct ServeCommand {
    #[arg(long, env = "IMAGEFETCH_BIND_ADDRESS", default_value = "127.0.0.1:3000")]
    pub bind_address: SocketAddr,
}

pub(crate) fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
