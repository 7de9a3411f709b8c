mod calculate;
mod model;
mod serve;
mod submit;

use clap::{Parser, Subcommand};

pub use self::{calculate::CalculateArgs, serve::ServeArgs, submit::SubmitArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Serve the calculator page and the `/calculator` endpoint.
    #[clap(name = "serve")]
    Serve(Box<ServeArgs>),

    /// Submit the calculator form to a running server.
    #[clap(name = "submit")]
    Submit(Box<SubmitArgs>),

    /// Calculate locally and print the breakdown.
    #[clap(name = "calculate")]
    Calculate(Box<CalculateArgs>),
}
