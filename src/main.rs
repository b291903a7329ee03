#![doc = include_str!("../README.md")]

mod cli;

use clap::{Parser, crate_version};
use solar_as_produced::prelude::*;

use crate::cli::Args;

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    Args::parse().command.run()
}
