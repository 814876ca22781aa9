//! Seatbook CLI Application
//!
//! Interactive terminal front end for the seatbook booking core.

mod args;
mod cli;
mod input;
mod renderer;

use std::io;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use seatbook_core::{models::Role, RegistryBuilder};

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        role,
        no_color,
        seed,
    } = Args::parse();
    let role = Role::from(role);

    let registry = RegistryBuilder::new()
        .with_reference_seed(seed)
        .build()
        .context("Failed to initialize seat registry")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Seatbook started in {role} mode");

    Cli::new(registry, renderer, role, io::stdin().lock()).run()
}
