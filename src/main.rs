mod config;
mod dirqueue;
mod error;
mod food;
mod game;
mod geom;
mod input;
mod render;
mod ring;
mod session;
mod snake;
mod term;
mod ticker;

use std::fs::File;

use anyhow::Context;
use clap::Parser;
use log::info;
use simplelog::{Config, WriteLogger};

use crate::config::{Options, Settings};
use crate::error::Error;

fn init_logging(settings: &Settings) -> Result<(), Error> {
    let file = File::create(&settings.log_file)
        .map_err(|source| Error::LogFile { path: settings.log_file.clone(), source })?;
    WriteLogger::init(settings.log_level, Config::default(), file)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let settings = Options::parse().into_settings()?;
    init_logging(&settings)?;
    info!("starting with {:?}", settings);

    let mut game = game::SnakeGame::new(&settings).context("could not start the game")?;
    // The terminal is restored when `game` drops, before any error is printed.
    let res = game.play();
    drop(game);
    res.context("game aborted")
}
