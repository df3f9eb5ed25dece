use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use simplelog::LevelFilter;

use crate::error::{Error, Result};
use crate::session::{MAX_SPEED, MIN_SPEED};
use crate::snake::INITIAL_LENGTH;

pub const DEFAULT_WIDTH: u16 = 30;
pub const DEFAULT_HEIGHT: u16 = 15;
pub const DEFAULT_SPEED: u32 = 5;

// Border on each side, the initial snake and one free cell for food.
const MIN_WIDTH: u16 = 2 + INITIAL_LENGTH as u16 + 1;
const MIN_HEIGHT: u16 = 2 + 1;
// Keeps the board plus the score panel within u16 screen coordinates.
pub const MAX_WIDTH: u16 = 500;
pub const MAX_HEIGHT: u16 = 500;

/// Steer a growing snake around a walled board in your terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Options {
    /// Ticks per second, also the points earned per food
    #[arg(short, long, default_value_t = DEFAULT_SPEED,
          value_parser = clap::value_parser!(u32).range(MIN_SPEED as i64..=MAX_SPEED as i64))]
    pub speed: u32,

    /// Board width including its border
    #[arg(long, default_value_t = DEFAULT_WIDTH,
          value_parser = clap::value_parser!(u16).range(..=MAX_WIDTH as i64))]
    pub width: u16,

    /// Board height including its border
    #[arg(long, default_value_t = DEFAULT_HEIGHT,
          value_parser = clap::value_parser!(u16).range(..=MAX_HEIGHT as i64))]
    pub height: u16,

    /// Seed for food placement, random when absent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write the log, the screen belongs to the game
    #[arg(long, default_value = "ringsnake.log")]
    pub log_file: PathBuf,

    /// Log verbosity
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub width: u16,
    pub height: u16,
    pub speed: u32,
    pub seed: Option<u64>,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Options {
    pub fn into_settings(self) -> Result<Settings> {
        if self.width < MIN_WIDTH || self.height < MIN_HEIGHT {
            return Err(Error::BoardTooSmall {
                width: self.width,
                height: self.height,
                min_width: MIN_WIDTH,
                min_height: MIN_HEIGHT,
            });
        }

        if self.width > MAX_WIDTH || self.height > MAX_HEIGHT {
            return Err(Error::BoardTooLarge {
                width: self.width,
                height: self.height,
                max_width: MAX_WIDTH,
                max_height: MAX_HEIGHT,
            });
        }

        Ok(Settings {
            width: self.width,
            height: self.height,
            speed: self.speed.clamp(MIN_SPEED, MAX_SPEED),
            seed: self.seed,
            log_file: self.log_file,
            log_level: self.log_level.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<Options, clap::Error> {
        Options::try_parse_from(std::iter::once("ringsnake").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_match_the_classic_board() {
        let settings = parse(&[]).unwrap().into_settings().unwrap();
        assert_eq!((settings.width, settings.height), (30, 15));
        assert_eq!(settings.speed, 5);
        assert_eq!(settings.seed, None);
        assert_eq!(settings.log_level, LevelFilter::Info);
    }

    #[test]
    fn reads_flags() {
        let opts = parse(&["--speed", "12", "--width", "20", "--height", "10", "--seed", "9"]).unwrap();
        let settings = opts.into_settings().unwrap();
        assert_eq!(settings.speed, 12);
        assert_eq!((settings.width, settings.height), (20, 10));
        assert_eq!(settings.seed, Some(9));

        let quiet = parse(&["--log-level", "warn"]).unwrap().into_settings().unwrap();
        assert_eq!(quiet.log_level, LevelFilter::Warn);
    }

    #[test]
    fn speed_out_of_range_is_rejected() {
        assert!(parse(&["--speed", "0"]).is_err());
        assert!(parse(&["--speed", "101"]).is_err());
    }

    #[test]
    fn tiny_board_is_rejected() {
        let err = parse(&["--width", "5"]).unwrap().into_settings().unwrap_err();
        assert!(matches!(err, Error::BoardTooSmall { width: 5, min_width: 6, .. }));

        let err = parse(&["--height", "2"]).unwrap().into_settings().unwrap_err();
        assert!(matches!(err, Error::BoardTooSmall { min_height: 3, .. }));

        assert!(parse(&["--width", "6", "--height", "3"]).unwrap().into_settings().is_ok());
    }

    #[test]
    fn oversized_board_is_rejected() {
        assert!(parse(&["--width", "65530"]).is_err());
        assert!(parse(&["--height", "501"]).is_err());

        let edge = parse(&["--width", "500", "--height", "500"]).unwrap().into_settings().unwrap();
        assert_eq!((edge.width, edge.height), (MAX_WIDTH, MAX_HEIGHT));

        let mut opts = parse(&[]).unwrap();
        opts.width = 65530;
        let err = opts.into_settings().unwrap_err();
        assert!(matches!(err, Error::BoardTooLarge { width: 65530, max_width: MAX_WIDTH, .. }));
    }
}
