use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("board {width}x{height} is too small, it needs at least {min_width}x{min_height} including the border")]
    BoardTooSmall { width: u16, height: u16, min_width: u16, min_height: u16 },

    #[error("board {width}x{height} is too large, it can be at most {max_width}x{max_height}")]
    BoardTooLarge { width: u16, height: u16, max_width: u16, max_height: u16 },

    #[error("terminal is {cols}x{rows} but the game needs {need_cols}x{need_rows}")]
    TerminalTooSmall { cols: u16, rows: u16, need_cols: u16, need_rows: u16 },

    #[error("terminal error: {0}")]
    Terminal(#[from] crossterm::ErrorKind),

    #[error("could not create log file {}: {source}", .path.display())]
    LogFile { path: PathBuf, source: io::Error },

    #[error("could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, Error>;
