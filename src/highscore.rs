use std::io::ErrorKind;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// The file in which the high score is persisted as a single decimal integer
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct HighScoreFile {
    /// `None` if no path was configured and the default location could not
    /// be determined
    path: Option<PathBuf>,
}

impl HighScoreFile {
    pub(crate) fn new(path: PathBuf) -> HighScoreFile {
        HighScoreFile { path: Some(path) }
    }

    /// The high score file at its default location inside the local data
    /// directory
    pub(crate) fn default_location() -> HighScoreFile {
        HighScoreFile {
            path: dirs::data_local_dir().map(|p| p.join("snake").join("highscore.txt")),
        }
    }

    /// Read the high score.  A missing or blank file counts as a high score
    /// of zero.
    pub(crate) fn load(&self) -> Result<u32, LoadError> {
        let path = self.path.as_deref().ok_or_else(LoadError::no_path)?;
        let src = match fs_err::read_to_string(path) {
            Ok(src) => src,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(LoadError::read(e)),
        };
        let line = src.lines().next().unwrap_or_default().trim();
        if line.is_empty() {
            Ok(0)
        } else {
            line.parse::<u32>().map_err(LoadError::parse)
        }
    }

    /// Overwrite the file with `score`, creating parent directories as
    /// needed
    pub(crate) fn save(&self, score: u32) -> Result<(), SaveError> {
        let path = self.path.as_deref().ok_or_else(SaveError::no_path)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        fs_err::write(path, score.to_string()).map_err(SaveError::write)?;
        Ok(())
    }
}

#[derive(Debug, Error)]
#[error("Failed to save high score to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn no_path() -> Self {
        SaveError(SaveErrorSource::NoPath)
    }

    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to write high score file")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read high score from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn no_path() -> Self {
        LoadError(LoadErrorSource::NoPath)
    }

    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn parse(e: ParseIntError) -> Self {
        LoadError(LoadErrorSource::Parse(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to read high score file")]
    Read(#[source] std::io::Error),
    #[error("high score file does not contain a valid score")]
    Parse(#[source] ParseIntError),
}
