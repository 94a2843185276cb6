use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// rejection sampling gave up before finding an unoccupied cell
    NoFreeCell { attempts: usize },
    Window(winit::error::OsError),
    Pixels(pixels::Error),
    Logger(log::SetLoggerError),
    Io(std::io::Error),
    Json(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoFreeCell { attempts } => {
                write!(f, "no free cell found after {attempts} attempts")
            }
            Error::Window(err) => write!(f, "could not create window: {err}"),
            Error::Pixels(err) => write!(f, "frame buffer error: {err}"),
            Error::Logger(err) => write!(f, "could not install logger: {err}"),
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::Json(err) => write!(f, "json error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::NoFreeCell { .. } => None,
            Error::Window(err) => Some(err),
            Error::Pixels(err) => Some(err),
            Error::Logger(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
        }
    }
}

impl From<winit::error::OsError> for Error {
    fn from(err: winit::error::OsError) -> Self {
        Error::Window(err)
    }
}

impl From<pixels::Error> for Error {
    fn from(err: pixels::Error) -> Self {
        Error::Pixels(err)
    }
}

impl From<log::SetLoggerError> for Error {
    fn from(err: log::SetLoggerError) -> Self {
        Error::Logger(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
