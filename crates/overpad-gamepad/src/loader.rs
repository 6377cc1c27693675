use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use thiserror::Error;

use overpad_ini::{Scanner, SyntaxError};
use overpad_surface::Surface;

use crate::builder::{self, BuildError};
use crate::gamepad::Gamepad;

/// Why a pad definition failed to load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The definition file could not be read.
    #[error("could not read pad definition: {0}")]
    Read(#[from] io::Error),
    /// The definition is structurally malformed.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// An entry was rejected by the button builder.
    #[error("line {line}: {reason}")]
    Invalid { line: u32, reason: BuildError },
}

impl LoadError {
    /// Line the failure is tied to, when there is one.
    pub fn line(&self) -> Option<u32> {
        match self {
            Self::Read(_) => None,
            Self::Syntax(err) => Some(err.line),
            Self::Invalid { line, .. } => Some(*line),
        }
    }
}

/// Builds a pad with the default capacity from an in-memory definition.
///
/// Loading is all or nothing: on error the partially built pad is dropped,
/// which releases every bitmap allocated so far.
pub fn parse_gamepad<S: Surface>(input: &str, surface: &mut S) -> Result<Gamepad<S>, LoadError> {
    let mut pad = Gamepad::new();
    parse_entries(input, surface, &mut pad)?;
    Ok(pad)
}

/// Resets `pad` and rebuilds it from `input`, honoring the pad's configured
/// capacity. On error the pad is left empty; a partial load is never
/// observable.
pub fn parse_gamepad_into<S: Surface>(
    input: &str,
    surface: &mut S,
    pad: &mut Gamepad<S>,
) -> Result<(), LoadError> {
    pad.clear();
    let result = parse_entries(input, surface, pad);
    if result.is_err() {
        pad.clear();
    }
    result
}

/// Reads and builds a pad definition from disk.
pub fn load_gamepad<S: Surface>(
    path: impl AsRef<Path>,
    surface: &mut S,
) -> Result<Gamepad<S>, LoadError> {
    let path = path.as_ref();
    debug!("loading pad definition from {}", path.display());
    let input = fs::read_to_string(path)?;
    parse_gamepad(&input, surface)
}

fn parse_entries<S: Surface>(
    input: &str,
    surface: &mut S,
    pad: &mut Gamepad<S>,
) -> Result<(), LoadError> {
    for entry in Scanner::new(input) {
        let entry = entry?;
        let button = pad
            .find_or_create(entry.section)
            .map_err(|reason| LoadError::Invalid {
                line: entry.line,
                reason,
            })?;
        builder::apply(surface, button, entry.key, entry.value).map_err(|reason| {
            LoadError::Invalid {
                line: entry.line,
                reason,
            }
        })?;
    }
    debug!("built {} buttons", pad.len());
    Ok(())
}
