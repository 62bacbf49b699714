use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use thiserror::Error;

pub mod samples;

use samples::sample_pitch;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Where the pitch text comes from. Exactly one source per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PitchSource {
    File(PathBuf),
    Stdin,
    Inline(String),
    Example(usize),
}

impl PitchSource {
    pub fn from_parts(
        input: Option<PathBuf>,
        text: Option<String>,
        example: Option<usize>,
    ) -> Result<Self, InputError> {
        match (input, text, example) {
            (Some(path), None, None) if path.as_os_str() == "-" => Ok(PitchSource::Stdin),
            (Some(path), None, None) => Ok(PitchSource::File(path)),
            (None, Some(text), None) => Ok(PitchSource::Inline(text)),
            (None, None, Some(idx)) => Ok(PitchSource::Example(idx)),
            (None, None, None) => Err(InputError::MissingInput(
                "provide one of --input, --text or --example".to_string(),
            )),
            _ => Err(InputError::InvalidInput(
                "--input, --text and --example are mutually exclusive".to_string(),
            )),
        }
    }
}

pub fn load_pitch(source: &PitchSource) -> Result<String, InputError> {
    match source {
        PitchSource::File(path) => read_pitch_file(path),
        PitchSource::Stdin => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        PitchSource::Inline(text) => Ok(text.clone()),
        PitchSource::Example(idx) => sample_pitch(*idx)
            .map(str::to_string)
            .ok_or_else(|| InputError::InvalidInput(format!("no example pitch #{idx}"))),
    }
}

/// Reads a pitch file, transparently decompressing `.gz` inputs.
pub fn read_pitch_file(path: &Path) -> Result<String, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(format!(
            "{} does not exist",
            path.display()
        )));
    }
    let file = File::open(path)?;
    let gzipped = path.extension().is_some_and(|ext| ext == "gz");
    let mut reader: Box<dyn Read> = if gzipped {
        Box::new(MultiGzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|e| {
        if gzipped && e.kind() != std::io::ErrorKind::NotFound {
            InputError::InvalidInput(format!("could not decompress {}: {e}", path.display()))
        } else {
            InputError::Io(e)
        }
    })?;
    let text = String::from_utf8(bytes).map_err(|_| {
        InputError::InvalidInput(format!("{} is not valid UTF-8 text", path.display()))
    })?;
    Ok(text)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
