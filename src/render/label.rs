//! Note label renderer - large block-letter note names
//!
//! Block letters come from an external text-art program (figlet). The
//! session only sees the [`LabelRenderer`] trait, so tests and alternative
//! front ends can swap in their own renderer.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::process::{Command, Output};

/// Default figlet font
pub const DEFAULT_FONT: &str = "big";

/// Default text-art program
pub const DEFAULT_PROGRAM: &str = "figlet";

/// Turns a short label into multi-line block text
pub trait LabelRenderer {
    fn render(&self, label: &str) -> Result<String, LabelError>;
}

impl<T: LabelRenderer + ?Sized> LabelRenderer for &T {
    fn render(&self, label: &str) -> Result<String, LabelError> {
        (**self).render(label)
    }
}

impl<T: LabelRenderer + ?Sized> LabelRenderer for Box<T> {
    fn render(&self, label: &str) -> Result<String, LabelError> {
        (**self).render(label)
    }
}

/// Errors from the external text-art program
#[derive(Debug)]
pub enum LabelError {
    /// The program could not be started (usually not installed)
    Unavailable { program: String, source: io::Error },
    /// The program ran but exited unsuccessfully
    Failed {
        program: String,
        status: Option<i32>,
        stderr: String,
    },
    /// The program's output was not valid UTF-8
    Encoding { program: String },
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelError::Unavailable { program, source } => {
                write!(f, "Could not run '{}': {} (is it installed?)", program, source)
            }
            LabelError::Failed {
                program,
                status,
                stderr,
            } => {
                match status {
                    Some(code) => write!(f, "'{}' exited with status {}", program, code)?,
                    None => write!(f, "'{}' was terminated by a signal", program)?,
                }
                if !stderr.trim().is_empty() {
                    write!(f, ": {}", stderr.trim())?;
                }
                Ok(())
            }
            LabelError::Encoding { program } => {
                write!(f, "'{}' produced output that is not valid UTF-8", program)
            }
        }
    }
}

impl std::error::Error for LabelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LabelError::Unavailable { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Renders labels by running `figlet -f <font> <label>`
#[derive(Debug, Clone)]
pub struct Figlet {
    program: OsString,
    font: String,
}

impl Figlet {
    pub fn new() -> Self {
        Self {
            program: OsString::from(DEFAULT_PROGRAM),
            font: DEFAULT_FONT.to_string(),
        }
    }

    /// Use a different figlet font
    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    /// Run a different program with figlet's command line
    pub fn program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    fn command(&self, label: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-f").arg(&self.font).arg(label);
        cmd
    }

    fn check(&self, output: Output) -> Result<String, LabelError> {
        if !output.status.success() {
            return Err(LabelError::Failed {
                program: self.program_name(),
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| LabelError::Encoding {
            program: self.program_name(),
        })
    }
}

impl Default for Figlet {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelRenderer for Figlet {
    fn render(&self, label: &str) -> Result<String, LabelError> {
        let output = self
            .command(label)
            .output()
            .map_err(|source| LabelError::Unavailable {
                program: self.program_name(),
                source,
            })?;

        log::trace!("{} rendered '{}' ({} bytes)", self.program_name(), label, output.stdout.len());
        self.check(output)
    }
}
