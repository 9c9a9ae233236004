//! Raster conversion through Graphviz
//!
//! Runs `dot -T<format> -O <file>`, which writes `<file>.<format>` next to the
//! input. The wait is bounded; a process still running at the deadline is
//! killed.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::constants::render::{DOT_PROGRAM, DOT_TIMEOUT, POLL_INTERVAL, RASTER_FORMAT};
use crate::error::ModgraphError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterOutcome {
    /// The program exited successfully; the image is expected at this path
    Converted(PathBuf),
    TimedOut,
    Failed {
        status: Option<i32>,
        stderr: String,
    },
}

#[derive(Debug, Clone)]
pub struct DotRasterizer {
    program: String,
    format: String,
    timeout: Duration,
}

impl Default for DotRasterizer {
    fn default() -> Self {
        Self::new(DOT_PROGRAM)
    }
}

impl DotRasterizer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            format: RASTER_FORMAT.to_string(),
            timeout: DOT_TIMEOUT,
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Where `-O` places the image for `dot_file`
    pub fn output_path(&self, dot_file: &Path) -> PathBuf {
        let mut name = dot_file.as_os_str().to_os_string();
        name.push(".");
        name.push(&self.format);
        PathBuf::from(name)
    }

    pub fn rasterize(&self, dot_file: &Path) -> Result<RasterOutcome, ModgraphError> {
        let mut child = Command::new(&self.program)
            .arg(format!("-T{}", self.format))
            .arg("-O")
            .arg(dot_file)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ModgraphError::RenderCommandFailed {
                program: self.program.clone(),
                source,
            })?;

        // Drained concurrently so a chatty process never blocks on a full pipe
        let stderr_reader = child.stderr.take().map(|mut pipe| {
            thread::spawn(move || {
                let mut buffer = Vec::new();
                pipe.read_to_end(&mut buffer)
                    .map(|_| String::from_utf8_lossy(&buffer).into_owned())
            })
        });

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            if let Some(status) = child.try_wait()? {
                break Some(status);
            }
            if Instant::now() >= deadline {
                // Already exited or killed elsewhere if this fails
                let _ = child.kill();
                let _ = child.wait();
                break None;
            }
            thread::sleep(POLL_INTERVAL);
        };

        // On timeout the reader is left detached; a surviving grandchild may
        // still hold the pipe open
        let Some(status) = status else {
            return Ok(RasterOutcome::TimedOut);
        };

        let stderr = match stderr_reader {
            Some(reader) => reader.join().map_err(|_| {
                std::io::Error::other(format!("Reading stderr of '{}' panicked", self.program))
            })??,
            None => String::new(),
        };

        if status.success() {
            return Ok(RasterOutcome::Converted(self.output_path(dot_file)));
        }

        Ok(RasterOutcome::Failed {
            status: status.code(),
            stderr: stderr.trim().to_string(),
        })
    }
}
