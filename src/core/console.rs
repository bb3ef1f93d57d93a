//! User-facing console output
//!
//! Scan tasks share one [`Console`]; every message is written under a single
//! lock so lines from concurrent tasks never tear.

use super::styles::StyleRole;
use std::io::Write;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Console {
    sink: Arc<Mutex<Box<dyn Write + Send>>>,
    color: bool,
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").field("color", &self.color).finish()
    }
}

impl Console {
    /// Console writing to the process stdout
    pub fn stdout(color: bool) -> Self {
        Self::with_writer(std::io::stdout(), color)
    }

    pub fn with_writer(writer: impl Write + Send + 'static, color: bool) -> Self {
        Self {
            sink: Arc::new(Mutex::new(Box::new(writer))),
            color,
        }
    }

    /// Console writing into an in-memory buffer, without colour
    pub fn capture() -> (Self, CaptureBuffer) {
        let buffer = CaptureBuffer::default();
        (Self::with_writer(buffer.clone(), false), buffer)
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    /// Write one styled line
    pub fn line(&self, role: StyleRole, text: &str) {
        let painted = role.paint(text, self.color);
        self.write_all(&format!("{}\n", painted));
    }

    /// Write text verbatim, terminated by a newline
    pub fn raw(&self, text: &str) {
        if text.ends_with('\n') {
            self.write_all(text);
        } else {
            self.write_all(&format!("{}\n", text));
        }
    }

    fn write_all(&self, text: &str) {
        // A poisoned lock only means another task panicked mid-write
        let mut sink = match self.sink.lock() {
            Ok(sink) => sink,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = sink.write_all(text.as_bytes()).and_then(|_| sink.flush()) {
            log::warn!("Failed to write console output: {}", e);
        }
    }
}

/// Shared in-memory sink returned by [`Console::capture`]
#[derive(Clone, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    pub fn contents(&self) -> String {
        let bytes = match self.bytes.lock() {
            Ok(bytes) => bytes,
            Err(poisoned) => poisoned.into_inner(),
        };
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut bytes = self
            .bytes
            .lock()
            .map_err(|_| std::io::Error::other("capture buffer poisoned"))?;
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
