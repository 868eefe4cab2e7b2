use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::Level;

use crate::error::ShellError;

pub struct DelegatingWriter {
    inner: DelegatingInner,
}

enum DelegatingInner {
    File(Arc<File>),
    Sink(io::Sink),
}

impl Write for DelegatingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.inner {
            DelegatingInner::File(f) => (&**f).write(buf),
            DelegatingInner::Sink(s) => s.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.inner {
            DelegatingInner::File(f) => (&**f).flush(),
            DelegatingInner::Sink(s) => s.flush(),
        }
    }
}

/// Hands out writers for the fmt layer. Without a log file every record is
/// discarded: the shell owns the alternate screen and stderr would tear it.
#[derive(Clone, Debug, Default)]
pub struct SubscriberMakeWriter {
    file: Option<Arc<File>>,
}

impl SubscriberMakeWriter {
    pub fn discard() -> Self {
        Self { file: None }
    }

    /// Opens `path` for appending, creating it when missing.
    pub fn for_file(path: &Path) -> Result<Self, ShellError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|err| ShellError::Log(format!("{}: {err}", path.display())))?;
        Ok(Self {
            file: Some(Arc::new(file)),
        })
    }

    pub fn is_discarding(&self) -> bool {
        self.file.is_none()
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SubscriberMakeWriter {
    type Writer = DelegatingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        let inner = match &self.file {
            Some(file) => DelegatingInner::File(Arc::clone(file)),
            None => DelegatingInner::Sink(io::sink()),
        };
        DelegatingWriter { inner }
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// leave the first subscriber in place.
pub fn init(log_file: Option<&Path>, level: Level) -> Result<(), ShellError> {
    let writer = match log_file {
        Some(path) => SubscriberMakeWriter::for_file(path)?,
        None => SubscriberMakeWriter::discard(),
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn file_writer_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("desk.log");
        let make = SubscriberMakeWriter::for_file(&path).unwrap();
        assert!(!make.is_discarding());
        make.make_writer().write_all(b"first\n").unwrap();
        make.make_writer().write_all(b"second\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn unopenable_log_file_is_a_log_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("desk.log");
        let err = SubscriberMakeWriter::for_file(&path).unwrap_err();
        assert!(matches!(err, ShellError::Log(_)));
    }

    #[test]
    fn discard_writer_swallows_output() {
        let make = SubscriberMakeWriter::discard();
        assert!(make.is_discarding());
        let mut writer = make.make_writer();
        assert_eq!(writer.write(b"dropped").unwrap(), 7);
        writer.flush().unwrap();
    }
}
