use env_logger::{Builder, Target};
use std::{
    io::{self, IsTerminal, Write},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// Log output held back while the window owns the terminal.
#[derive(Clone, Default)]
pub(crate) struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Writes everything logged so far to `out` and empties the buffer.
    pub(crate) fn drain_into(&self, out: &mut impl Write) -> io::Result<()> {
        let mut buf = self.lock();
        out.write_all(&buf)?;
        buf.clear();
        out.flush()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sends `builder`'s output into `buffer`.
fn buffered<'a>(builder: &'a mut Builder, buffer: &LogBuffer) -> &'a mut Builder {
    builder.target(Target::Pipe(Box::new(buffer.clone())))
}

/// Sets up `env_logger` from `RUST_LOG`. When stderr is the terminal the
/// window draws on, records are buffered and returned for the caller to
/// print once the terminal is restored.
pub(crate) fn init() -> Option<LogBuffer> {
    let mut builder = Builder::from_default_env();
    if !io::stderr().is_terminal() {
        builder.init();
        return None;
    }
    let buffer = LogBuffer::default();
    buffered(&mut builder, &buffer).init();
    Some(buffer)
}
