//! The `Logger` contract, its console implementation, and a component that
//! receives one through the generic path.

use crate::error::MissingDependency;
use crate::{injectable, instantiate_default};
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// Prefix `ConsoleLogger` puts in front of every message.
pub const LOG_PREFIX: &str = "LOG: ";

/// Message `Announcer::run` emits.
pub const COMPLETION_MESSAGE: &str = "Injection completed successfully!";

pub trait Logger: Send + Sync {
  fn log(&self, message: &str);
}

type Sink = Arc<Mutex<dyn Write + Send>>;

/// Writes each message behind [`LOG_PREFIX`], one line per message.
///
/// The output goes to stdout unless a sink was set with
/// [`with_sink`](Self::with_sink).
#[derive(Default, Clone)]
pub struct ConsoleLogger {
  sink: Option<Sink>,
}

instantiate_default!(ConsoleLogger);

impl ConsoleLogger {
  /// The exact line `log` writes for `message`, without the newline.
  pub fn render(message: &str) -> String {
    format!("{}{}", LOG_PREFIX, message)
  }

  /// Redirects the output to `sink`.
  ///
  /// ```
  /// use fibre_wire::{BindingRegistry, ConsoleLogger, Logger};
  ///
  /// let mut builder = BindingRegistry::builder();
  /// builder.register::<dyn Logger, ConsoleLogger>(|logger| {
  ///   Box::new(logger.with_sink(std::io::stderr()))
  /// });
  /// ```
  pub fn with_sink(mut self, sink: impl Write + Send + 'static) -> Self {
    let sink: Sink = Arc::new(Mutex::new(sink));
    self.sink = Some(sink);
    self
  }

  fn write_line(&self, line: &str) -> io::Result<()> {
    match &self.sink {
      Some(sink) => writeln!(sink.lock(), "{}", line),
      None => writeln!(io::stdout().lock(), "{}", line),
    }
  }
}

impl fmt::Debug for ConsoleLogger {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let target = if self.sink.is_some() { "sink" } else { "stdout" };
    f.debug_struct("ConsoleLogger").field("target", &target).finish()
  }
}

impl Logger for ConsoleLogger {
  fn log(&self, message: &str) {
    if let Err(err) = self.write_line(&Self::render(message)) {
      tracing::warn!(error = %err, "failed to write log line");
    }
  }
}

/// A component whose only dependency is an injected logger.
#[derive(Default)]
pub struct Announcer {
  logger: Option<Box<dyn Logger>>,
}

injectable!(Announcer {
  logger: Inject => contract dyn Logger,
});

impl Announcer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn is_wired(&self) -> bool {
    self.logger.is_some()
  }

  /// Passes `message` to the logger unchanged.
  pub fn announce(&self, message: &str) -> Result<(), MissingDependency> {
    let logger = self.logger.as_ref().ok_or(MissingDependency {
      target: std::any::type_name::<Self>(),
      field: "logger",
    })?;
    logger.log(message);
    Ok(())
  }

  pub fn run(&self) -> Result<(), MissingDependency> {
    self.announce(COMPLETION_MESSAGE)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn render_only_adds_prefix() {
    assert_eq!(ConsoleLogger::render("¡hola!"), "LOG: ¡hola!");
  }

  #[test]
  fn log_writes_one_prefixed_line_to_sink() {
    let output = Arc::new(Mutex::new(Vec::new()));
    let logger = ConsoleLogger::default().with_sink(SharedBuffer(output.clone()));

    logger.log("first");
    logger.log("second");

    assert_eq!(
      String::from_utf8(output.lock().clone()).unwrap(),
      "LOG: first\nLOG: second\n"
    );
  }

  struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

  impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      self.0.lock().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  #[test]
  fn unwired_announcer_reports_missing_logger() {
    let err = Announcer::new().run().unwrap_err();
    assert_eq!(err.field, "logger");
    assert!(err.target.ends_with("Announcer"));
  }
}
