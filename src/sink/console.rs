use crate::{sink::Sink, types::Message};
use std::io::{self, Write};
use tracing::error;

/// Renders each record to stdout as a human-readable block:
///
/// ```text
/// Level: INFO
///     Message: Talon1 Data
///     Fields:
///         Team: 2175
/// ```
///
/// This is a display format, not a machine-parseable one.
#[derive(Copy, Clone, Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }

    fn render<W: Write>(w: &mut W, message: &Message) -> io::Result<()> {
        writeln!(w, "Level: {}", message.level.name())?;
        writeln!(w, "    Message: {}", message.text)?;
        writeln!(w, "    Fields:")?;
        for field in &message.fields {
            writeln!(w, "        {}: {}", field.name, field.value)?;
        }
        Ok(())
    }
}

impl Sink for ConsoleSink {
    fn handle(&self, message: &Message) {
        let stdout = io::stdout();
        if let Err(e) = Self::render(&mut stdout.lock(), message) {
            error!("Failed to render a log record to stdout ({})", e.kind());
        }
    }
}
