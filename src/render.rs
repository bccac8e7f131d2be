//! Render sinks receive the display text after every input.

use std::io::Write;

/// Something that can show the calculator display.
pub trait RenderSink {
    fn render(&mut self, display: &str) -> anyhow::Result<()>;
}

/// Records every frame. Handy for tests and for printing only the last value.
impl RenderSink for Vec<String> {
    fn render(&mut self, display: &str) -> anyhow::Result<()> {
        self.push(display.to_string());
        Ok(())
    }
}

/// Writes one line per frame to any writer.
pub struct LineSink<W: Write> {
    writer: W,
}

impl<W: Write> LineSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> RenderSink for LineSink<W> {
    fn render(&mut self, display: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", display)?;
        Ok(())
    }
}
