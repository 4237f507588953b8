use super::OutputWriter;
use crate::errors::Result;
use crate::scoring::Analysis;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_analysis(&mut self, analysis: &Analysis) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, analysis)?;
        writeln!(self.writer)?;
        Ok(())
    }
}
