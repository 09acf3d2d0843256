use crate::errors::TracerResult;
use crate::numerics::Vector3;
use csv::{QuoteStyle, Writer, WriterBuilder};
use std::io::Write;

/// Writes whitespace-separated columns with six decimals, one sample per row.
pub struct ColumnWriter<W: Write> {
    writer: Writer<W>,
    rows: usize,
}

impl<W: Write> ColumnWriter<W> {
    pub fn new(out: W) -> Self {
        let writer = WriterBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .flexible(true)
            .quote_style(QuoteStyle::Never)
            .from_writer(out);
        ColumnWriter { writer, rows: 0 }
    }

    /// `x y z vx vy vz`
    pub fn write_state(&mut self, r: &Vector3, v: &Vector3) -> TracerResult<()> {
        let record = vector_fields(r).chain(vector_fields(v));
        self.writer.write_record(record)?;
        self.rows += 1;
        Ok(())
    }

    /// `x y z vx vy vz index`
    pub fn write_crossing(&mut self, r: &Vector3, v: &Vector3, index: usize) -> TracerResult<()> {
        let record = vector_fields(r)
            .chain(vector_fields(v))
            .chain(std::iter::once(index.to_string()));
        self.writer.write_record(record)?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn flush(&mut self) -> TracerResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

fn vector_fields(v: &Vector3) -> impl Iterator<Item = String> {
    [v.x, v.y, v.z].into_iter().map(|c| format!("{:.6}", c))
}
