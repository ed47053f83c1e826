use std::{
    fs::File,
    io::{BufWriter, Write},
};

use crate::error::Error;

/// Writes one 16-character binary word per line.
pub struct Emitter<W: Write> {
    out: BufWriter<W>,
    name: String,
    count: usize,
}

impl Emitter<File> {
    /// Create (or truncate) the output file.
    pub fn create(path: &str) -> Result<Self, Error> {
        let file = File::create(path).map_err(|e| Error::FileCreate(path.to_string(), e))?;
        Ok(Emitter::new(file, path))
    }
}

impl<W: Write> Emitter<W> {
    pub fn new(inner: W, name: &str) -> Self {
        Emitter {
            out: BufWriter::new(inner),
            name: name.to_string(),
            count: 0,
        }
    }

    pub fn emit(&mut self, word: &str) -> Result<(), Error> {
        writeln!(self.out, "{}", word).map_err(|e| Error::FileWrite(self.name.clone(), e))?;
        self.count += 1;
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(self) -> Result<W, Error> {
        let name = self.name;
        self.out
            .into_inner()
            .map_err(|e| Error::FileWrite(name, e.into_error()))
    }
}
