use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::Document;

/// A physical representation a document can be written to and read back from.
pub trait Format {
    type Document: Document + Default;
    type Error: From<std::io::Error>;

    fn name() -> &'static str;

    fn write(buffer: &mut impl Write, document: &Self::Document) -> Result<(), Self::Error>;

    fn read(buffer: &mut impl BufRead) -> Result<Self::Document, Self::Error>;
}

pub fn write_file<F: Format, P: AsRef<Path>>(path: P, document: &F::Document) -> Result<(), F::Error> {
    let path = path.as_ref();
    log::debug!("writing {} document to {}", F::name(), path.display());

    let mut buffer = BufWriter::new(File::create(path)?);
    F::write(&mut buffer, document)?;
    buffer.flush()?;

    Ok(())
}

pub fn read_file<F: Format, P: AsRef<Path>>(path: P) -> Result<F::Document, F::Error> {
    let path = path.as_ref();
    log::debug!("reading {} document from {}", F::name(), path.display());

    let mut buffer = BufReader::new(File::open(path)?);
    F::read(&mut buffer)
}
