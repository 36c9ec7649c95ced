use crate::Error;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Opens a text file for reading, transparently decompressing it when the
/// file name ends in `.gz`.
pub fn open_text_reader(path: &Path) -> Result<Box<dyn Read>, Error> {
    let file = File::open(path).map_err(|e| {
        Error::IoError(std::io::Error::new(
            e.kind(),
            format!("Could not open {}: {}", path.display(), e),
        ))
    })?;

    let is_gzip = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("gz"));

    if is_gzip {
        Ok(Box::new(GzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}

/// Reads every line of a UTF-8 text file (gzip-aware). Line terminators are stripped.
pub fn read_text_lines(path: &Path) -> Result<Vec<String>, Error> {
    let reader = BufReader::new(open_text_reader(path)?);

    let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;

    Ok(lines)
}
