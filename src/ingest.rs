use std::fs;
use std::path::Path;

use crate::errors::{StatementParseError, StatementResult};
use crate::parsers::prelude::{SantanderParser, to_delimited};

/// Non-breaking space in ISO-8859-1. The export embeds these where a field
/// separator belongs, so they are rewritten to ordinary spaces before the
/// scanner sees the text.
const NBSP: u8 = 0xA0;

/// Decode statement bytes as ISO-8859-1, mapping the non-breaking space to an
/// ordinary space. C1 control bytes never occur in a text export, so they are
/// rejected with their offset instead of being smuggled into the output.
pub fn decode_latin1(bytes: &[u8]) -> StatementResult<String> {
    let mut out = String::with_capacity(bytes.len());
    for (offset, &byte) in bytes.iter().enumerate() {
        match byte {
            0x80..=0x9F => {
                return Err(StatementParseError::InvalidEncoding { offset, byte });
            }
            NBSP => out.push(' '),
            _ => out.push(byte as char),
        }
    }
    Ok(out)
}

/// Read an ISO-8859-1 statement export, scan it into records and write the
/// delimited rendering to `output` as UTF-8. The output file is created or
/// overwritten; running twice on the same input produces identical bytes.
pub fn parse_statement_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> StatementResult<()> {
    let bytes = fs::read(input)?;
    let content = decode_latin1(&bytes)?;
    let entries = SantanderParser::scan(content.lines())?;
    fs::write(output, to_delimited(&entries))?;
    Ok(())
}
