use std::io::{self, BufRead};

/// Splits a byte stream into lines on `\n`, `\r\n` or a bare `\r`, decoding
/// each line lossily.
pub(crate) fn lines_lossy<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.split(b'\n').flat_map(|chunk| {
        let lines: Vec<io::Result<String>> = match chunk {
            Ok(mut bytes) => {
                if bytes.last() == Some(&b'\r') {
                    bytes.pop();
                }
                bytes
                    .split(|b| *b == b'\r')
                    .map(|line| Ok(String::from_utf8_lossy(line).into_owned()))
                    .collect()
            }
            Err(e) => vec![Err(e)],
        };
        lines
    })
}
