//! Line-oriented console boundary.
//!
//! The session only needs "read one line" and "print one line". `IoConsole`
//! adapts any `BufRead`/`Write` pair, so the binary runs on stdin/stdout and
//! tests run on in-memory buffers.

use std::io::{self, BufRead, Write};

/// Blocking line console.
pub trait Console {
    /// Read one line without its terminator. `Ok(None)` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Print one line.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// `Console` over a reader and a writer.
#[derive(Debug)]
pub struct IoConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> IoConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the console and return the writer (tests read the transcript
    /// back from it).
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl IoConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_lines_strips_terminators() {
        let mut console = IoConsole::new(Cursor::new("John\r\n 3 \nlast"), Vec::new());
        assert_eq!(console.read_line().unwrap(), Some("John".to_string()));
        assert_eq!(console.read_line().unwrap(), Some(" 3 ".to_string()));
        assert_eq!(console.read_line().unwrap(), Some("last".to_string()));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_empty_line_is_not_eof() {
        let mut console = IoConsole::new(Cursor::new("\n"), Vec::new());
        assert_eq!(console.read_line().unwrap(), Some(String::new()));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_write_line() {
        let mut console = IoConsole::new(Cursor::new(""), Vec::new());
        console.write_line("|||").unwrap();
        console.write_line("John's turn!").unwrap();
        let out = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(out, "|||\nJohn's turn!\n");
    }
}
