use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

/// Line-based terminal session: commands come in on `R`, text goes out on `W`.
pub struct GameIo<R, W> {
    lines: Lines<R>,
    out: W,
}

impl<R, W> GameIo<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(reader: R, out: W) -> Self {
        Self {
            lines: reader.lines(),
            out,
        }
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// `Ok(None)` once the input is closed.
    pub async fn prompt(&mut self) -> io::Result<Option<String>> {
        write!(self.out, "> ")?;
        self.out.flush()?;
        self.lines.next_line().await
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }
}
