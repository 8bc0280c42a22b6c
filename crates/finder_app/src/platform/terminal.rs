use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::mpsc;
use std::thread;

use finder_logging::{finder_debug, finder_warn};

/// Input from the user side of the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Line(String),
    Closed,
}

/// Reads stdin on a background thread; one `Line` per entered line.
pub fn spawn_input_reader(tx: mpsc::Sender<UiEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        forward_lines(stdin.lock(), &tx);
    });
}

/// Sends every line of `reader` to `tx`, then `Closed`.
///
/// Bytes that are not valid UTF-8 are replaced rather than ending input; only
/// end of input or a read error stops the loop.
fn forward_lines<R: BufRead>(mut reader: R, tx: &mpsc::Sender<UiEvent>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                let line = line.trim_end_matches(['\n', '\r']).to_string();
                if tx.send(UiEvent::Line(line)).is_err() {
                    return;
                }
            }
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => {
                finder_warn!("Failed to read input: {}", err);
                break;
            }
        }
    }
    finder_debug!("Input closed");
    let _ = tx.send(UiEvent::Closed);
}

/// Output side of the page. Each draw replaces the previous page when the
/// writer is an interactive terminal.
pub struct Screen<W: Write> {
    out: W,
    interactive: bool,
}

impl Screen<io::Stdout> {
    pub fn stdout() -> Self {
        let out = io::stdout();
        let interactive = out.is_terminal();
        Self { out, interactive }
    }
}

impl<W: Write> Screen<W> {
    #[cfg(test)]
    pub fn plain(out: W) -> Self {
        Self {
            out,
            interactive: false,
        }
    }

    /// Whether link hyperlink escapes should be emitted.
    pub fn supports_hyperlinks(&self) -> bool {
        self.interactive
    }

    pub fn draw(&mut self, page: &str) {
        let result = if self.interactive {
            write!(self.out, "\x1b[2J\x1b[H{page}")
        } else {
            write!(self.out, "{page}")
        };
        if let Err(err) = result.and_then(|_| self.out.flush()) {
            finder_warn!("Failed to draw page: {}", err);
        }
    }

    pub fn notice(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{text}").and_then(|_| self.out.flush()) {
            finder_warn!("Failed to write notice: {}", err);
        }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }
}
