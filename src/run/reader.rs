//! Reading events from the runner's output as they arrive.

use crate::model::Event;
use std::io::{self, BufRead};

/// A lazy, finite stream of events decoded from newline-delimited output.
///
/// Each call to `next` blocks until a further line is available or the
/// underlying reader reaches end of input; lines are never buffered ahead.
/// Lines that aren't JSON (including ones that aren't UTF-8) are dropped.
/// Once the stream ends it stays ended.
pub struct EventStream<R> {
    reader: R,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> EventStream<R> {
    /// Constructs an event stream over `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for EventStream<R> {
    type Item = io::Result<Event>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => self.done = true,
                Ok(_) => {
                    let line = trim_line(&self.buf);
                    if let Some(event) = Event::decode(line) {
                        return Some(Ok(event));
                    }
                    tracing::trace!(line = %String::from_utf8_lossy(line), "dropping non-JSON line");
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

/// Strips the line terminator (`\n` or `\r\n`) from a line.
fn trim_line(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::{collections::VecDeque, io::Cursor};

    fn events(input: &[u8]) -> Vec<Event> {
        EventStream::new(Cursor::new(input.to_vec()))
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_drops_noise() {
        let input = b"============ test session starts ============\n\
            {\"_type\": \"session_start\", \"test_number\": 1}\n\
            \n\
            {not json\n\
            \xff\xfe\n\
            {\"_type\": \"test_result\", \"id\": \"t1\", \"outcome\": \"passed\"}\r\n\
            {\"hello\": \"world\"}";

        let got = events(input);
        assert_eq!(got.len(), 3);
        assert_eq!(got[0], Event::SessionStart { test_number: Some(1) });
        assert!(matches!(&got[1], Event::TestResult(r) if r.id == "t1"));
        assert_eq!(got[2], Event::Unrecognized(json!({"hello": "world"})));
    }

    #[test]
    fn test_empty_input() {
        assert!(events(b"").is_empty());
    }

    #[test]
    /// The stream is fused once it reaches end of input.
    fn test_not_restartable() {
        let mut stream = EventStream::new(Cursor::new(b"1\n".to_vec()));
        assert!(matches!(stream.next(), Some(Ok(Event::Unrecognized(_)))));
        assert!(stream.next().is_none());
        assert!(stream.next().is_none());
    }

    /// A reader that hands out one line per `fill_buf`, so that we can check
    /// events come out before the input is exhausted.
    struct Trickle {
        lines: VecDeque<Vec<u8>>,
        read: usize,
    }

    impl io::Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let avail = self.fill_buf()?;
            let n = avail.len().min(buf.len());
            buf[..n].copy_from_slice(&avail[..n]);
            self.consume(n);
            Ok(n)
        }
    }

    impl BufRead for Trickle {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            Ok(self.lines.front().map_or(&[][..], |l| &l[..]))
        }

        fn consume(&mut self, amt: usize) {
            self.read += amt;
            if let Some(line) = self.lines.front_mut() {
                line.drain(..amt);
                if line.is_empty() {
                    self.lines.pop_front();
                }
            }
        }
    }

    #[test]
    fn test_yields_before_end_of_input() {
        let mut stream = EventStream::new(Trickle {
            lines: vec![b"{\"a\": 1}\n".to_vec(), b"{\"b\": 2}\n".to_vec()].into(),
            read: 0,
        });

        assert!(stream.next().is_some());
        assert_eq!(stream.reader.read, 9);
        assert!(stream.next().is_some());
        assert!(stream.next().is_none());
    }
}
