//! Byte-stream framing

use tracing::trace;

use super::FRAME_SEPARATOR;

/// Accumulates transport chunks and splits them into frames.
///
/// Data after the last separator is kept until a later chunk completes it.
#[derive(Debug, Default)]
pub struct FrameReader {
    buf: Vec<u8>,
    /// Offset up to which `buf` is known not to contain a separator
    scanned: usize,
}

impl FrameReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk read from the transport
    pub fn push(&mut self, chunk: &[u8]) {
        self.buf.extend_from_slice(chunk);
    }

    /// Next complete, non-empty frame in arrival order
    pub fn next_frame(&mut self) -> Option<Vec<u8>> {
        loop {
            let found = self.buf[self.scanned..]
                .windows(FRAME_SEPARATOR.len())
                .position(|w| w == FRAME_SEPARATOR);

            let Some(rel) = found else {
                // A separator may straddle the end of the buffer
                self.scanned = self.buf.len().saturating_sub(FRAME_SEPARATOR.len() - 1);
                return None;
            };

            let end = self.scanned + rel;
            let mut frame: Vec<u8> = self.buf.drain(..end + FRAME_SEPARATOR.len()).collect();
            frame.truncate(end);
            self.scanned = 0;

            if frame.is_empty() {
                trace!("Dropping empty frame");
                continue;
            }
            trace!("Framed {} bytes, {} pending", frame.len(), self.buf.len());
            return Some(frame);
        }
    }

    /// Push a chunk and collect every frame it completes
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<Vec<u8>> {
        self.push(chunk);
        std::iter::from_fn(|| self.next_frame()).collect()
    }

    /// Number of buffered bytes not yet framed
    pub fn pending(&self) -> usize {
        self.buf.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_frame() {
        let mut reader = FrameReader::new();
        assert_eq!(reader.feed(b"show\x0c\x0c"), vec![b"show".to_vec()]);
        assert_eq!(reader.pending(), 0);
    }

    #[test]
    fn test_multiple_frames_in_one_chunk() {
        let mut reader = FrameReader::new();
        let frames = reader.feed(b"hide\x0c\x0cmove\x0c1\x0c2\x0c\x0cshow\x0c\x0c");
        assert_eq!(
            frames,
            vec![b"hide".to_vec(), b"move\x0c1\x0c2".to_vec(), b"show".to_vec()]
        );
    }

    #[test]
    fn test_partial_frame_is_kept() {
        let mut reader = FrameReader::new();
        assert!(reader.feed(b"sel").is_empty());
        assert!(reader.feed(b"ect\x0c3\x0c1").is_empty());
        assert_eq!(reader.pending(), 10);
        assert_eq!(reader.feed(b"\x0c\x0cshow"), vec![b"select\x0c3\x0c1".to_vec()]);
        assert_eq!(reader.pending(), 4);
    }

    #[test]
    fn test_separator_split_across_chunks() {
        let mut reader = FrameReader::new();
        assert!(reader.feed(b"show\x0c").is_empty());
        assert_eq!(reader.feed(b"\x0c"), vec![b"show".to_vec()]);
    }

    #[test]
    fn test_byte_at_a_time() {
        let mut reader = FrameReader::new();
        let mut frames = Vec::new();
        for &b in b"hide\x0c\x0cdeactivate\x0c\x0c" {
            frames.extend(reader.feed(&[b]));
        }
        assert_eq!(frames, vec![b"hide".to_vec(), b"deactivate".to_vec()]);
    }

    #[test]
    fn test_empty_frames_are_dropped() {
        let mut reader = FrameReader::new();
        let frames = reader.feed(b"\x0c\x0c\x0c\x0chide\x0c\x0c\x0c\x0c");
        assert_eq!(frames, vec![b"hide".to_vec()]);
    }

    #[test]
    fn test_odd_run_of_separators_starts_next_frame() {
        let mut reader = FrameReader::new();
        let frames = reader.feed(b"a\x0c\x0c\x0cb\x0c\x0c");
        assert_eq!(frames, vec![b"a".to_vec(), b"\x0cb".to_vec()]);
    }
}
