//! Interactive hull construction: one gift-wrapping step per Enter key.

use anyhow::Result;
use hullsort::prelude::{Hull, HullCfg, HullWalk, Point};
use std::io::{BufRead, Write};

/// Drive a `HullWalk`, waiting for a line on `input` before each vertex.
///
/// Once `input` is exhausted the remaining steps run without waiting.
pub fn step_hull<R: BufRead, W: Write>(
    points: &[Point],
    cfg: HullCfg,
    mut input: R,
    mut out: W,
) -> Result<Hull> {
    writeln!(out, "Press Enter to build the convex hull one vertex at a time")?;
    let mut walk = HullWalk::with_cfg(points, cfg);
    let mut chain = Vec::new();
    let mut interactive = true;
    let mut line = String::new();
    loop {
        if interactive {
            line.clear();
            interactive = input.read_line(&mut line)? > 0;
        }
        let Some(vertex) = walk.next() else {
            break;
        };
        let vertex = vertex?;
        tracing::debug!(step = walk.steps(), x = vertex.x(), y = vertex.y(), "hull_vertex");
        writeln!(out, "{},{}", vertex.x(), vertex.y())?;
        chain.push(vertex);
    }
    writeln!(out, "End reached")?;
    Ok(Hull::from_closed_chain(chain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hullsort::prelude::CollinearPolicy;
    use std::cell::RefCell;
    use std::io::{self, Cursor, Read};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedOut(Rc<RefCell<Vec<u8>>>);

    impl SharedOut {
        fn lines(&self) -> usize {
            self.0.borrow().iter().filter(|&&b| b == b'\n').count()
        }
    }

    impl Write for SharedOut {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Hands out `presses` empty lines, then EOF. Records how many output
    /// lines had been written at each `read_line`.
    struct Keyboard {
        presses: usize,
        out: SharedOut,
        reads: Vec<usize>,
    }

    impl Read for Keyboard {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Ok(0)
        }
    }

    impl BufRead for Keyboard {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            Ok(&[])
        }
        fn consume(&mut self, _: usize) {}
        fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
            self.reads.push(self.out.lines());
            if self.presses == 0 {
                return Ok(0);
            }
            self.presses -= 1;
            buf.push('\n');
            Ok(1)
        }
    }

    fn square() -> Vec<Point> {
        [(0, 0), (4, 0), (4, 4), (0, 4), (2, 2)]
            .into_iter()
            .map(Point::from)
            .collect()
    }

    #[test]
    fn prints_one_vertex_per_line() {
        let mut out = Vec::new();
        let hull = step_hull(
            &square(),
            HullCfg::default(),
            Cursor::new("\n\n\n\n\n"),
            &mut out,
        )
        .unwrap();
        assert_eq!(hull.len(), 4);
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(&lines[1..], ["0,0", "4,0", "4,4", "0,4", "End reached"]);
    }

    #[test]
    fn waits_for_one_line_per_vertex_and_the_closing_step() {
        let out = SharedOut::default();
        let mut keys = Keyboard {
            presses: usize::MAX,
            out: out.clone(),
            reads: Vec::new(),
        };
        let hull = step_hull(&square(), HullCfg::default(), &mut keys, out.clone()).unwrap();
        assert_eq!(hull.len(), 4);
        // header, then one read before each of the 4 vertices and one before closing
        assert_eq!(keys.reads, [1, 2, 3, 4, 5]);
        assert_eq!(out.lines(), 6);
    }

    #[test]
    fn stops_reading_after_end_of_input() {
        let out = SharedOut::default();
        let mut keys = Keyboard {
            presses: 2,
            out: out.clone(),
            reads: Vec::new(),
        };
        step_hull(&square(), HullCfg::default(), &mut keys, out.clone()).unwrap();
        assert_eq!(keys.reads, [1, 2, 3]);
        let text = String::from_utf8(out.0.borrow().clone()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(&lines[1..], ["0,0", "4,0", "4,4", "0,4", "End reached"]);
    }

    #[test]
    fn finishes_when_input_ends_early() {
        let mut out = Vec::new();
        let hull = step_hull(&square(), HullCfg::default(), Cursor::new("\n"), &mut out).unwrap();
        assert_eq!(hull, hullsort::compute_hull(&square()).unwrap());
    }

    #[test]
    fn propagates_no_closure() {
        let pts: Vec<Point> = [(1, 0), (2, 0), (0, 0)].into_iter().map(Point::from).collect();
        let cfg = HullCfg {
            collinear: CollinearPolicy::ScanOrder,
        };
        let err = step_hull(&pts, cfg, Cursor::new(""), Vec::<u8>::new()).unwrap_err();
        assert!(err.to_string().contains("did not return"));
    }
}
