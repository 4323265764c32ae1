//! Parser for F-PHAB `skeleton.txt` recordings.
//!
//! One record per line: a timestamp token followed by 63 floats (21 joints,
//! xyz each, world coordinates in millimeters). No header. Blank lines are
//! ignored; lines that do not decode to exactly 21 points are logged and
//! skipped so a single corrupt record never discards a whole recording.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use glam::DVec3;
use log::{info, warn};

use crate::error::{Result, SkeletonError};
use crate::joint::{JOINT_COUNT, Joint};

/// Number of coordinate values expected per line (21 joints x 3 components)
pub const VALUES_PER_LINE: usize = JOINT_COUNT * 3;

/// One time sample of the hand skeleton, world coordinates in millimeters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Timestamp token from the recording (frame id in most F-PHAB files)
    pub timestamp: f64,
    /// Joint positions in dataset order
    pub joints: [DVec3; JOINT_COUNT],
}

impl Frame {
    /// Position of a joint in this frame
    pub fn joint(&self, joint: Joint) -> DVec3 {
        self.joints[joint.index()]
    }
}

/// An ordered sequence of parsed skeleton frames.
///
/// Only valid lines become frames; they keep their input order and are
/// assigned consecutive output frame numbers by the bake step. No uniform
/// time spacing is assumed between kept frames.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkeletonSequence {
    /// Frames in input order
    pub frames: Vec<Frame>,
    /// Count of malformed lines that were skipped during parsing
    pub skipped_lines: usize,
}

impl SkeletonSequence {
    /// Number of valid frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the sequence holds no frames
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Parse a recording from any buffered reader.
///
/// Malformed lines (wrong value count, unparseable number) are warned and
/// skipped; only I/O failures are fatal.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<SkeletonSequence> {
    let mut sequence = SkeletonSequence::default();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line, line_no + 1) {
            Ok(frame) => sequence.frames.push(frame),
            Err(err) => {
                warn!("{err} - skipping line");
                sequence.skipped_lines += 1;
            }
        }
    }

    Ok(sequence)
}

/// Parse a recording from a file on disk.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<SkeletonSequence> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let sequence = parse_reader(reader)?;
    info!(
        "loaded {} frames from {} ({} lines skipped)",
        sequence.len(),
        path.display(),
        sequence.skipped_lines
    );
    Ok(sequence)
}

/// Decode a single non-blank line into a frame.
fn parse_line(line: &str, line_no: usize) -> Result<Frame> {
    let mut tokens = line.split_whitespace();

    // A non-blank line always yields at least one token.
    let timestamp_token = tokens.next().unwrap_or_default();
    let timestamp = parse_float(timestamp_token, line_no)?;

    let mut values = [0.0_f64; VALUES_PER_LINE];
    let mut count = 0;
    for token in tokens {
        if count < VALUES_PER_LINE {
            values[count] = parse_float(token, line_no)?;
        }
        count += 1;
    }
    if count != VALUES_PER_LINE {
        return Err(SkeletonError::FieldCount {
            line: line_no,
            expected: VALUES_PER_LINE,
            found: count,
        });
    }

    let mut joints = [DVec3::ZERO; JOINT_COUNT];
    for (j, joint) in joints.iter_mut().enumerate() {
        *joint = DVec3::new(values[3 * j], values[3 * j + 1], values[3 * j + 2]);
    }

    Ok(Frame { timestamp, joints })
}

fn parse_float(token: &str, line_no: usize) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|_| SkeletonError::InvalidNumber {
            line: line_no,
            token: token.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// A line with the given timestamp and 21 joints at (base, base+1, base+2),
    /// (base+3, ...) and so on.
    fn make_line(timestamp: u32, base: f64) -> String {
        let mut line = timestamp.to_string();
        for i in 0..VALUES_PER_LINE {
            line.push(' ');
            line.push_str(&(base + i as f64).to_string());
        }
        line
    }

    #[test]
    fn test_parse_valid_line() {
        let input = make_line(0, 10.0);
        let sequence = parse_reader(Cursor::new(input)).unwrap();

        assert_eq!(sequence.len(), 1);
        assert_eq!(sequence.skipped_lines, 0);
        let frame = &sequence.frames[0];
        assert_eq!(frame.timestamp, 0.0);
        assert_eq!(frame.joint(Joint::Wrist), DVec3::new(10.0, 11.0, 12.0));
        assert_eq!(frame.joint(Joint::PinkyTip), DVec3::new(70.0, 71.0, 72.0));
    }

    #[test]
    fn test_blank_lines_ignored() {
        let input = format!("\n  \n{}\n\n{}\n", make_line(0, 0.0), make_line(1, 1.0));
        let sequence = parse_reader(Cursor::new(input)).unwrap();

        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.skipped_lines, 0);
    }

    #[test]
    fn test_wrong_field_count_skipped() {
        let input = format!("{}\n0 1.0 2.0 3.0\n{}\n", make_line(0, 0.0), make_line(2, 2.0));
        let sequence = parse_reader(Cursor::new(input)).unwrap();

        // The short line is dropped; the surviving frames keep their order.
        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.skipped_lines, 1);
        assert_eq!(sequence.frames[0].timestamp, 0.0);
        assert_eq!(sequence.frames[1].timestamp, 2.0);
    }

    #[test]
    fn test_excess_fields_skipped() {
        let mut long = make_line(0, 0.0);
        long.push_str(" 99.0");
        let sequence = parse_reader(Cursor::new(long)).unwrap();

        assert_eq!(sequence.len(), 0);
        assert_eq!(sequence.skipped_lines, 1);
    }

    #[test]
    fn test_non_numeric_token_skipped() {
        let bad = make_line(0, 0.0).replace("41", "oops");
        let input = format!("{bad}\n{}\n", make_line(1, 1.0));
        let sequence = parse_reader(Cursor::new(input)).unwrap();

        assert_eq!(sequence.len(), 1);
        assert_eq!(sequence.skipped_lines, 1);
    }

    #[test]
    fn test_empty_input_yields_empty_sequence() {
        let sequence = parse_reader(Cursor::new("")).unwrap();
        assert!(sequence.is_empty());
        assert_eq!(sequence.skipped_lines, 0);
    }

    #[test]
    fn test_parse_line_error_reports_line_number() {
        let err = parse_line("5 1.0 2.0", 7).unwrap_err();
        match err {
            SkeletonError::FieldCount { line, expected, found } => {
                assert_eq!(line, 7);
                assert_eq!(expected, 63);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
