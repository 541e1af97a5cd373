//! Note subdivisions and their length relative to one beat
//! A quarter note is the beat: multiplier 1

use serde::{Serialize, Serializer};

/// Exact ratio of a subdivision's duration to one beat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Multiplier {
    pub numerator: u32,
    pub denominator: u32,
}

impl Multiplier {
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self { numerator, denominator }
    }

    /// Evaluate the ratio as a float
    pub fn value(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl Serialize for Multiplier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

/// A named note value with its duration multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NoteSubdivision {
    pub name: &'static str,
    /// Short form, e.g. "1/8d"
    pub label: &'static str,
    pub multiplier: Multiplier,
}

impl NoteSubdivision {
    const fn new(
        name: &'static str,
        label: &'static str,
        numerator: u32,
        denominator: u32,
    ) -> Self {
        Self {
            name,
            label,
            multiplier: Multiplier::new(numerator, denominator),
        }
    }
}

/// All supported subdivisions, longest first. Consumers rely on this order.
pub static NOTE_SUBDIVISIONS: [NoteSubdivision; 14] = [
    NoteSubdivision::new("Whole Note (1/1)", "1/1", 4, 1),
    NoteSubdivision::new("Dotted Half (1/2d)", "1/2d", 3, 1),
    NoteSubdivision::new("Half Note (1/2)", "1/2", 2, 1),
    NoteSubdivision::new("Dotted Quarter (1/4d)", "1/4d", 3, 2),
    NoteSubdivision::new("Quarter Note (1/4)", "1/4", 1, 1),
    NoteSubdivision::new("Dotted Eighth (1/8d)", "1/8d", 3, 4),
    NoteSubdivision::new("Quarter Note Triplet (1/4t)", "1/4t", 2, 3),
    NoteSubdivision::new("Eighth Note (1/8)", "1/8", 1, 2),
    NoteSubdivision::new("Dotted Sixteenth (1/16d)", "1/16d", 3, 8),
    NoteSubdivision::new("Eighth Note Triplet (1/8t)", "1/8t", 1, 3),
    NoteSubdivision::new("Sixteenth Note (1/16)", "1/16", 1, 4),
    NoteSubdivision::new("Sixteenth Note Triplet (1/16t)", "1/16t", 1, 6),
    NoteSubdivision::new("Thirty-Second Note (1/32)", "1/32", 1, 8),
    NoteSubdivision::new("Sixty-Fourth Note (1/64)", "1/64", 1, 16),
];
