use std::fmt;

// ---------------------------------------------------------------------------
// Field – the three columns a row contributes
// ---------------------------------------------------------------------------

/// The consumed columns of a CSV row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// First field.
    X,
    /// Second field.
    Y,
    /// Last field.
    Label,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::X => write!(f, "x"),
            Field::Y => write!(f, "y"),
            Field::Label => write!(f, "label"),
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the input file
// ---------------------------------------------------------------------------

/// A labelled 2-D point. Any fields between `y` and the label are dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub x: f64,
    pub y: f64,
    pub label: i64,
}

impl Record {
    pub fn new(x: f64, y: f64, label: i64) -> Self {
        Record { x, y, label }
    }

    pub fn point(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

// ---------------------------------------------------------------------------
// Cluster – all points sharing a label
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    /// Zero-based label, also the palette index.
    pub label: usize,
    /// Points in file order.
    pub points: Vec<[f64; 2]>,
}

impl Cluster {
    /// One-based name shown in the legend.
    pub fn display_name(&self) -> String {
        format!("cluster {}", self.label + 1)
    }
}
