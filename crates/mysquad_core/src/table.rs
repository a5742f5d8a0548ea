//! Tabular projections handed to an external renderer.
//!
//! The core never formats text tables itself; it only produces rows of
//! primitive cells plus a fixed header list.

/// Column alignment hint for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// One row of a projected table.
pub trait TableRecord {
    /// Column titles, in cell order.
    const HEADERS: &'static [&'static str];

    /// Per-column alignment, same length as `HEADERS`.
    const ALIGN: &'static [Align];

    fn cells(&self) -> Vec<String>;
}
