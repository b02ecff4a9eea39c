//! Terminal width collaborators.

use crossterm::terminal;

/// Width used when the terminal cannot be queried (e.g. output is piped).
pub const DEFAULT_WIDTH: usize = 80;

/// Source of the output width, in columns.
pub trait Terminal {
    /// Number of columns available for one output line. Always positive.
    fn width(&self) -> usize;
}

/// The terminal attached to the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTerminal;

impl Terminal for SystemTerminal {
    fn width(&self) -> usize {
        match terminal::size() {
            Ok((columns, _rows)) if columns > 0 => usize::from(columns),
            Ok(_) => DEFAULT_WIDTH,
            Err(err) => {
                log::debug!("terminal size unavailable ({err}), using {DEFAULT_WIDTH} columns");
                DEFAULT_WIDTH
            }
        }
    }
}

/// A terminal with a fixed width.
///
/// # Examples
///
/// ```
/// use dirinfo::listing::{FixedWidthTerminal, Terminal};
///
/// assert_eq!(FixedWidthTerminal::new(40).width(), 40);
/// assert_eq!(FixedWidthTerminal::new(0).width(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidthTerminal {
    width: usize,
}

impl FixedWidthTerminal {
    /// Create a terminal reporting `width` columns (at least one).
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
        }
    }
}

impl Terminal for FixedWidthTerminal {
    fn width(&self) -> usize {
        self.width
    }
}
