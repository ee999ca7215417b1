//! Move actions
//!
//! Builds the fixed list of moves that pull each cup (and finally the ball)
//! back out to the root directory.

use std::fmt;
use std::path::PathBuf;

/// Sources relative to the root, in the order they are moved.
///
/// The layout is `cup3/cup2/cup1/ball.txt`; every move lifts the next inner
/// item up to the root, so the order matters.
pub const SOURCES: [&str; 3] = [r"cup3\cup2", r"cup2\cup1", r"cup1\ball.txt"];

/// One move of a source under the root into the root itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveAction {
    root: String,
    source: &'static str,
}

impl MoveAction {
    /// Create a new action; the root is kept exactly as given
    pub fn new(root: impl Into<String>, source: &'static str) -> Self {
        Self {
            root: root.into(),
            source,
        }
    }

    /// The root directory as received
    pub fn root(&self) -> &str {
        &self.root
    }

    /// The relative source, with `\` separators
    pub const fn source(&self) -> &'static str {
        self.source
    }

    /// Shell command line for this move. The root is not escaped.
    pub fn command_line(&self) -> String {
        format!("move \"{root}\\{src}\" \"{root}\"", root = self.root, src = self.source)
    }

    /// Source as a native path under the root
    pub fn source_path(&self) -> PathBuf {
        self.source
            .split('\\')
            .fold(PathBuf::from(&self.root), |path, part| path.join(part))
    }

    /// Destination directory of the move
    pub fn destination(&self) -> PathBuf {
        PathBuf::from(&self.root)
    }
}

impl fmt::Display for MoveAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Build the ordered list of moves for `root`
pub fn plan(root: &str) -> Vec<MoveAction> {
    SOURCES
        .iter()
        .map(|&source| MoveAction::new(root, source))
        .collect()
}
