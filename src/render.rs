//! Human readable rendering of a tree's shape, one line per level.
//!
//! ```text
//! --------------------------------------
//!    4
//!  2   6
//! 1 3 5 7
//! ```
//!
//! Absent nodes are drawn as `!` so that the columns of a partially filled level still line up
//! with their parents. This format is for debugging only and may change at any time.

use std::fmt::{self, Write};

use crate::node::TreeNode;
use crate::tree::Tree;

const SEPARATOR: &str = "--------------------------------------";
const ABSENT: char = '!';

impl<N> fmt::Display for Tree<N>
where
    N: TreeNode,
    N::Key: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Every level is padded out to a full level, so this grows with 2^height.
        let mut levels: Vec<Vec<Option<&N>>> = Vec::new();
        let mut current = vec![self.root()];
        loop {
            let next: Vec<Option<&N>> = current
                .iter()
                .flat_map(|node| [node.and_then(|n| n.left()), node.and_then(|n| n.right())])
                .collect();
            levels.push(current);
            if next.iter().all(Option::is_none) {
                break;
            }
            current = next;
        }

        // The bottom level isn't indented; each level above it sits in the gaps of the one below.
        let mut indents = Vec::with_capacity(levels.len());
        let mut indent = 0;
        for _ in &levels {
            indents.push(indent);
            indent = 2 * indent + 1;
        }
        indents.reverse();

        f.write_str(SEPARATOR)?;
        for (level, indent) in levels.iter().zip(indents) {
            f.write_char('\n')?;
            write!(f, "{:indent$}", "", indent = indent)?;
            for node in level {
                match node {
                    Some(node) => write!(f, "{}", node.key())?,
                    None => f.write_char(ABSENT)?,
                }
                write!(f, "{:gap$}", "", gap = 2 * indent + 1)?;
            }
        }
        Ok(())
    }
}
