//! Structural self-checks for the AVL invariants.
//!
//! These checks are diagnostic: every public operation of
//! [`BalancedMap`](super::BalancedMap) already keeps the invariants intact.

use std::cmp::max;
use std::fmt;

use super::node::Node;

/// A broken structural invariant reported by
/// [`BalancedMap::validate`](super::BalancedMap::validate).
///
/// # Examples
///
/// ```rust
/// use balanced_map::InvariantViolation;
///
/// let violation = InvariantViolation::Unbalanced { balance: -2 };
/// assert_eq!(
///     format!("{violation}"),
///     "subtree heights differ by more than one (balance -2)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A key is not strictly between the keys of its ancestors.
    ///
    /// Duplicate keys are reported this way as well.
    OutOfOrder,
    /// A node's cached height differs from the height of its subtree.
    StaleHeight {
        /// The height stored in the node.
        cached: u32,
        /// The height computed from its children.
        actual: u32,
    },
    /// The heights of a node's subtrees differ by more than one.
    Unbalanced {
        /// Height of the left subtree minus height of the right subtree.
        balance: i64,
    },
    /// The cached entry count differs from the number of nodes.
    LengthMismatch {
        /// The entry count stored in the map.
        cached: usize,
        /// The number of nodes actually reachable from the root.
        actual: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfOrder => write!(formatter, "keys are not in strictly ascending order"),
            Self::StaleHeight { cached, actual } => write!(
                formatter,
                "cached height {cached} does not match subtree height {actual}"
            ),
            Self::Unbalanced { balance } => write!(
                formatter,
                "subtree heights differ by more than one (balance {balance})"
            ),
            Self::LengthMismatch { cached, actual } => write!(
                formatter,
                "cached length {cached} does not match node count {actual}"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Height and node count of a verified subtree.
struct Summary {
    height: u32,
    count: usize,
}

/// Checks the whole tree and the cached entry count.
pub(crate) fn check_tree<K: Ord, V>(
    root: Option<&Node<K, V>>,
    length: usize,
) -> Result<(), InvariantViolation> {
    let summary = check_subtree(root, None, None)?;
    if summary.count == length {
        Ok(())
    } else {
        Err(InvariantViolation::LengthMismatch {
            cached: length,
            actual: summary.count,
        })
    }
}

/// Checks ordering against the exclusive bounds inherited from ancestors,
/// then heights and balance, children first.
fn check_subtree<K: Ord, V>(
    node: Option<&Node<K, V>>,
    lower: Option<&K>,
    upper: Option<&K>,
) -> Result<Summary, InvariantViolation> {
    let Some(node) = node else {
        return Ok(Summary {
            height: 0,
            count: 0,
        });
    };

    let below_lower = lower.is_some_and(|lower| node.key <= *lower);
    let above_upper = upper.is_some_and(|upper| node.key >= *upper);
    if below_lower || above_upper {
        return Err(InvariantViolation::OutOfOrder);
    }

    let left = check_subtree(node.left.as_deref(), lower, Some(&node.key))?;
    let right = check_subtree(node.right.as_deref(), Some(&node.key), upper)?;

    let actual = 1 + max(left.height, right.height);
    if node.height != actual {
        return Err(InvariantViolation::StaleHeight {
            cached: node.height,
            actual,
        });
    }

    let balance = i64::from(left.height) - i64::from(right.height);
    if balance.abs() > 1 {
        return Err(InvariantViolation::Unbalanced { balance });
    }

    Ok(Summary {
        height: actual,
        count: 1 + left.count + right.count,
    })
}
