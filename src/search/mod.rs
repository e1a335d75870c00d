//! Adversarial search over the tic-tac-toe game tree.
//!
//! The engine explores every line of play down to terminal boards. X
//! maximizes the score and O minimizes it; there is no pruning beyond
//! stopping once a side has found a forced win.

mod minimax;

pub use minimax::{Evaluation, Minimax, SearchResult};
