//! Game rules: the win predicate and the outcome type.
//!
//! The rules here are deliberately small. The only legality question the
//! engine asks is "does this hand win?", answered by `is_winning_hand`.

pub mod result;
pub mod win;

pub use result::GameResult;
pub use win::{is_winning_hand, HandShape, PAIRS_TO_WIN, TRIPLETS_TO_WIN};
