//! Rules for evaluating a side-stacker board.

mod win;

pub use win::{check_winner, has_won, WIN_LENGTH};
