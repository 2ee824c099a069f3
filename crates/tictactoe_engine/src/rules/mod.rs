//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Board storage calls into
//! these rather than carrying its own line tables.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, has_line};
