//! Command implementations.

pub mod draw;
pub mod history;
pub mod people;

pub use self::draw::{draw_assignment, execute_draw};
pub use self::history::execute_history;
pub use self::people::execute_people;
