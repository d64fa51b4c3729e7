//! Text front end
//!
//! - `console`: the line-in/line-out collaborator the game talks to
//! - `menu`: main menu loop and the screens it dispatches to

pub mod console;
pub mod menu;

pub use console::{Console, Terminal};
pub use menu::{App, Flow, MenuChoice};
