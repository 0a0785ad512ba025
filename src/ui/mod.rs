//! Terminal UI: the board presenter that turns key presses and mouse clicks
//! into column choices and draws each round.

mod app;
pub mod game_view;

pub use app::App;
