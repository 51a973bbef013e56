pub mod cli;
pub mod io;
pub mod logging;
pub mod model;
pub mod row;
pub mod tui;
pub mod util;
