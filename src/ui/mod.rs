pub mod terminal;

pub use terminal::run_interactive;
