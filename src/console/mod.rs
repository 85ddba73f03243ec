pub mod console;

pub use console::Console;
