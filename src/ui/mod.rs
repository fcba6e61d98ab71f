pub mod dom_console;
pub mod events;

pub use dom_console::DomConsole;
