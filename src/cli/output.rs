use colored::Colorize;
use std::fmt;

/// Prints an informational message.
pub fn info(message: impl fmt::Display) {
    println!("{} {}", "[i]".blue(), message);
}

/// Prints a success confirmation.
pub fn success(message: impl fmt::Display) {
    println!("{} {}", "[✓]".green(), message);
}

/// Prints a non-fatal warning.
pub fn warning(message: impl fmt::Display) {
    println!("{} {}", "[!]".yellow(), message);
}

/// Prints an error without terminating the shell.
pub fn error(message: impl fmt::Display) {
    eprintln!("{} {}", "[x]".red(), message);
}

/// Prints a section heading.
pub fn section(title: impl fmt::Display) {
    println!("{}", title.to_string().bold());
}
