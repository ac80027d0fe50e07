//! Terminal output for the CLI.
//!
//! Colors are on unless `--no-color` or `output.color = false` turned them off.

use std::sync::atomic::{AtomicBool, Ordering};

mod output;

pub use output::{Printer, print_error, print_header};

static NO_COLOR: AtomicBool = AtomicBool::new(false);

pub fn set_no_color(value: bool) {
    NO_COLOR.store(value, Ordering::SeqCst);
}

pub fn no_color() -> bool {
    NO_COLOR.load(Ordering::SeqCst)
}
