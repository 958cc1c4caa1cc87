mod cli;

pub use cli::{print_error_with_source, render_tokens};
