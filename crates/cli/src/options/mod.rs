mod format_options;
mod key_value;

pub use format_options::FormatOptions;
pub use key_value::{KeyValue, KeyValueError};
