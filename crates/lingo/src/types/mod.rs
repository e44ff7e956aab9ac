mod translations;
mod value;

pub use translations::Translations;
pub use value::Value;

use std::collections::HashMap;

/// Variables passed to a template, keyed by name.
pub type Variables = HashMap<String, Value>;
