pub mod interpreter;
pub mod parser;
pub mod types;

pub use interpreter::{
    LintWarning, LoadError, LoadTicket, LoadWarning, Locale, ModifierHelper, ModifierRegistry,
    TranslateError, Translator, ValidationError, resolve,
};
pub use types::{Translations, Value, Variables};

/// Creates a [`Variables`] map from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats or strings directly.
///
/// # Example
///
/// ```
/// use lingo::{params, Value};
///
/// let p = params! { "count" => 3, "name" => "Alice" };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p["count"].as_number(), Some(3));
/// assert_eq!(p["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
