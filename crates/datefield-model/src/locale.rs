use std::fmt::Debug;

/// Translation lookup capability.
pub trait Localize: Debug {
    /// Resolves a translation key, falling back to the given default text.
    fn localize(&self, key: &str, default: &str) -> String;
}

/// Pass-through localization that always uses the default text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLocale;

impl Localize for DefaultLocale {
    fn localize(&self, _key: &str, default: &str) -> String {
        default.to_string()
    }
}
