mod bundle;
mod locales;
mod render;

pub use bundle::{I18nBundle, current_lang, set_lang};
pub use locales::{DEFAULT_LANG, normalize_lang};
pub use render::{month_name, month_short, t};
