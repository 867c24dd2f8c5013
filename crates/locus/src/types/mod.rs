mod node;
mod plural_category;

pub use node::{FORMATS_KEY, TranslationNode, TranslationTree};
pub use plural_category::PluralCategory;
