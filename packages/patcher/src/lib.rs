//! Patches an installed Flower so its pages load the language switcher and
//! carry `data-i18n` keys on their translatable text.

pub mod install;
pub mod locate;
pub mod rules;

pub use install::{FileOutcome, FlowerInstall, PatchReport, TemplateState};
pub use locate::flower_root;
