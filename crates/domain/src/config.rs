pub mod variant;

pub use crate::value_objects::ExtensionFilter;
pub use variant::{Variant, VariantProfile};
