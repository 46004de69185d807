pub mod call;
pub mod evaluated;
pub mod key;
pub mod truth;

// re-export for cleaner imports
pub use self::call::CallVariant;
pub use self::evaluated::EvaluatedVariant;
pub use self::key::VariantKey;
pub use self::truth::{TruthSet, TruthVariant};
