//! Method body resolution: rule bodies with placeholder expansion, and
//! synthesized defaults for unmatched methods.

pub mod synthesizer;

pub use synthesizer::{
    boxed_zero_literal, substitute_placeholders, BodyPlan, BodySynthesizer, INSTANCE_BODY,
    METHOD_PLACEHOLDER, SIGNATURE_PLACEHOLDER,
};
