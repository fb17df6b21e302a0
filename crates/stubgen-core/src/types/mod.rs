//! Class and member descriptor types shared between the engine and class model providers.

pub mod descriptor;
pub mod member;
pub mod modifiers;
