//! TypeScript code generation modules.

pub mod component;
pub mod interfaces;

pub use component::ComponentGenerator;
pub use interfaces::InterfaceRenderer;
