//! Wrapper kinds: [`Optional`], [`Reference`], and [`Custom`].

mod custom;
mod optional;
mod reference;

pub use custom::{Custom, CustomSerialize};
pub use optional::Optional;
pub use reference::Reference;
