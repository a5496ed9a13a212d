//! Operator input shared with interrupt handlers.
//!
//! [`EncoderInput`] and [`ButtonInput`] are meant to live in `static`s: the
//! interrupt handlers call their `on_*`/`sample` entry points and the main
//! loop only ever reads or takes from them.

mod button;
mod encoder;
mod phase;

pub use button::ButtonInput;
pub use encoder::{EncoderInput, Rotation};
pub use phase::Phase;
