//! Audio file decoding and channel handling

pub mod loader;
pub mod channels;

pub use loader::AudioSignal;
pub use channels::select_channel;
