//! Animation playback around the step rule

pub mod driver;
pub mod playback;
pub mod sink;

pub use driver::{AnimationDriver, Frame};
pub use playback::Playback;
pub use sink::{FrameSink, JsonFrames, JsonSink, RecordingSink, TerminalSink};
