//! In-process adapter implementations of the `lw-core` ports.

pub mod memory_navigator;
pub mod recording_sink;
pub mod static_flags;

pub use memory_navigator::InMemoryNavigator;
pub use recording_sink::RecordingEffectSink;
pub use static_flags::StaticFlags;
