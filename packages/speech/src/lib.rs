//! Real [`SpeechGateway`] implementation for the sight-word activities.
//!
//! - `client`: blocking HTTP client for the Gemini TTS endpoint
//! - `pcm`: 16-bit little-endian PCM to normalized f32 samples
//! - `playback`: rodio output with completion-exactly-once semantics
//!
//! [`SpeechGateway`]: sightwords_engine::SpeechGateway

pub mod client;
pub mod pcm;
pub mod playback;

pub use client::GeminiSpeech;
