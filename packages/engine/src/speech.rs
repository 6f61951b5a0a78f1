//! Speech capability contract.
//!
//! Engines never perform synthesis themselves. An action that needs audio
//! returns a [`SpeechRequest`] and sets the engine's speaking flag; the
//! composition layer hands the request to a [`SpeechGateway`] and calls the
//! engine's `speech_finished` exactly once when playback ends or fails.

use thiserror::Error;

/// Text an engine wants spoken aloud.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRequest {
    pub text: String,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Raw synthesized audio: signed 16-bit little-endian PCM frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub data: Vec<u8>,
    pub sample_rate: u32,
    pub channels: u16,
}

impl AudioClip {
    /// The format the synthesis service returns: mono PCM at 24 kHz.
    pub fn pcm_24khz_mono(data: Vec<u8>) -> Self {
        Self {
            data,
            sample_rate: 24_000,
            channels: 1,
        }
    }
}

/// Speech gateway error type. Every variant is recoverable: the caller
/// degrades to silence and releases its speaking state.
#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("speech synthesis is not configured")]
    Unavailable,

    #[error("synthesis request failed: {0}")]
    Request(String),

    #[error("synthesis response carried no audio payload")]
    EmptyAudio,

    #[error("audio payload is not valid base64: {0}")]
    Decode(String),

    #[error("audio playback failed: {0}")]
    Playback(String),
}

pub type SpeechResult<T> = Result<T, SpeechError>;

/// Opaque speech capability: text in, audio out, playback to completion.
pub trait SpeechGateway {
    /// Synthesizes the given text. Failure is a recoverable condition, never
    /// a reason to crash an activity.
    fn synthesize(&self, text: &str) -> SpeechResult<AudioClip>;

    /// Plays a clip through the host audio output, returning once playback
    /// has finished. An `Err` still means playback is over; callers release
    /// their speaking state on either outcome.
    fn play(&self, clip: AudioClip) -> SpeechResult<()>;
}
