//! Audio output through rodio.

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, Sink};

use sightwords_engine::{AudioClip, SpeechError, SpeechResult};

/// Plays a PCM clip through the default output device and returns once
/// playback has finished. Setup failures come back as
/// [`SpeechError::Playback`]; either way the function returns, so the
/// caller's speaking lock is always released.
pub fn play_blocking(clip: &AudioClip) -> SpeechResult<()> {
    let samples = crate::pcm::decode_i16_le(&clip.data);
    if samples.is_empty() {
        log::debug!("empty audio clip, nothing to play");
        return Ok(());
    }

    let (_stream, handle) =
        OutputStream::try_default().map_err(|e| SpeechError::Playback(e.to_string()))?;
    let sink = Sink::try_new(&handle).map_err(|e| SpeechError::Playback(e.to_string()))?;

    sink.append(SamplesBuffer::new(
        clip.channels,
        clip.sample_rate,
        samples,
    ));
    sink.sleep_until_end();
    Ok(())
}
