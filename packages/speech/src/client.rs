//! Blocking client for the Gemini speech-synthesis endpoint.
//!
//! The request mirrors what the service expects for TTS output: audio-only
//! response modality, a prebuilt voice, and the text wrapped in a cheerful
//! reading prompt. The response carries base64 16-bit PCM at 24 kHz.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use sightwords_engine::{AudioClip, SpeechError, SpeechGateway, SpeechResult};

use crate::playback;

const TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const VOICE_NAME: &str = "Kore";

/// Speech gateway backed by the Gemini TTS API.
///
/// Construction never fails: without an API key the gateway is degraded and
/// every `synthesize` call reports [`SpeechError::Unavailable`]. Activities
/// stay usable without audio.
pub struct GeminiSpeech {
    client: reqwest::blocking::Client,
    api_key: Option<String>,
    endpoint: String,
}

impl GeminiSpeech {
    pub fn new(api_key: Option<String>) -> Self {
        if api_key.is_none() {
            log::warn!("no speech API key configured; activities will run without audio");
        }
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT)
    }

    /// Points the client at a different base URL (tests).
    pub fn with_endpoint(api_key: Option<String>, endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_key,
            endpoint: endpoint.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl SpeechGateway for GeminiSpeech {
    fn synthesize(&self, text: &str) -> SpeechResult<AudioClip> {
        let api_key = self.api_key.as_deref().ok_or(SpeechError::Unavailable)?;

        let url = format!("{}/{}:generateContent", self.endpoint, TTS_MODEL);
        let body = GenerateRequest::for_text(&format!("Say cheerfully: {text}"));

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .map_err(|e| SpeechError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpeechError::Request(format!("service returned {status}")));
        }

        let payload: GenerateResponse = response
            .json()
            .map_err(|e| SpeechError::Request(e.to_string()))?;

        let encoded = payload.audio_payload().ok_or(SpeechError::EmptyAudio)?;
        let data = BASE64
            .decode(encoded)
            .map_err(|e| SpeechError::Decode(e.to_string()))?;
        if data.is_empty() {
            return Err(SpeechError::EmptyAudio);
        }
        Ok(AudioClip::pcm_24khz_mono(data))
    }

    fn play(&self, clip: AudioClip) -> SpeechResult<()> {
        playback::play_blocking(&clip)
    }
}

// ============================================================
// Wire types
// ============================================================

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

impl GenerateRequest {
    fn for_text(text: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![TextPart {
                    text: text.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["AUDIO".to_string()],
                speech_config: SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: VOICE_NAME.to_string(),
                        },
                    },
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct TextPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<String>,
    speech_config: SpeechConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechConfig {
    voice_config: VoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig {
    prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig {
    voice_name: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// `candidates[0].content.parts[0].inlineData.data`, when present.
    fn audio_payload(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .inline_data
            .as_ref()?
            .data
            .as_deref()
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct InlineData {
    data: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_gateway_is_unavailable() {
        let gateway = GeminiSpeech::new(None);
        assert!(!gateway.is_configured());
        let err = gateway.synthesize("cat").unwrap_err();
        assert!(matches!(err, SpeechError::Unavailable));
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateRequest::for_text("Say cheerfully: cat");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(
            json["contents"][0]["parts"][0]["text"],
            "Say cheerfully: cat"
        );
        assert_eq!(json["generationConfig"]["responseModalities"][0], "AUDIO");
        assert_eq!(
            json["generationConfig"]["speechConfig"]["voiceConfig"]["prebuiltVoiceConfig"]
                ["voiceName"],
            "Kore"
        );
    }

    #[test]
    fn test_response_audio_payload_navigation() {
        let raw = r#"{
            "candidates": [{
                "content": {
                    "parts": [{"inlineData": {"data": "AAAB", "mimeType": "audio/L16;rate=24000"}}]
                }
            }]
        }"#;
        let response: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.audio_payload(), Some("AAAB"));
    }

    #[test]
    fn test_response_without_audio_yields_none() {
        let empty: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.audio_payload(), None);

        let no_inline: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{}]}}]}"#).unwrap();
        assert_eq!(no_inline.audio_payload(), None);
    }
}
