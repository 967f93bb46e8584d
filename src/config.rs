//! Synthesis parameters for the converter.
//!
//! Every parameter is fixed for a run; there are no flags, environment
//! variables, or config files. The defaults produce CD-quality mono
//! output with 0.30 s symbols separated by 0.05 s of silence.

/// Audio sample rate in Hz (CD quality).
pub const SAMPLE_RATE: u32 = 44_100;

/// Volume scalar applied to every sample (0.0-1.0).
pub const VOLUME: f32 = 0.4;

/// Duration of one synthesized symbol in seconds.
pub const SYMBOL_SECS: f32 = 0.30;

/// Duration of the pause written after each symbol in seconds.
pub const PAUSE_SECS: f32 = 0.05;

/// Synthesis parameters shared by the synthesizer and the WAV sink.
#[derive(Debug, Clone)]
pub struct SynthConfig {
    /// PCM sample rate in Hz.
    pub sample_rate: u32,
    /// Volume scalar applied after the additive mix (0.0-1.0).
    pub volume: f32,
    /// Seconds of audio rendered per mapped symbol.
    pub symbol_secs: f32,
    /// Seconds of silence after each symbol.
    pub pause_secs: f32,
}

impl SynthConfig {
    /// Returns the number of samples in a block of the given duration,
    /// rounded to the nearest whole sample.
    pub fn samples_for(&self, duration_secs: f32) -> usize {
        (duration_secs * self.sample_rate as f32).round() as usize
    }
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            volume: VOLUME,
            symbol_secs: SYMBOL_SECS,
            pause_secs: PAUSE_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = SynthConfig::default();
        assert_eq!(config.sample_rate, 44_100);
        assert_eq!(config.volume, 0.4);
        assert_eq!(config.symbol_secs, 0.30);
        assert_eq!(config.pause_secs, 0.05);
    }

    #[test]
    fn samples_for_rounds_durations() {
        let config = SynthConfig::default();
        assert_eq!(config.samples_for(config.symbol_secs), 13_230);
        assert_eq!(config.samples_for(config.pause_secs), 2_205);
        assert_eq!(config.samples_for(1.0), 44_100);
        assert_eq!(config.samples_for(0.0), 0);
    }
}
