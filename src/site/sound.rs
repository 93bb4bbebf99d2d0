//! Synthesised UI sounds as plain envelope data; the browser side only plays them.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SoundKind {
    Click,
    Hover,
    Success,
    Toggle,
    Whoosh,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Waveform {
    Sine,
    Sawtooth,
}

/// One oscillator: exponential frequency and gain ramps from `offset_secs`
/// to `offset_secs + duration_secs`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Tone {
    pub waveform: Waveform,
    pub offset_secs: f64,
    pub duration_secs: f64,
    pub frequency_start: f64,
    pub frequency_end: f64,
    pub gain_start: f64,
    pub gain_end: f64,
}

const fn tone(
    waveform: Waveform,
    offset_secs: f64,
    duration_secs: f64,
    frequency: (f64, f64),
    gain: (f64, f64),
) -> Tone {
    Tone {
        waveform,
        offset_secs,
        duration_secs,
        frequency_start: frequency.0,
        frequency_end: frequency.1,
        gain_start: gain.0,
        gain_end: gain.1,
    }
}

impl SoundKind {
    pub fn tones(self) -> &'static [Tone] {
        const CLICK: [Tone; 1] = [tone(Waveform::Sine, 0.0, 0.05, (800.0, 400.0), (0.1, 0.01))];
        const HOVER: [Tone; 1] = [tone(Waveform::Sine, 0.0, 0.03, (600.0, 800.0), (0.03, 0.01))];
        const SUCCESS: [Tone; 2] = [
            tone(Waveform::Sine, 0.0, 0.2, (523.25, 523.25), (0.1, 0.01)),
            tone(Waveform::Sine, 0.1, 0.2, (659.25, 659.25), (0.1, 0.01)),
        ];
        const TOGGLE: [Tone; 1] = [tone(Waveform::Sine, 0.0, 0.08, (440.0, 880.0), (0.06, 0.01))];
        const WHOOSH: [Tone; 1] = [tone(Waveform::Sawtooth, 0.0, 0.15, (100.0, 50.0), (0.02, 0.001))];

        match self {
            Self::Click => &CLICK,
            Self::Hover => &HOVER,
            Self::Success => &SUCCESS,
            Self::Toggle => &TOGGLE,
            Self::Whoosh => &WHOOSH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponential_ramps_never_touch_zero() {
        for kind in [
            SoundKind::Click,
            SoundKind::Hover,
            SoundKind::Success,
            SoundKind::Toggle,
            SoundKind::Whoosh,
        ] {
            for tone in kind.tones() {
                assert!(tone.gain_end > 0.0 && tone.frequency_end > 0.0, "{kind:?}");
            }
        }
    }

    #[test]
    fn success_is_a_two_note_chime() {
        assert_eq!(SoundKind::Success.tones().len(), 2);
        let total = SoundKind::Success
            .tones()
            .iter()
            .map(|tone| tone.offset_secs + tone.duration_secs)
            .fold(0.0, f64::max);
        assert!((total - 0.3).abs() < 1e-9);
    }
}
