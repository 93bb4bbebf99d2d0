//! Entrance sequence: count to 100, hold, wipe away, signal completion once.

use super::easing::{ease_out_cubic, Power};

pub const COUNT_DURATION_MS: f64 = 2_500.0;
pub const SETTLE_MS: f64 = 400.0;

pub const TITLE: &str = "AMAZEBALLS";
pub const SUBTITLE: &str = "CREATIVE STUDIO";

/// Title, subtitle, counter and progress line fade out in this order.
pub const EXIT_CONTENT_ITEMS: usize = 4;
const EXIT_CONTENT_DURATION_MS: f64 = 500.0;
const EXIT_CONTENT_STAGGER_MS: f64 = 50.0;
const EXIT_CONTENT_RISE_PX: f64 = -30.0;
const CURTAIN_OVERLAP_MS: f64 = 200.0;
const CURTAIN_DURATION_MS: f64 = 1_000.0;
/// Pause between the curtain clearing and the completion signal.
pub const COMPLETION_DELAY_MS: f64 = 100.0;

fn content_fade_end_ms() -> f64 {
    EXIT_CONTENT_DURATION_MS + EXIT_CONTENT_STAGGER_MS * (EXIT_CONTENT_ITEMS - 1) as f64
}

fn curtain_start_ms() -> f64 {
    content_fade_end_ms() - CURTAIN_OVERLAP_MS
}

pub fn exit_duration_ms() -> f64 {
    curtain_start_ms() + CURTAIN_DURATION_MS
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PreloaderPhase {
    Counting,
    Exiting,
    Done,
}

/// One-shot latch for the completion signal.
#[derive(Default, Debug)]
pub struct CompletionGuard {
    fired: bool,
}

impl CompletionGuard {
    /// `true` exactly once.
    pub fn take(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ExitFrame {
    /// Opacity and vertical offset (px) per content item.
    pub content: [(f64, f64); EXIT_CONTENT_ITEMS],
    /// Translation of the top curtain half, in percent of its height (0 to -100).
    pub curtain_top_percent: f64,
    /// Translation of the bottom curtain half (0 to 100).
    pub curtain_bottom_percent: f64,
}

impl ExitFrame {
    pub fn at(elapsed_ms: f64) -> Self {
        let mut content = [(1.0, 0.0); EXIT_CONTENT_ITEMS];
        for (index, item) in content.iter_mut().enumerate() {
            let start = EXIT_CONTENT_STAGGER_MS * index as f64;
            let eased = Power::Three.ease_in_out((elapsed_ms - start) / EXIT_CONTENT_DURATION_MS);
            *item = (1.0 - eased, EXIT_CONTENT_RISE_PX * eased);
        }

        let curtain = Power::Four.ease_in_out((elapsed_ms - curtain_start_ms()) / CURTAIN_DURATION_MS);
        Self {
            content,
            curtain_top_percent: -100.0 * curtain,
            curtain_bottom_percent: 100.0 * curtain,
        }
    }
}

/// Staggered letter/line entrance track, relative to the sequence start.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct EntranceTrack {
    pub start_ms: f64,
    pub stagger_ms: f64,
    pub duration_ms: f64,
    pub power: Power,
    pub ease_in_out: bool,
}

impl EntranceTrack {
    pub fn progress(&self, index: usize, elapsed_ms: f64) -> f64 {
        let local = (elapsed_ms - self.start_ms - self.stagger_ms * index as f64) / self.duration_ms;
        if self.ease_in_out {
            self.power.ease_in_out(local)
        } else {
            self.power.ease_out(local)
        }
    }

    fn end_ms(&self, count: usize) -> f64 {
        self.start_ms + self.stagger_ms * count.saturating_sub(1) as f64 + self.duration_ms
    }
}

pub fn title_track() -> EntranceTrack {
    EntranceTrack {
        start_ms: 300.0,
        stagger_ms: 40.0,
        duration_ms: 1_000.0,
        power: Power::Four,
        ease_in_out: false,
    }
}

pub fn subtitle_track() -> EntranceTrack {
    EntranceTrack {
        start_ms: title_track().end_ms(TITLE.chars().count()) - 600.0,
        stagger_ms: 20.0,
        duration_ms: 800.0,
        power: Power::Three,
        ease_in_out: false,
    }
}

pub fn line_track() -> EntranceTrack {
    EntranceTrack {
        start_ms: subtitle_track().end_ms(SUBTITLE.chars().count()) - 800.0,
        stagger_ms: 0.0,
        duration_ms: 1_200.0,
        power: Power::Two,
        ease_in_out: true,
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PreloaderFrame {
    pub phase: PreloaderPhase,
    pub counter: u8,
    /// Fill of the progress bar in `[0, 1]`, linear in the counter.
    pub bar_fill: f64,
    /// Milliseconds since the sequence began.
    pub elapsed_ms: f64,
    pub exit: Option<ExitFrame>,
    /// Set on exactly one frame: the one that reaches `Done`.
    pub completed: bool,
}

#[derive(Debug)]
pub struct Preloader {
    started_at_ms: Option<f64>,
    exit_started_at_ms: Option<f64>,
    counter: u8,
    phase: PreloaderPhase,
    completion: CompletionGuard,
}

impl Default for Preloader {
    fn default() -> Self {
        Self::new()
    }
}

impl Preloader {
    pub fn new() -> Self {
        Self {
            started_at_ms: None,
            exit_started_at_ms: None,
            counter: 0,
            phase: PreloaderPhase::Counting,
            completion: CompletionGuard::default(),
        }
    }

    /// Advances to wall-clock time `now_ms`. The first call starts the clock.
    pub fn tick(&mut self, now_ms: f64) -> PreloaderFrame {
        let started_at = *self.started_at_ms.get_or_insert(now_ms);
        let elapsed = (now_ms - started_at).max(0.0);
        let mut completed = false;

        if self.phase == PreloaderPhase::Counting {
            let progress = (elapsed / COUNT_DURATION_MS).min(1.0);
            let next = if progress >= 1.0 {
                100
            } else {
                (ease_out_cubic(progress) * 100.0).floor() as u8
            };
            self.counter = self.counter.max(next.min(100));

            if self.counter == 100 && elapsed >= COUNT_DURATION_MS + SETTLE_MS {
                self.phase = PreloaderPhase::Exiting;
                self.exit_started_at_ms = Some(started_at + COUNT_DURATION_MS + SETTLE_MS);
            }
        }

        let mut exit = None;
        if self.phase == PreloaderPhase::Exiting {
            let exit_started = self.exit_started_at_ms.unwrap_or(now_ms);
            let exit_elapsed = (now_ms - exit_started).max(0.0);
            exit = Some(ExitFrame::at(exit_elapsed));

            if exit_elapsed >= exit_duration_ms() + COMPLETION_DELAY_MS {
                self.phase = PreloaderPhase::Done;
                completed = self.completion.take();
            }
        }

        PreloaderFrame {
            phase: self.phase,
            counter: self.counter,
            bar_fill: f64::from(self.counter) / 100.0,
            elapsed_ms: elapsed,
            exit,
            completed,
        }
    }

    /// Teardown before the sequence finished. Returns `true` when the
    /// completion signal still has to be delivered.
    pub fn abort(&mut self) -> bool {
        self.phase = PreloaderPhase::Done;
        self.completion.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: f64 = 16.0;

    fn run_until_done(preloader: &mut Preloader, start: f64) -> Vec<PreloaderFrame> {
        let mut frames = Vec::new();
        let mut now = start;
        loop {
            let frame = preloader.tick(now);
            frames.push(frame);
            if frame.phase == PreloaderPhase::Done || frames.len() > 10_000 {
                return frames;
            }
            now += FRAME_MS;
        }
    }

    #[test]
    fn counter_is_non_decreasing_and_peaks_before_exit() {
        let mut preloader = Preloader::new();
        let frames = run_until_done(&mut preloader, 1_000.0);

        let mut previous = 0;
        let mut seen_exit = false;
        for frame in &frames {
            assert!(frame.counter >= previous);
            previous = frame.counter;
            if frame.phase != PreloaderPhase::Counting && !seen_exit {
                seen_exit = true;
                assert_eq!(frame.counter, 100);
            }
        }
        assert!(seen_exit);
    }

    #[test]
    fn completion_fires_exactly_once() {
        let mut preloader = Preloader::new();
        let frames = run_until_done(&mut preloader, 0.0);
        assert_eq!(frames.iter().filter(|frame| frame.completed).count(), 1);

        assert!(!preloader.tick(100_000.0).completed);
        assert!(!preloader.abort());
    }

    #[test]
    fn sequence_length_is_wall_clock_accurate() {
        let mut preloader = Preloader::new();
        let frames = run_until_done(&mut preloader, 0.0);
        let done = frames.last().expect("at least one frame");
        let expected = COUNT_DURATION_MS + SETTLE_MS + exit_duration_ms() + COMPLETION_DELAY_MS;
        assert!(done.elapsed_ms >= expected);
        assert!(done.elapsed_ms < expected + FRAME_MS);
    }

    #[test]
    fn dropped_frames_still_finish_on_time() {
        let mut preloader = Preloader::new();
        assert_eq!(preloader.tick(0.0).counter, 0);
        let frame = preloader.tick(COUNT_DURATION_MS + SETTLE_MS + exit_duration_ms() + COMPLETION_DELAY_MS);
        assert_eq!(frame.phase, PreloaderPhase::Done);
        assert!(frame.completed);
    }

    #[test]
    fn abort_mid_sequence_signals_once() {
        let mut preloader = Preloader::new();
        preloader.tick(0.0);
        preloader.tick(1_200.0);
        assert!(preloader.abort());
        assert!(!preloader.abort());
        assert!(!preloader.tick(10_000.0).completed);
    }

    #[test]
    fn exit_choreography_ends_fully_open() {
        let start = ExitFrame::at(0.0);
        assert_eq!(start.curtain_top_percent, 0.0);
        assert_eq!(start.content[0], (1.0, 0.0));

        let end = ExitFrame::at(exit_duration_ms());
        assert_eq!(end.curtain_top_percent, -100.0);
        assert_eq!(end.curtain_bottom_percent, 100.0);
        assert!(end.content.iter().all(|(opacity, _)| *opacity == 0.0));
        assert!(exit_duration_ms() >= 1_000.0 && exit_duration_ms() <= 1_500.0);
    }

    #[test]
    fn entrance_tracks_are_sequenced() {
        assert_eq!(title_track().progress(0, 0.0), 0.0);
        assert_eq!(title_track().progress(9, 10_000.0), 1.0);
        assert!(subtitle_track().start_ms > title_track().start_ms);
        assert!(line_track().start_ms > subtitle_track().start_ms);
    }
}
