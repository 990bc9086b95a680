//! Copy-the-pattern memory game.
//!
//! A double press on the centre key arms the game. After a countdown the
//! panel plays a pattern that grows by one random key per round, and the
//! player has to repeat it. A wrong key ends the game the moment it is
//! pressed; so does running out of time.
//!
//! The game advances by at most one phase per [`PatternGame::step`], and the
//! light effects inside a step block until they are done.

use core::time::Duration;

use heapless::Vec;
use rand::{Rng, RngCore};
use smart_leds::{SmartLedsWrite, RGB8};
use ufmt::derive::uDebug;

use crate::clock::Clock;
use crate::config::{
    CENTER_KEY, COLLECT_TIMEOUT, DOUBLE_PRESS_WINDOW, KEY_COUNT, MAX_PATTERN,
};
use crate::effects;
use crate::input::KeySample;
use crate::light::LightPanel;
use crate::window::GestureWindow;

/// Centre key presses that start a game.
pub const ARM_PRESSES: u8 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, uDebug)]
pub enum Phase {
    Idle,
    ArmWait,
    Countdown,
    Playback,
    Collect,
    Judge,
}

/// Something worth logging happened during a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, uDebug)]
pub enum GameEvent {
    PressCount(u8),
    DoublePress,
    NewPattern { length: usize },
    ButtonPressed { key: usize },
    WrongGuess { position: usize },
    TimeUp { entered: usize },
    CorrectGuess { length: usize },
    GameOver { length: usize },
    /// The pattern cannot grow any further.
    Mastered { length: usize },
}

pub struct PatternGame<R> {
    phase: Phase,
    arm: GestureWindow,
    pattern: Vec<usize, MAX_PATTERN>,
    entered: Vec<usize, MAX_PATTERN>,
    collect_start: Duration,
    collect_timeout: Duration,
    awaiting_release: Option<usize>,
    // went down while `awaiting_release` was still held
    queued: Option<usize>,
    rng: R,
}

impl<R: RngCore> PatternGame<R> {
    pub fn new(rng: R) -> Self {
        Self {
            phase: Phase::Idle,
            arm: GestureWindow::new(DOUBLE_PRESS_WINDOW, Duration::ZERO),
            pattern: Vec::new(),
            entered: Vec::new(),
            collect_start: Duration::ZERO,
            collect_timeout: COLLECT_TIMEOUT,
            awaiting_release: None,
            queued: None,
            rng,
        }
    }

    pub fn with_collect_timeout(mut self, timeout: Duration) -> Self {
        self.collect_timeout = timeout;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pattern(&self) -> &[usize] {
        &self.pattern
    }

    /// Keys accepted so far in the current round.
    pub fn entered(&self) -> &[usize] {
        &self.entered
    }

    pub fn step<S, C, const LEDS: usize>(
        &mut self,
        samples: &[KeySample; KEY_COUNT],
        panel: &mut LightPanel<S, LEDS>,
        clock: &mut C,
    ) -> Result<Option<GameEvent>, S::Error>
    where
        S: SmartLedsWrite<Color = RGB8>,
        C: Clock,
    {
        match self.phase {
            Phase::Idle => {
                effects::clear(panel)?;
                self.arm.reset(clock.now());
                self.phase = Phase::ArmWait;
                Ok(None)
            }
            Phase::ArmWait => Ok(self.arm_wait(samples, clock.now())),
            Phase::Countdown => {
                effects::countdown(panel, clock)?;
                self.pattern.clear();
                self.phase = Phase::Playback;
                Ok(None)
            }
            Phase::Playback => self.playback(panel, clock),
            Phase::Collect => self.collect(samples, panel, clock),
            Phase::Judge => self.judge(panel, clock),
        }
    }

    fn arm_wait(&mut self, samples: &[KeySample; KEY_COUNT], now: Duration) -> Option<GameEvent> {
        self.arm.expire(now);

        if !samples[CENTER_KEY].just_pressed() {
            return None;
        }

        let count = self.arm.record(now);
        if count == ARM_PRESSES {
            self.phase = Phase::Countdown;
            Some(GameEvent::DoublePress)
        } else {
            Some(GameEvent::PressCount(count))
        }
    }

    fn playback<S, C, const LEDS: usize>(
        &mut self,
        panel: &mut LightPanel<S, LEDS>,
        clock: &mut C,
    ) -> Result<Option<GameEvent>, S::Error>
    where
        S: SmartLedsWrite<Color = RGB8>,
        C: Clock,
    {
        let key = self.rng.gen_range(0..KEY_COUNT);
        if self.pattern.push(key).is_err() {
            let length = self.pattern.len();
            self.reset();
            return Ok(Some(GameEvent::Mastered { length }));
        }

        effects::play_pattern(panel, clock, &self.pattern)?;

        self.entered.clear();
        self.awaiting_release = None;
        self.queued = None;
        self.collect_start = clock.now();
        self.phase = Phase::Collect;

        Ok(Some(GameEvent::NewPattern {
            length: self.pattern.len(),
        }))
    }

    fn collect<S, C, const LEDS: usize>(
        &mut self,
        samples: &[KeySample; KEY_COUNT],
        panel: &mut LightPanel<S, LEDS>,
        clock: &mut C,
    ) -> Result<Option<GameEvent>, S::Error>
    where
        S: SmartLedsWrite<Color = RGB8>,
        C: Clock,
    {
        let mut event = None;

        if self.awaiting_release.is_some() && self.queued.is_none() {
            self.queued = samples.iter().position(KeySample::just_pressed);
        }
        if let Some(key) = self.awaiting_release {
            if !samples[key].pressed {
                self.awaiting_release = None;
            }
        }
        if let Some(key) = self.queued {
            if !samples[key].pressed {
                self.queued = None;
            }
        }

        let accepted = match self.awaiting_release {
            Some(_) => None,
            None => self
                .queued
                .take()
                .or_else(|| samples.iter().position(KeySample::just_pressed)),
        };

        if let Some(key) = accepted {
            effects::flash_accepted(panel, clock, key)?;
            // never longer than the pattern, which has the same capacity
            let _ = self.entered.push(key);
            self.awaiting_release = Some(key);
            event = Some(GameEvent::ButtonPressed { key });

            let position = self.entered.len() - 1;
            if self.pattern[position] != key {
                self.phase = Phase::Judge;
                return Ok(Some(GameEvent::WrongGuess { position }));
            }
        }

        if self.entered.len() == self.pattern.len() {
            self.phase = Phase::Judge;
        } else if clock.elapsed_over(self.collect_start, self.collect_timeout) {
            self.phase = Phase::Judge;
            event = Some(GameEvent::TimeUp {
                entered: self.entered.len(),
            });
        }

        Ok(event)
    }

    fn judge<S, C, const LEDS: usize>(
        &mut self,
        panel: &mut LightPanel<S, LEDS>,
        clock: &mut C,
    ) -> Result<Option<GameEvent>, S::Error>
    where
        S: SmartLedsWrite<Color = RGB8>,
        C: Clock,
    {
        let length = self.pattern.len();

        if self.entered == self.pattern {
            effects::flash_correct(panel, clock)?;
            self.phase = Phase::Playback;
            Ok(Some(GameEvent::CorrectGuess { length }))
        } else {
            effects::oscillate_wrong(panel, clock)?;
            self.reset();
            Ok(Some(GameEvent::GameOver { length }))
        }
    }

    fn reset(&mut self) {
        self.pattern.clear();
        self.entered.clear();
        self.awaiting_release = None;
        self.queued = None;
        self.phase = Phase::Idle;
    }
}
