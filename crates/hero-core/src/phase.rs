//! Frame-counted phase state machine: Float -> Connect -> Unify -> Idle.
//!
//! Transitions only ever move forward. Idle is terminal and counts frames
//! indefinitely without leaving.

use crate::config::Thresholds;
use crate::constants::{CONNECT_FRAMES, FLOAT_FRAMES, UNIFY_FRAMES};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    Float,
    Connect,
    Unify,
    Idle,
}

impl Phase {
    pub fn successor(self) -> Phase {
        match self {
            Phase::Float => Phase::Connect,
            Phase::Connect => Phase::Unify,
            Phase::Unify | Phase::Idle => Phase::Idle,
        }
    }
}

/// Frames spent in each timed phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseDurations {
    pub float: u32,
    pub connect: u32,
    pub unify: u32,
}

impl Default for PhaseDurations {
    fn default() -> Self {
        Self {
            float: FLOAT_FRAMES,
            connect: CONNECT_FRAMES,
            unify: UNIFY_FRAMES,
        }
    }
}

impl PhaseDurations {
    /// `None` for the terminal phase.
    pub fn of(&self, phase: Phase) -> Option<u32> {
        match phase {
            Phase::Float => Some(self.float),
            Phase::Connect => Some(self.connect),
            Phase::Unify => Some(self.unify),
            Phase::Idle => None,
        }
    }

    pub fn total(&self) -> u32 {
        self.float
            .saturating_add(self.connect)
            .saturating_add(self.unify)
    }
}

/// Pure transition rule: where a phase goes after `timer` frames in it.
#[inline]
pub fn next_phase(phase: Phase, timer: u32, durations: &PhaseDurations) -> Phase {
    match durations.of(phase) {
        Some(limit) if timer >= limit => phase.successor(),
        _ => phase,
    }
}

/// Read-only link policy for the current frame.
///
/// A zero threshold means nothing connects and the pairwise pass is skipped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkParams {
    pub threshold: f32,
    pub alpha_scale: f32,
}

impl LinkParams {
    pub const NONE: LinkParams = LinkParams {
        threshold: 0.0,
        alpha_scale: 0.0,
    };

    pub fn is_active(&self) -> bool {
        self.threshold > 0.0 && self.alpha_scale > 0.0
    }
}

/// Phase-dependent link styling knobs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkPolicy {
    pub thresholds: Thresholds,
    pub ramp_frames: u32,
    pub base_alpha: f32,
    pub idle_alpha: f32,
}

#[derive(Clone, Debug)]
pub struct PhaseSequencer {
    phase: Phase,
    timer: u32,
    durations: PhaseDurations,
    policy: LinkPolicy,
}

impl PhaseSequencer {
    pub fn new(durations: PhaseDurations, policy: LinkPolicy) -> Self {
        Self {
            phase: Phase::Float,
            timer: 0,
            durations,
            policy,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Frames elapsed since entering the current phase.
    pub fn timer(&self) -> u32 {
        self.timer
    }

    /// Count one frame. Returns the newly entered phase on a transition.
    pub fn advance(&mut self) -> Option<Phase> {
        self.timer = self.timer.saturating_add(1);
        let next = next_phase(self.phase, self.timer, &self.durations);
        if next == self.phase {
            return None;
        }
        log::debug!(
            "[phase] {:?} -> {:?} after {} frames",
            self.phase,
            next,
            self.timer
        );
        self.phase = next;
        self.timer = 0;
        Some(next)
    }

    /// 0 before Unify, `timer / unify` during it, 1 once Idle.
    pub fn unify_progress(&self) -> f32 {
        match self.phase {
            Phase::Float | Phase::Connect => 0.0,
            Phase::Unify if self.durations.unify == 0 => 1.0,
            Phase::Unify => (self.timer as f32 / self.durations.unify as f32).min(1.0),
            Phase::Idle => 1.0,
        }
    }

    pub fn link_params(&self) -> LinkParams {
        let p = &self.policy;
        match self.phase {
            Phase::Float => LinkParams::NONE,
            Phase::Connect => {
                let ramp = if p.ramp_frames == 0 {
                    1.0
                } else {
                    (self.timer as f32 / p.ramp_frames as f32).min(1.0)
                };
                LinkParams {
                    threshold: p.thresholds.connect,
                    alpha_scale: p.base_alpha * ramp,
                }
            }
            Phase::Unify => LinkParams {
                threshold: p.thresholds.unify,
                alpha_scale: p.base_alpha,
            },
            Phase::Idle => LinkParams {
                threshold: p.thresholds.idle,
                alpha_scale: p.idle_alpha,
            },
        }
    }
}
