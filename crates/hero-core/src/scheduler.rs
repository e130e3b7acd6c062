//! Frame-driven orchestration around a [`HeroEngine`].
//!
//! The scheduler owns the engine and the reveal emitter, asks its
//! [`FrameHost`] for one callback at a time, and can be paused and resumed
//! by an external visibility signal without losing any simulation state.

use crate::config::RevealPolicy;
use crate::engine::HeroEngine;
use crate::phase::Phase;
use crate::reveal::{RevealEmitter, RevealTarget};
use crate::surface::{FrameHost, Surface};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// Built, not yet started.
    Ready,
    Running,
    /// Frozen by a visibility signal; resumable.
    Paused,
    /// Reduced motion: the loop never runs.
    Disabled,
    /// Torn down; the engine is gone.
    Stopped,
}

pub struct Scheduler<H: FrameHost> {
    host: H,
    engine: Option<HeroEngine>,
    reveal: RevealEmitter,
    policy: RevealPolicy,
    state: LoopState,
    frame_pending: bool,
}

impl<H: FrameHost> Scheduler<H> {
    pub fn new(host: H, engine: HeroEngine) -> Self {
        let policy = engine.config().reveal;
        Self {
            host,
            engine: Some(engine),
            reveal: RevealEmitter::new(),
            policy,
            state: LoopState::Ready,
            frame_pending: false,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn engine(&self) -> Option<&HeroEngine> {
        self.engine.as_ref()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn reveal_policy(&self) -> RevealPolicy {
        self.policy
    }

    pub fn is_revealed(&self, target: RevealTarget) -> bool {
        self.reveal.is_revealed(target)
    }

    /// Begin animating, or under reduced motion reveal everything now and
    /// never schedule a frame. Newly revealed targets are pushed to `out`.
    pub fn start(&mut self, reduced_motion: bool, out: &mut Vec<RevealTarget>) {
        if self.state != LoopState::Ready {
            return;
        }
        if reduced_motion {
            log::info!("[loop] reduced motion: animation disabled");
            self.state = LoopState::Disabled;
            self.engine = None;
            self.reveal.fire_all(out);
            return;
        }
        log::info!("[loop] start");
        self.state = LoopState::Running;
        self.request();
    }

    /// Host frame callback. Simulates and draws one frame while running.
    pub fn on_frame(&mut self, surface: &mut dyn Surface, out: &mut Vec<RevealTarget>) {
        self.frame_pending = false;
        if self.state != LoopState::Running {
            return;
        }
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        if engine.tick(surface) == Some(Phase::Idle) && self.policy == RevealPolicy::Phase {
            self.reveal.fire_all(out);
        }
        self.request();
    }

    /// Freeze the loop. State is kept exactly as is.
    pub fn pause(&mut self) -> bool {
        if self.state != LoopState::Running {
            return false;
        }
        self.cancel();
        self.state = LoopState::Paused;
        log::info!("[loop] paused");
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state != LoopState::Paused {
            return false;
        }
        self.state = LoopState::Running;
        self.request();
        log::info!("[loop] resumed");
        true
    }

    /// Tear down: cancel any pending frame and drop the engine.
    pub fn stop(&mut self) {
        self.cancel();
        self.engine = None;
        self.state = LoopState::Stopped;
        log::info!("[loop] stopped");
    }

    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        self.engine
            .as_mut()
            .is_some_and(|engine| engine.resize(width, height))
    }

    /// Delays the host should arm for timer-triggered reveals, if that policy applies.
    pub fn timer_reveals(&self) -> Option<[(RevealTarget, u32); 2]> {
        match (self.policy, self.state) {
            (_, LoopState::Disabled | LoopState::Stopped) => None,
            (
                RevealPolicy::Timer {
                    primary_ms,
                    secondary_ms,
                },
                _,
            ) => Some([
                (RevealTarget::Primary, primary_ms),
                (RevealTarget::Secondary, secondary_ms),
            ]),
            (RevealPolicy::Phase, _) => None,
        }
    }

    /// A deferred timer fired for `target`. Returns `true` if it was not yet revealed.
    pub fn reveal_due(&mut self, target: RevealTarget) -> bool {
        self.reveal.fire(target)
    }

    fn request(&mut self) {
        if !self.frame_pending {
            self.frame_pending = true;
            self.host.request_frame();
        }
    }

    fn cancel(&mut self) {
        if self.frame_pending {
            self.frame_pending = false;
            self.host.cancel_frame();
        }
    }
}
