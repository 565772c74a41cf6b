//! Catch-game session: owns the state and the frame loop lifecycle
//!
//! The host's frame-timing facility sits behind [`FrameScheduler`]. A session
//! holds at most one pending frame; every (re)start cancels the previous
//! request first, so toggling the game never leaves two loops running.

use std::fmt::Debug;

use crate::input::{InputEvent, paddle_target};
use crate::renderer::Canvas;
use crate::sim::{GamePhase, GameState, Surface, TickInput, TickOutcome, tick};
use crate::tuning::Tuning;
use crate::win::WinWatcher;

/// Request/cancel access to the host's per-frame callback
pub trait FrameScheduler {
    type Handle: Copy + Debug;

    /// Ask for one callback on the next frame; `None` if the host refused
    fn request(&mut self) -> Option<Self::Handle>;

    /// Drop a request that has not fired yet
    fn cancel(&mut self, handle: Self::Handle);
}

/// Result of one frame callback
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameReport {
    pub tick: TickOutcome,
    pub score: u32,
    /// Love-meter fill (0.0 - 1.0)
    pub progress: f32,
    /// True only on the frame that first reached the win score
    pub won: bool,
}

/// Game instance holding all catch-game state
pub struct GameSession<S: FrameScheduler> {
    state: GameState,
    input: TickInput,
    watcher: WinWatcher,
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: FrameScheduler> GameSession<S> {
    pub fn new(seed: u64, surface: Surface, tuning: Tuning, scheduler: S) -> Self {
        let watcher = WinWatcher::new(tuning.win_score);
        Self {
            state: GameState::new(seed, surface, tuning),
            input: TickInput::default(),
            watcher,
            scheduler,
            pending: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Love-meter fill (0.0 - 1.0)
    pub fn progress(&self) -> f32 {
        self.watcher.progress(self.state.score)
    }

    pub fn has_won(&self) -> bool {
        self.watcher.has_fired()
    }

    /// Whether a frame callback is pending
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Start -> Playing: create the paddle (once) and run the loop
    pub fn start(&mut self) {
        if self.state.begin_play() {
            log::info!("Game started with seed: {}", self.state.seed);
        }
        self.start_loop();
    }

    /// (Re)register the frame loop, replacing any pending frame
    pub fn start_loop(&mut self) {
        self.cancel_pending();
        self.pending = self.scheduler.request();
        if self.pending.is_none() {
            log::warn!("Frame request refused, loop idle");
        }
    }

    /// Tear down: cancel the pending frame and drop the paddle
    pub fn stop(&mut self) {
        self.cancel_pending();
        self.state.end_play();
        self.input = TickInput::default();
        log::info!("Game stopped at score {}", self.state.score);
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }

    /// Track a viewport resize
    pub fn resize(&mut self, surface: Surface) {
        self.state.resize(surface);
    }

    /// Center the paddle under the pointer; ignored while there is no paddle
    pub fn handle_input(&mut self, event: &InputEvent) {
        let Some(player) = self.state.player else {
            return;
        };
        if let Some(x) = event.client_x() {
            self.input.target_x = Some(paddle_target(x, player.width));
        }
    }

    /// Frame callback: tick, check the win score, schedule the next frame.
    /// Does nothing unless a frame was pending.
    pub fn frame(&mut self, canvas: &mut impl Canvas) -> FrameReport {
        if self.pending.take().is_none() {
            return FrameReport {
                score: self.state.score,
                progress: self.progress(),
                ..Default::default()
            };
        }

        let outcome = tick(&mut self.state, &self.input, canvas);
        let won = self.watcher.observe(self.state.score);

        self.pending = self.scheduler.request();

        FrameReport {
            tick: outcome,
            score: self.state.score,
            progress: self.progress(),
            won,
        }
    }
}

impl<S: FrameScheduler> Drop for GameSession<S> {
    // A pending callback must not outlive the session it drives
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

impl GameSession<ManualScheduler> {
    /// Fire the pending frame, if any
    pub fn pump(&mut self, canvas: &mut impl Canvas) -> Option<FrameReport> {
        self.scheduler.fire()?;
        Some(self.frame(canvas))
    }
}

/// Scheduler driven by hand (tests and the headless build)
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u32,
    /// Outstanding requests, oldest first
    pending: Vec<u32>,
    pub requested: u32,
    pub cancelled: u32,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outstanding requests
    pub fn outstanding(&self) -> usize {
        self.pending.len()
    }

    /// Consume the oldest request, as the host would when a frame begins
    pub fn fire(&mut self) -> Option<u32> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }
}

impl FrameScheduler for ManualScheduler {
    type Handle = u32;

    fn request(&mut self) -> Option<u32> {
        self.next_id += 1;
        self.requested += 1;
        self.pending.push(self.next_id);
        Some(self.next_id)
    }

    fn cancel(&mut self, handle: u32) {
        self.pending.retain(|&id| id != handle);
        self.cancelled += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingCanvas;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Scheduler whose bookkeeping outlives the session
    struct SharedScheduler(Rc<RefCell<ManualScheduler>>);

    impl FrameScheduler for SharedScheduler {
        type Handle = u32;

        fn request(&mut self) -> Option<u32> {
            self.0.borrow_mut().request()
        }

        fn cancel(&mut self, handle: u32) {
            self.0.borrow_mut().cancel(handle);
        }
    }

    fn session() -> GameSession<ManualScheduler> {
        GameSession::new(
            42,
            Surface::new(400.0, 600.0),
            Tuning::default(),
            ManualScheduler::new(),
        )
    }

    #[test]
    fn test_start_creates_one_player_and_one_loop() {
        let mut s = session();
        assert_eq!(s.phase(), GamePhase::Start);
        assert!(!s.is_running());

        s.start();
        assert_eq!(s.phase(), GamePhase::Playing);
        assert!(s.state().player.is_some());
        assert_eq!(s.scheduler().outstanding(), 1);
    }

    #[test]
    fn test_double_start_keeps_single_loop() {
        let mut s = session();
        s.start();
        let player = s.state().player;
        s.start();
        assert_eq!(s.scheduler().outstanding(), 1);
        assert_eq!(s.scheduler().cancelled, 1);
        assert_eq!(s.state().player, player);
    }

    #[test]
    fn test_stop_cancels_and_drops_player() {
        let mut s = session();
        s.start();
        s.stop();
        assert!(!s.is_running());
        assert_eq!(s.scheduler().outstanding(), 0);
        assert!(s.state().player.is_none());
        assert!(s.pump(&mut RecordingCanvas::default()).is_none());
    }

    #[test]
    fn test_drop_cancels_pending_frame() {
        let host = Rc::new(RefCell::new(ManualScheduler::new()));
        let mut s = GameSession::new(
            42,
            Surface::new(400.0, 600.0),
            Tuning::default(),
            SharedScheduler(host.clone()),
        );
        s.start();
        assert_eq!(host.borrow().outstanding(), 1);

        drop(s);
        assert_eq!(host.borrow().outstanding(), 0);
        assert_eq!(host.borrow().cancelled, 1);
    }

    #[test]
    fn test_frame_reschedules_itself() {
        let mut s = session();
        s.start();
        let mut canvas = RecordingCanvas::default();
        for _ in 0..10 {
            let report = s.pump(&mut canvas).expect("frame pending");
            assert!(report.tick.simulated);
            assert_eq!(s.scheduler().outstanding(), 1);
        }
        assert_eq!(s.state().time_ticks, 10);
    }

    #[test]
    fn test_frame_without_pending_is_inert() {
        let mut s = session();
        let mut canvas = RecordingCanvas::default();
        let report = s.frame(&mut canvas);
        assert!(!report.tick.simulated);
        assert!(canvas.commands.is_empty());
        assert!(!s.is_running());
    }

    #[test]
    fn test_input_ignored_without_player() {
        let mut s = session();
        s.handle_input(&InputEvent::PointerMove { client_x: 300.0 });
        s.start();
        let mut canvas = RecordingCanvas::default();
        s.pump(&mut canvas);
        assert_eq!(s.state().player.unwrap().pos.x, 150.0);
    }

    #[test]
    fn test_touch_moves_paddle() {
        let mut s = session();
        s.start();
        s.handle_input(&InputEvent::TouchMove {
            contacts: vec![120.0, 390.0],
        });
        s.pump(&mut RecordingCanvas::default());
        assert_eq!(s.state().player.unwrap().pos.x, 70.0);
    }

    #[test]
    fn test_resize_reanchors() {
        let mut s = session();
        s.start();
        s.resize(Surface::new(1024.0, 768.0));
        assert_eq!(s.state().player.unwrap().pos.y, 668.0);
    }
}
