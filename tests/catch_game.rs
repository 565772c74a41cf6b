//! End-to-end runs of the catch game on a recording canvas

use heart_catch::input::InputEvent;
use heart_catch::renderer::{DrawCommand, RecordingCanvas};
use heart_catch::sim::{GamePhase, Surface};
use heart_catch::{GameSession, ManualScheduler, Tuning};
use proptest::prelude::*;

/// A paddle as wide as the surface catches every heart
fn catch_everything(seed: u64) -> GameSession<ManualScheduler> {
    let tuning = Tuning {
        spawn_chance: 1.0,
        ..Tuning::default()
    };
    GameSession::new(seed, Surface::new(100.0, 600.0), tuning, ManualScheduler::new())
}

#[test]
fn test_win_fires_exactly_once() {
    let mut session = catch_everything(3);
    let mut canvas = RecordingCanvas::default();
    session.start();

    let mut wins = Vec::new();
    let mut last_score = 0;
    for frame in 0..1000 {
        let report = session.pump(&mut canvas).expect("loop keeps running");
        canvas.clear();
        assert_eq!(report.tick.missed, 0);
        assert!(report.score >= last_score, "score went down at frame {frame}");
        last_score = report.score;
        if report.won {
            assert!(report.score >= 15);
            wins.push(frame);
        }
    }

    assert_eq!(wins.len(), 1);
    assert!(session.has_won());
    assert_eq!(session.progress(), 1.0);
    assert!(session.score() > 15);
}

#[test]
fn test_each_catch_adds_five_sparks() {
    let mut session = catch_everything(11);
    let mut canvas = RecordingCanvas::default();
    session.start();

    loop {
        let before = session.state().particles.len();
        let report = session.pump(&mut canvas).expect("loop keeps running");
        if report.tick.caught > 0 {
            // Nothing has expired yet on the first catch
            assert_eq!(before, 0);
            assert_eq!(
                session.state().particles.len(),
                5 * report.tick.caught as usize
            );
            break;
        }
    }
}

#[test]
fn test_stop_and_restart_keeps_one_loop() {
    let mut session = catch_everything(5);
    let mut canvas = RecordingCanvas::default();

    session.start();
    for _ in 0..20 {
        session.pump(&mut canvas);
    }
    session.stop();
    assert!(session.pump(&mut canvas).is_none());
    assert!(session.state().player.is_none());

    session.start();
    session.start();
    assert_eq!(session.phase(), GamePhase::Playing);
    assert_eq!(session.scheduler().outstanding(), 1);
    assert!(session.pump(&mut canvas).is_some());
    assert_eq!(session.state().time_ticks, 21);
}

#[test]
fn test_frame_paints_over_a_cleared_surface() {
    let mut session = catch_everything(9);
    let mut canvas = RecordingCanvas::default();
    session.start();
    for _ in 0..300 {
        canvas.clear();
        session.pump(&mut canvas);
        assert_eq!(
            canvas.commands.first(),
            Some(&DrawCommand::ClearRect {
                x: 0.0,
                y: 0.0,
                w: 100.0,
                h: 600.0
            })
        );
    }
    // Paddle plus at least one heart
    assert!(canvas.fills() >= 2);
}

#[test]
fn test_pointer_steers_the_paddle() {
    let mut session = GameSession::new(
        1,
        Surface::new(800.0, 600.0),
        Tuning::default(),
        ManualScheduler::new(),
    );
    let mut canvas = RecordingCanvas::default();
    session.start();
    session.handle_input(&InputEvent::PointerMove { client_x: 400.0 });
    session.pump(&mut canvas);
    assert_eq!(session.state().player.unwrap().pos.x, 350.0);

    session.handle_input(&InputEvent::PointerMove { client_x: -20.0 });
    session.pump(&mut canvas);
    assert_eq!(session.state().player.unwrap().pos.x, 0.0);
}

proptest! {
    #[test]
    fn paddle_stays_on_surface(
        width in 50.0f32..2000.0,
        pointer in proptest::collection::vec(-3000.0f32..3000.0, 1..40),
    ) {
        let mut session = GameSession::new(
            7,
            Surface::new(width, 600.0),
            Tuning::default(),
            ManualScheduler::new(),
        );
        let mut canvas = RecordingCanvas::default();
        session.start();

        for x in pointer {
            session.handle_input(&InputEvent::PointerMove { client_x: x });
            prop_assert!(session.pump(&mut canvas).is_some());
            canvas.clear();
            let player = session.state().player.unwrap();
            let max_x = (width - player.width).max(0.0);
            prop_assert!(player.pos.x >= 0.0);
            prop_assert!(player.pos.x <= max_x);
        }
    }

    #[test]
    fn sparks_lose_two_life_per_tick(seed in any::<u64>(), frames in 1usize..400) {
        let mut session = catch_everything(seed);
        let mut canvas = RecordingCanvas::default();
        session.start();

        for _ in 0..frames {
            session.pump(&mut canvas);
            canvas.clear();
            for spark in &session.state().particles {
                prop_assert!(spark.life > 0.0);
                prop_assert!(spark.life < spark.max_life);
                let spent = (spark.max_life - spark.life) / 2.0;
                prop_assert_eq!(spent.fract(), 0.0);
            }
        }
    }
}
