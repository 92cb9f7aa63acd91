use drape::{Curtain, CurtainConfig, NoOpStepObserver, StepObserver};

#[derive(Debug, PartialEq)]
enum Event {
    Integrate,
    Relax(usize),
    Complete,
}

#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
}

impl StepObserver for Recorder {
    fn on_integrate(&mut self) {
        self.events.push(Event::Integrate);
    }
    fn on_relax_iteration(&mut self, iteration: usize) {
        self.events.push(Event::Relax(iteration));
    }
    fn on_step_complete(&mut self) {
        self.events.push(Event::Complete);
    }
}

#[test]
fn first_tick_has_no_reference_and_steps_zero_dt() {
    let mut curtain: Curtain<f32> = Curtain::new(520.0, 360.0, CurtainConfig::new());
    let dt = curtain.tick(5.0, &mut NoOpStepObserver);
    assert_eq!(dt, 0.0);
}

#[test]
fn frame_gaps_are_clamped() {
    let mut curtain: Curtain<f32> = Curtain::new(520.0, 360.0, CurtainConfig::new());
    curtain.tick(0.0, &mut NoOpStepObserver);

    // A ten-second stall (backgrounded tab) must not become a ten-second step.
    let dt = curtain.tick(10.0, &mut NoOpStepObserver);
    assert!((dt - 0.033).abs() < 1e-6, "dt {} should be clamped to 0.033", dt);

    // An ordinary frame passes through unclamped.
    let dt = curtain.tick(10.016, &mut NoOpStepObserver);
    assert!((dt - 0.016).abs() < 1e-5, "dt {} should be the real elapsed time", dt);
}

#[test]
fn integration_precedes_relaxation() {
    let mut curtain: Curtain<f32> = Curtain::new(520.0, 360.0, CurtainConfig::new());
    let mut recorder = Recorder::default();

    curtain.step(1.0 / 60.0, &mut recorder);

    let expected = vec![
        Event::Integrate,
        Event::Relax(0),
        Event::Relax(1),
        Event::Relax(2),
        Event::Relax(3),
        Event::Relax(4),
        Event::Complete,
    ];
    assert_eq!(recorder.events, expected);
}

#[test]
fn iteration_count_follows_config() {
    let config = CurtainConfig::<f32>::new().with_iterations(2);
    let mut curtain = Curtain::new(520.0, 360.0, config);
    let mut recorder = Recorder::default();

    curtain.step(1.0 / 60.0, &mut recorder);

    let relax_passes = recorder
        .events
        .iter()
        .filter(|e| matches!(e, Event::Relax(_)))
        .count();
    assert_eq!(relax_passes, curtain.config().iterations);
}

#[test]
fn resize_rebuilds_and_discards_motion() {
    let mut curtain: Curtain<f32> = Curtain::new(520.0, 360.0, CurtainConfig::new());
    for _ in 0..60 {
        curtain.step(1.0 / 60.0, &mut NoOpStepObserver);
    }

    curtain.resize(520.0, 360.0, 2.0);
    assert_eq!(curtain.scale(), 2.0);
    assert_eq!((curtain.width(), curtain.height()), (520.0, 360.0));

    let fresh: Curtain<f32> = Curtain::new(520.0, 360.0, CurtainConfig::new());
    for (a, b) in curtain
        .mesh()
        .positions()
        .iter()
        .zip(fresh.mesh().positions().iter())
    {
        assert_eq!(a, b, "resize should produce a pristine mesh");
    }

    // Every particle is at rest again.
    for p in curtain.mesh().particles() {
        assert_eq!(p.pos, p.prev_pos);
    }
}

#[test]
fn pointer_events_shift_previous_position() {
    let mut curtain: Curtain<f32> = Curtain::new(520.0, 360.0, CurtainConfig::new());

    curtain.pointer_move(10.0, 10.0);
    curtain.pointer_move(20.0, 15.0);

    let pointer = curtain.pointer();
    assert!(pointer.active);
    assert_eq!((pointer.prev_pos.x, pointer.prev_pos.y), (10.0, 10.0));
    assert_eq!((pointer.pos.x, pointer.pos.y), (20.0, 15.0));

    curtain.pointer_leave();
    assert!(!curtain.pointer().active);
}

#[test]
fn degenerate_single_column_still_steps() {
    let config = CurtainConfig::<f32>::new().with_grid(1, 5);
    let mut curtain = Curtain::new(520.0, 360.0, config);

    assert_eq!(curtain.mesh().particle_count(), 5);
    // No horizontal neighbors, so only the 4 vertical links.
    assert_eq!(curtain.mesh().stick_count(), 4);

    for _ in 0..30 {
        curtain.step(1.0 / 60.0, &mut NoOpStepObserver);
    }

    for p in curtain.mesh().particles() {
        assert!(p.pos.x.is_finite() && p.pos.y.is_finite());
    }
}

#[test]
fn render_exports_cover_the_whole_mesh() {
    let curtain: Curtain<f32> = Curtain::new(520.0, 360.0, CurtainConfig::new());
    let mesh = curtain.mesh();

    assert_eq!(mesh.positions().len(), mesh.particle_count());
    assert_eq!(mesh.quads().len(), (mesh.cols() - 1) * (mesh.rows() - 1));
    for stick in mesh.sticks() {
        assert!(stick.a < mesh.particle_count() && stick.b < mesh.particle_count());
    }
}

#[test]
fn repinning_through_the_mesh_holds_a_new_anchor() {
    let config = CurtainConfig::<f32>::new().with_grid(6, 4);
    let mut curtain = Curtain::new(400.0, 300.0, config);

    curtain.mesh_mut().pin(3, 2);
    let anchored = curtain.mesh().position_at(3, 2);

    for _ in 0..60 {
        curtain.step(1.0 / 60.0, &mut NoOpStepObserver);
    }
    assert_eq!(curtain.mesh().position_at(3, 2), anchored);

    curtain.mesh_mut().unpin(3, 2);
    for _ in 0..30 {
        curtain.step(1.0 / 60.0, &mut NoOpStepObserver);
    }
    assert!(
        curtain.mesh().position_at(3, 2).y > anchored.y,
        "released particle should fall under gravity",
    );
}
