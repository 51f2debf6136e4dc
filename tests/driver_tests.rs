use blob_core::*;

#[derive(Default)]
struct RecordingSurface {
    paths: Vec<CurvePath>,
    translations: Vec<Point2D>,
}

impl Surface for RecordingSurface {
    fn set_path(&mut self, path: &CurvePath) {
        self.paths.push(path.clone());
    }

    fn set_translation(&mut self, focal: Point2D) {
        self.translations.push(focal);
    }
}

fn running_driver(config: BlobConfig) -> AnimationDriver {
    let mut driver = AnimationDriver::new(config);
    assert_eq!(driver.set_visible(true), Schedule::RequestFrame);
    driver
}

#[test]
fn starts_paused_and_centered() {
    let driver = AnimationDriver::new(BlobConfig::default());
    assert_eq!(driver.state(), DriverState::Paused);
    assert_eq!(driver.focal().current(), internal_center());
    assert!(!driver.is_frame_pending());
}

#[test]
fn frame_samples_around_smoothed_focal_point() {
    let cfg = BlobConfig::default().with_wobble(0.0, 0.0).with_smoothing(0.5);
    let mut driver = running_driver(cfg);
    driver.set_target(Point2D::new(600.0, 300.0));
    let mut surface = RecordingSurface::default();
    assert_eq!(driver.run_frame(&mut surface), Schedule::RequestFrame);

    let focal = Point2D::new(500.0, 300.0);
    // the world-space path already carries the focal offset
    assert!(surface.translations.is_empty());
    let anchors = surface.paths[0].anchors();
    assert_eq!(anchors.len(), cfg.point_count);
    // index 0 sits at angle 0, one radius right of the smoothed focal point
    assert!(anchors[0].distance(focal + Point2D::new(cfg.radius, 0.0)) < 1e-9);
}

#[test]
fn local_shape_frame_samples_around_origin() {
    let cfg = BlobConfig::default().with_wobble(0.0, 0.0);
    let mut driver = AnimationDriver::new(cfg).with_shape_frame(ShapeFrame::Local);
    let _ = driver.set_visible(true);
    let mut surface = RecordingSurface::default();
    let _ = driver.run_frame(&mut surface);
    let anchors = surface.paths[0].anchors();
    assert!(anchors[0].distance(Point2D::new(cfg.radius, 0.0)) < 1e-9);
    assert_eq!(surface.translations, vec![internal_center()]);
}

#[test]
fn each_frame_positions_the_blob_exactly_once() {
    let cfg = BlobConfig::default().with_wobble(0.0, 0.0).with_smoothing(1.0);
    let target = Point2D::new(650.0, 120.0);

    let mut world = AnimationDriver::new(cfg);
    let _ = world.set_visible(true);
    world.set_target(target);
    let mut world_surface = RecordingSurface::default();
    let _ = world.run_frame(&mut world_surface);

    let mut local = AnimationDriver::new(cfg).with_shape_frame(ShapeFrame::Local);
    let _ = local.set_visible(true);
    local.set_target(target);
    let mut local_surface = RecordingSurface::default();
    let _ = local.run_frame(&mut local_surface);

    // world: offset lives in the path; local: path at origin plus translation
    let world_first = world_surface.paths[0].anchors()[0];
    assert_eq!(local_surface.translations.len(), 1);
    let local_first = local_surface.paths[0].anchors()[0] + local_surface.translations[0];
    assert!(world_first.distance(target + Point2D::new(cfg.radius, 0.0)) < 1e-9);
    assert!(local_first.distance(world_first) < 1e-9);
}

#[test]
fn time_advances_once_per_frame() {
    let mut driver = running_driver(BlobConfig::default());
    let mut surface = RecordingSurface::default();
    for _ in 0..10 {
        let _ = driver.run_frame(&mut surface);
    }
    let expected = 10.0 * DEFAULT_WOBBLE_SPEED * FRAME_DELTA_MS;
    assert!((driver.time() - expected).abs() < 1e-12);
}

#[test]
fn hundred_frames_converge_on_fixed_target() {
    let mut driver = running_driver(BlobConfig::default());
    let target = Point2D::new(50.0, 550.0);
    driver.set_target(target);
    let mut surface = RecordingSurface::default();
    for _ in 0..100 {
        assert_eq!(driver.run_frame(&mut surface), Schedule::RequestFrame);
    }
    assert!(driver.focal().current().distance(target) < 1.0);
    assert_eq!(surface.paths.len(), 100);
}

/// Host-side stand-in for requestAnimationFrame: counts outstanding frames.
struct FrameQueue {
    outstanding: usize,
    max_outstanding: usize,
}

impl FrameQueue {
    fn new() -> Self {
        Self {
            outstanding: 0,
            max_outstanding: 0,
        }
    }

    fn apply(&mut self, schedule: Schedule) {
        if schedule == Schedule::RequestFrame {
            self.outstanding += 1;
            self.max_outstanding = self.max_outstanding.max(self.outstanding);
        }
    }

    fn run(&mut self, driver: &mut AnimationDriver, surface: &mut RecordingSurface) {
        if self.outstanding == 0 {
            return;
        }
        self.outstanding -= 1;
        let schedule = driver.run_frame(surface);
        self.apply(schedule);
    }
}

#[test]
fn visibility_toggle_with_pending_frame_keeps_one_loop() {
    let mut driver = AnimationDriver::new(BlobConfig::default());
    let mut surface = RecordingSurface::default();
    let mut queue = FrameQueue::new();

    queue.apply(driver.set_visible(true));
    queue.run(&mut driver, &mut surface);
    queue.apply(driver.set_visible(false));
    queue.apply(driver.set_visible(true));
    for _ in 0..5 {
        queue.run(&mut driver, &mut surface);
    }
    assert_eq!(queue.outstanding, 1);
    assert_eq!(queue.max_outstanding, 1);
    assert_eq!(driver.state(), DriverState::Running);
}

#[test]
fn paused_loop_lapses_and_resumes_once() {
    let mut driver = AnimationDriver::new(BlobConfig::default());
    let mut surface = RecordingSurface::default();
    let mut queue = FrameQueue::new();

    queue.apply(driver.set_visible(true));
    queue.run(&mut driver, &mut surface);
    queue.apply(driver.set_visible(false));
    // the outstanding frame observes the pause and does not reschedule
    queue.run(&mut driver, &mut surface);
    assert_eq!(queue.outstanding, 0);
    assert!(!driver.is_frame_pending());
    let frames_before = surface.paths.len();

    queue.apply(driver.set_visible(true));
    queue.apply(driver.set_visible(true));
    assert_eq!(queue.outstanding, 1);
    queue.run(&mut driver, &mut surface);
    assert_eq!(surface.paths.len(), frames_before + 1);
    assert_eq!(queue.max_outstanding, 1);
}

#[test]
fn hover_does_not_gate_animation() {
    let mut driver = running_driver(BlobConfig::default());
    driver.set_hovering(false);
    let mut surface = RecordingSurface::default();
    assert_eq!(driver.run_frame(&mut surface), Schedule::RequestFrame);
    driver.set_hovering(true);
    assert!(driver.is_hovering());
    assert_eq!(driver.run_frame(&mut surface), Schedule::RequestFrame);
}

#[test]
fn smoothing_override_rejects_out_of_range() {
    let mut driver = AnimationDriver::new(BlobConfig::default());
    driver.set_smoothing(0.2);
    assert_eq!(driver.smoothing(), 0.2);
    for bad in [0.0, -0.1, 1.5, f64::NAN] {
        driver.set_smoothing(bad);
        assert_eq!(driver.smoothing(), 0.2);
    }
}

#[test]
fn degenerate_point_count_skips_path_but_keeps_translation() {
    let cfg = BlobConfig::default().with_point_count(2);
    let mut driver = AnimationDriver::new(cfg).with_shape_frame(ShapeFrame::Local);
    let _ = driver.set_visible(true);
    let mut surface = RecordingSurface::default();
    assert_eq!(driver.run_frame(&mut surface), Schedule::RequestFrame);
    assert!(surface.paths.is_empty());
    assert_eq!(surface.translations.len(), 1);
}

#[test]
fn release_is_idempotent_and_inert() {
    let mut driver = running_driver(BlobConfig::default());
    driver.release();
    driver.release();
    assert!(driver.is_disposed());
    assert_eq!(driver.state(), DriverState::Paused);

    let before = driver.focal().current();
    driver.set_target(Point2D::new(0.0, 0.0));
    assert_eq!(driver.focal().target(), before);
    assert_eq!(driver.set_visible(true), Schedule::Nothing);

    let mut surface = RecordingSurface::default();
    assert_eq!(driver.run_frame(&mut surface), Schedule::Nothing);
    assert!(surface.paths.is_empty());
    assert!(surface.translations.is_empty());
}
