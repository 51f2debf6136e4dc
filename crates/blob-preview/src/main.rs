use std::fmt::Write as _;
use std::fs;
use std::io::Write as _;

use anyhow::Context;
use blob_core::{
    AnimationDriver, BlobConfig, CurvePath, Point2D, Schedule, Surface, FRAME_DELTA_MS,
    VIEWBOX_HEIGHT, VIEWBOX_WIDTH,
};
use instant::Instant;

const DEFAULT_FRAMES: usize = 120;

/// Collects one path per frame for an SMIL `<animate>` of the mask path.
/// Paths are sampled in world space, so no translation arrives.
#[derive(Default)]
struct FrameRecorder {
    paths: Vec<String>,
}

impl Surface for FrameRecorder {
    fn set_path(&mut self, path: &CurvePath) {
        self.paths.push(path.to_svg());
    }
}

impl FrameRecorder {
    fn to_svg_document(&self) -> String {
        let dur_sec = self.paths.len() as f64 * FRAME_DELTA_MS / 1000.0;
        let first = self.paths.first().map(String::as_str).unwrap_or("");
        let mut out = String::new();
        _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {VIEWBOX_WIDTH} {VIEWBOX_HEIGHT}">"#
        );
        _ = writeln!(out, r#"  <defs><mask id="blob-mask"><rect width="100%" height="100%" fill="black"/>"#);
        _ = writeln!(out, r#"    <path fill="white" d="{first}">"#);
        _ = writeln!(
            out,
            r#"      <animate attributeName="d" dur="{dur_sec:.3}s" repeatCount="indefinite" values="{}"/>"#,
            self.paths.join(";")
        );
        _ = writeln!(out, "    </path></mask></defs>");
        _ = writeln!(out, r##"  <rect width="100%" height="100%" fill="#1b2230"/>"##);
        _ = writeln!(
            out,
            r##"  <rect width="100%" height="100%" fill="#f2b84b" mask="url(#blob-mask)"/>"##
        );
        out.push_str("</svg>\n");
        out
    }
}

/// Scripted pointer: a slow figure-eight across the internal space.
fn pointer_at(frame: usize) -> Point2D {
    let t = frame as f64 * 0.03;
    Point2D::new(
        VIEWBOX_WIDTH / 2.0 + t.sin() * VIEWBOX_WIDTH * 0.3,
        VIEWBOX_HEIGHT / 2.0 + (2.0 * t).sin() * VIEWBOX_HEIGHT * 0.25,
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut args = std::env::args().skip(1);
    let frames = match args.next() {
        Some(s) => s
            .parse::<usize>()
            .with_context(|| format!("invalid frame count `{s}`"))?,
        None => DEFAULT_FRAMES,
    };
    let output = args.next();

    let config = BlobConfig::default().validate()?;
    let mut driver = AnimationDriver::new(config);
    let mut recorder = FrameRecorder::default();

    let started = Instant::now();
    let mut schedule = driver.set_visible(true);
    let mut frame = 0;
    while frame < frames && schedule == Schedule::RequestFrame {
        driver.set_target(pointer_at(frame));
        schedule = driver.run_frame(&mut recorder);
        frame += 1;
    }
    driver.release();
    log::info!(
        "rendered {} frames in {:?}, final focal ({:.1}, {:.1})",
        recorder.paths.len(),
        started.elapsed(),
        driver.focal().current().x,
        driver.focal().current().y
    );

    let svg = recorder.to_svg_document();
    match output {
        Some(path) => {
            fs::write(&path, svg).with_context(|| format!("writing {path}"))?;
            log::info!("wrote {path}");
        }
        None => std::io::stdout()
            .write_all(svg.as_bytes())
            .context("writing to stdout")?,
    }
    Ok(())
}
