use std::error::Error;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::controllers::cli::args::Cli;
use crate::controllers::scene::SceneController;
use crate::core::palettes::palette_store::PaletteStore;

const LOG_EVERY_FRAMES: u32 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u32,
    pub scenes: u64,
    /// Checksum of the last composed frame.
    pub last_checksum: Option<u64>,
    pub elapsed: Duration,
}

/// Runs the animation headless for `cli.frames` frames, logging progress.
pub fn run(cli: &Cli) -> Result<RunSummary, Box<dyn Error>> {
    let palettes = match &cli.palette_file {
        Some(path) => PaletteStore::load(path)?,
        None => PaletteStore::builtin(),
    };
    let config = cli.scene_config(&palettes)?;

    info!(
        width = config.width,
        height = config.height,
        knots = config.knot_count,
        seed = config.seed,
        palettes = palettes.len(),
        "starting"
    );

    let mut controller = SceneController::new(config, palettes)?;
    let mut last_checksum = None;
    let start = Instant::now();

    for n in 0..cli.frames {
        let frame = controller.next_frame()?;
        let checksum = frame_checksum(frame.buffer.buffer());
        last_checksum = Some(checksum);

        if n % LOG_EVERY_FRAMES == 0 {
            info!(
                frame = n,
                state = %frame.state.state,
                offset = frame.state.offset,
                fade = frame.state.fade,
                checksum = %format!("{:016x}", checksum),
                "frame"
            );
        } else {
            debug!(frame = n, checksum, "frame");
        }
    }

    let summary = RunSummary {
        frames: cli.frames,
        scenes: controller.scenes_built(),
        last_checksum,
        elapsed: start.elapsed(),
    };
    info!(
        frames = summary.frames,
        scenes = summary.scenes,
        elapsed = ?summary.elapsed,
        "done"
    );

    Ok(summary)
}

/// 64-bit FNV-1a over the frame bytes.
pub fn frame_checksum(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    bytes.iter().fold(OFFSET_BASIS, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(PRIME)
    })
}
