//! Sky Hopper entry point
//!
//! Headless native runner standing in for the scheduler collaborator: drives
//! the session with a fixed-timestep lag accumulator at the nominal rate,
//! then reports the final score to the scoreboard.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use sky_hopper::consts::{MAX_SUBSTEPS, NOMINAL_FPS};
use sky_hopper::scoreboard::{stars, JsonFileStore};
use sky_hopper::sim::GameplaySession;
use sky_hopper::{Scoreboard, Tuning};

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut session = GameplaySession::new(Tuning::default(), seed);

    let frame = Duration::from_secs_f32(1.0 / NOMINAL_FPS);
    let mut last = Instant::now();
    let mut lag = Duration::ZERO;

    let snapshot = 'run: loop {
        let now = Instant::now();
        lag += now - last;
        last = now;

        let mut substeps = 0;
        while lag >= frame && substeps < MAX_SUBSTEPS {
            let snapshot = session.tick(NOMINAL_FPS);
            lag -= frame;
            substeps += 1;
            if snapshot.terminal.is_over() {
                break 'run snapshot;
            }
        }

        std::thread::sleep(frame.saturating_sub(last.elapsed()));
    };

    let score = snapshot.final_score().unwrap_or(0);
    log::info!("run over: {:?} with score {}", snapshot.terminal, score);

    // Name entry is a UI concern; the runner takes it from the environment
    let name = std::env::var("PLAYER").unwrap_or_default();
    let mut board = Scoreboard::with_store(Box::new(JsonFileStore::new("scores.json")));
    let rank = board.record(&name, score);

    println!("{:?} - score {score} (rank {rank})", snapshot.terminal);
    for entry in board.entries().iter().take(10) {
        println!("{} {} : {}", stars(entry.score), entry.name, entry.score);
    }
}
