//! pathlab: terminal pathfinding visualizer.
//!
//! Builds the demo board, runs the selected algorithm, and replays its
//! settlement trace and path as a terminal animation.

mod board;
mod ui;

use std::error::Error;

use pathlab_replay::Speed;
use pathlab_search::Algorithm;

const USAGE: &str = "usage: pathlab [bfs|dijkstra|astar|greedy] [slow|medium|fast]";

fn parse_args() -> Result<(Algorithm, Speed), String> {
    let mut algorithm = Algorithm::default();
    let mut speed = Speed::default();
    for arg in std::env::args().skip(1) {
        if let Ok(a) = arg.parse::<Algorithm>() {
            algorithm = a;
        } else if let Ok(s) = arg.parse::<Speed>() {
            speed = s;
        } else {
            return Err(format!("unrecognized argument `{arg}`\n{USAGE}"));
        }
    }
    Ok((algorithm, speed))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (algorithm, speed) = parse_args()?;
    let mut grid = board::demo_board().ok_or("demo board configuration is invalid")?;

    grid.reset();
    let result = algorithm.run(&mut grid)?;
    log::info!(
        "{algorithm}: settled {} cells, path {}",
        result.visited.len(),
        if result.found() {
            format!("{} steps", result.steps())
        } else {
            "not found".into()
        }
    );

    let outcome = ui::play(&mut grid, &result, algorithm, speed)?;
    if outcome.aborted {
        log::info!("animation aborted by user");
    }
    Ok(())
}
