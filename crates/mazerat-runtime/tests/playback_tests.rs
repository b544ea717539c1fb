//! Record a run, save it next to the maze, and play it back.

use std::time::Duration;

use mazerat_runtime::prelude::*;

fn winding() -> CellGrid {
    CellGrid::from_ascii(
        "
        #########
        #...#..D#
        #.#.#.###
        #.#...#.#
        #S#####.#
        #########
        ",
    )
    .unwrap()
}

#[test]
fn wall_follower_run_replays_to_the_same_end() {
    let dir = tempfile::tempdir().unwrap();
    let maze_path = dir.path().join("winding.json");
    save_grid(&winding(), &maze_path).unwrap();

    let mut sim = Simulation::new(load_grid(&maze_path).unwrap());
    sim.add_rat(PolicyKind::WallFollower.build()).unwrap();
    assert_eq!(sim.run(Duration::ZERO).unwrap(), 13);
    let final_states = sim.states();

    let steps_path = steps_path_for(&maze_path);
    save_steps(&sim.take_record(), &steps_path).unwrap();
    assert!(sim.record().is_empty());

    let record = load_steps(&steps_path).unwrap();
    assert_eq!(record.len(), 13);
    assert_eq!(record.policies, vec!["wall-follower"]);

    let log = EventLog::new();
    let mut player = Player::new(load_grid(&maze_path).unwrap());
    player.add_view(Box::new(log.clone()));
    let replayed = player.play(&record, Duration::ZERO).unwrap();

    assert_eq!(replayed.len(), 1);
    assert_eq!(replayed[0].location(), final_states[0].location());
    assert_eq!(replayed[0].heading(), final_states[0].heading());
    assert_eq!(replayed[0].location(), Some(Location::new(7, 4)));

    assert_eq!(log.count(UpdateKind::FullRedraw), 1);
    assert_eq!(log.count(UpdateKind::Direction), 13);
    assert_eq!(log.count(UpdateKind::Location), 13);
}

#[test]
fn multi_rat_playback_keeps_rat_order() {
    let grid = winding();
    let mut sim = Simulation::new(grid.clone());
    sim.add_rat(PolicyKind::WallFollower.build()).unwrap();
    sim.add_rat(PolicyKind::Random.build_seeded(5)).unwrap();
    sim.add_rat(PolicyKind::TurnAround.build()).unwrap();

    // any ending will do; what matters is that the record replays it
    let _ = sim.run(Duration::ZERO);
    let live = sim.states();
    let record = sim.take_record();
    assert_eq!(record.rat_count(), 3);

    let replayed = Player::new(grid).play(&record, Duration::ZERO).unwrap();
    let last = record.last().unwrap();
    for (idx, rat) in replayed.iter().enumerate() {
        assert_eq!(rat.location(), Some(last.positions[idx]));
        assert_eq!(rat.heading(), last.directions[idx]);
    }
    // when the run ended cleanly the replay lands where the rats did
    if sim.state() != RunState::Stuck {
        for (live, replayed) in live.iter().zip(&replayed) {
            assert_eq!(live.location(), replayed.location());
        }
    }
}

#[test]
fn cancelled_playback() {
    let grid = winding();
    let mut sim = Simulation::new(grid.clone());
    sim.add_rat(PolicyKind::WallFollower.build()).unwrap();
    sim.run(Duration::ZERO).unwrap();

    let token = CancelToken::new();
    token.cancel();
    let err = Player::new(grid)
        .play_cancellable(sim.record(), Duration::ZERO, &token)
        .unwrap_err();
    assert_eq!(err, MazeError::Cancelled { tick: 0 });
}
