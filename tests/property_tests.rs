//! Property tests for the board, path search and the turn engine.
//!
//! Games are driven with random seeds, modes and move sequences; each
//! property must hold after every intent, accepted or not.

use grid_pursuit::core::{Agent, Direction, GameMode, GameRng, Position};
use grid_pursuit::game::{GameBuilder, MoveOutcome};
use grid_pursuit::graph::{reachable, shortest_path, GridGraph};
use proptest::prelude::*;

fn mode_strategy() -> impl Strategy<Value = GameMode> {
    prop_oneof![
        Just(GameMode::Offense),
        Just(GameMode::Defense),
        Just(GameMode::TwoPlayer),
    ]
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    (0usize..4).prop_map(|i| Direction::ALL[i])
}

// =============================================================================
// Turn Engine
// =============================================================================

proptest! {
    #[test]
    fn active_edges_never_grow(
        seed in any::<u64>(),
        mode in mode_strategy(),
        moves in prop::collection::vec((any::<bool>(), direction_strategy()), 1..60)
    ) {
        let mut game = GameBuilder::new().mode(mode).seed(seed).build().unwrap();
        let mut active = game.graph().active_edge_count();

        for (red, direction) in moves {
            let agent = if red { Agent::Red } else { Agent::Blue };
            game.submit_move(agent, direction);
            let now = game.graph().active_edge_count();
            prop_assert!(now <= active);
            active = now;
        }
    }

    #[test]
    fn results_stay_final(
        seed in any::<u64>(),
        mode in mode_strategy(),
        moves in prop::collection::vec((any::<bool>(), direction_strategy()), 1..120)
    ) {
        let mut game = GameBuilder::new().mode(mode).grid_size(3).initial_gaps(1).seed(seed).build().unwrap();
        let mut finished = None;

        for (red, direction) in moves {
            let agent = if red { Agent::Red } else { Agent::Blue };
            let outcome = game.submit_move(agent, direction);

            if let Some(result) = finished {
                prop_assert!(!outcome.is_moved());
                prop_assert_eq!(game.result(), result);
            } else if game.result().is_terminal() {
                finished = Some(game.result());
            }
        }
    }

    #[test]
    fn snapshot_matches_state(
        seed in any::<u64>(),
        mode in mode_strategy(),
        moves in prop::collection::vec((any::<bool>(), direction_strategy()), 0..40)
    ) {
        let mut game = GameBuilder::new().mode(mode).seed(seed).build().unwrap();
        for (red, direction) in moves {
            let agent = if red { Agent::Red } else { Agent::Blue };
            game.submit_move(agent, direction);

            let snapshot = game.snapshot();
            prop_assert_eq!(snapshot.joined, game.agents().blue == game.agents().red);
            prop_assert_eq!(snapshot.result, game.result());
            prop_assert_eq!(snapshot.message.is_empty(), !game.result().is_terminal());
            prop_assert_eq!(snapshot.active_edges().count(), game.graph().active_edge_count());
        }
    }

    #[test]
    fn accepted_moves_follow_edges(
        seed in any::<u64>(),
        moves in prop::collection::vec(direction_strategy(), 1..40)
    ) {
        let mut game = GameBuilder::new().mode(GameMode::TwoPlayer).seed(seed).build().unwrap();

        for direction in moves {
            let agent = game.current_actor();
            let from = game.agents()[agent];
            let open = game.is_adjacent_via_active_edge(from, from.step(direction));

            let outcome = game.submit_move(agent, direction);
            if game.result().is_terminal() && !outcome.is_moved() {
                break;
            }
            prop_assert_eq!(outcome.is_moved(), open);
            if let MoveOutcome::Moved { to, .. } = outcome {
                prop_assert_eq!(to, from.step(direction));
            }
        }
    }
}

// =============================================================================
// Board and Path Search
// =============================================================================

proptest! {
    #[test]
    fn paths_are_shortest(
        seed in any::<u64>(),
        gaps in 0usize..30,
        ax in 0i32..6, ay in 0i32..6, bx in 0i32..6, by in 0i32..6
    ) {
        let mut graph = GridGraph::new(6);
        graph.remove_interior_edges(gaps, &mut GameRng::new(seed));
        let a = Position::new(ax, ay);
        let b = Position::new(bx, by);

        match shortest_path(&graph, a, b) {
            Some(path) => {
                prop_assert!(reachable(&graph, a, b));
                prop_assert!(path.steps() as u32 >= a.manhattan(b));
                for pair in path.nodes().windows(2) {
                    prop_assert!(graph.is_adjacent_via_active_edge(pair[0], pair[1]));
                }
                // Reverse search finds a path of the same length
                let back = shortest_path(&graph, b, a).unwrap();
                prop_assert_eq!(back.len(), path.len());
            }
            None => prop_assert!(!reachable(&graph, a, b)),
        }
    }

    #[test]
    fn full_lattice_paths_are_manhattan(
        size in 2i32..12,
        ax in 0i32..12, ay in 0i32..12, bx in 0i32..12, by in 0i32..12
    ) {
        let graph = GridGraph::new(size);
        let a = Position::new(ax % size, ay % size);
        let b = Position::new(bx % size, by % size);

        let path = shortest_path(&graph, a, b).unwrap();
        prop_assert_eq!(path.len(), a.manhattan(b) as usize + 1);
    }

    #[test]
    fn bridge_between_adjacent_agents_survives(
        seed in any::<u64>(),
        x in 0i32..5, y in 0i32..6,
        removals in 1usize..80
    ) {
        let mut graph = GridGraph::new(6);
        let mut rng = GameRng::new(seed);
        let blue = Position::new(x, y);
        let red = Position::new(x + 1, y);
        let bridge = graph.edge_between(blue, red).unwrap();

        for _ in 0..removals {
            let removed = graph.remove_random_active_edge(&mut rng, |e| e.id == bridge);
            prop_assert_ne!(removed, Some(bridge));
        }
        prop_assert!(graph.is_adjacent_via_active_edge(blue, red));
    }

    #[test]
    fn setup_gaps_are_interior(seed in any::<u64>(), size in 2i32..10) {
        let game = GameBuilder::new().grid_size(size).seed(seed).build().unwrap();
        let graph = game.graph();

        let interior = graph.edges().iter().filter(|e| e.is_interior(size)).count();
        let inactive: Vec<_> = graph.edges().iter().filter(|e| !e.active).collect();

        prop_assert_eq!(inactive.len(), interior.min(3));
        for edge in inactive {
            prop_assert!(edge.is_interior(size));
        }
    }
}
