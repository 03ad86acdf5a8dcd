//! Connectivity and navigation queries on a finished grid.
//!
//! Agents never search paths through the maze; they only ask which ways are
//! open from the cell they stand on. The connectivity checks exist so the
//! perfect-maze invariants can be verified.

use std::collections::{HashSet, VecDeque};

use rand::Rng;
use rand::seq::SliceRandom;

use super::grid::{Grid, Space};
use crate::math::coordinates::{Direction, get_adjacent_space};

impl Grid {
    /// In-bounds neighbours of `space`, clockwise from north.
    pub fn neighbors(&self, space: Space) -> impl Iterator<Item = (Direction, Space)> + '_ {
        Direction::ALL.into_iter().filter_map(move |direction| {
            get_adjacent_space(space, direction, self.dimensions()).map(|next| (direction, next))
        })
    }

    /// Directions from `space` that lead onto an aisle. Empty unless `space`
    /// is itself an aisle.
    pub fn open_directions(&self, space: Space) -> Vec<Direction> {
        if !self.is_aisle(space) {
            return Vec::new();
        }
        self.neighbors(space)
            .filter(|&(_, next)| self.is_aisle(next))
            .map(|(direction, _)| direction)
            .collect()
    }

    /// An aisle with exactly one way out.
    pub fn is_dead_end(&self, space: Space) -> bool {
        self.is_aisle(space) && self.open_directions(space).len() == 1
    }

    /// An aisle where three or more corridors meet.
    pub fn is_junction(&self, space: Space) -> bool {
        self.is_aisle(space) && self.open_directions(space).len() >= 3
    }

    /// Every dead end, row-major. The entrance and exit openings are included.
    pub fn dead_ends(&self) -> Vec<Space> {
        self.aisle_spaces()
            .filter(|&space| self.is_dead_end(space))
            .collect()
    }

    /// Aisles reachable from `start` by 4-directional moves. Empty when
    /// `start` is not an aisle.
    pub fn reachable_from(&self, start: Space) -> HashSet<Space> {
        let mut visited = HashSet::new();
        if !self.is_aisle(start) {
            return visited;
        }

        let mut queue = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(space) = queue.pop_front() {
            for (_, next) in self.neighbors(space) {
                if self.is_aisle(next) && visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        visited
    }

    /// Whether every aisle can reach every other aisle.
    pub fn is_connected(&self) -> bool {
        match self.aisle_spaces().next() {
            Some(start) => self.reachable_from(start).len() == self.aisle_count(),
            None => true,
        }
    }

    /// Number of adjacent aisle pairs.
    pub fn aisle_edge_count(&self) -> usize {
        self.aisle_spaces()
            .map(|space| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter_map(|direction| get_adjacent_space(space, direction, self.dimensions()))
                    .filter(|&next| self.is_aisle(next))
                    .count()
            })
            .sum()
    }

    /// Connected with no loops: exactly one simple path between any two aisles.
    pub fn is_perfect(&self) -> bool {
        let aisles = self.aisle_count();
        aisles > 0 && self.aisle_edge_count() + 1 == aisles && self.is_connected()
    }

    /// Chooses where an agent standing on `space` and heading `facing` goes next.
    ///
    /// Forward, left and right are considered first and one open way is picked
    /// uniformly. With none open the agent turns back, if it can. Returns
    /// `None` only for an enclosed cell.
    pub fn pick_open_direction<R: Rng + ?Sized>(
        &self,
        space: Space,
        facing: Direction,
        rng: &mut R,
    ) -> Option<Direction> {
        let open = self.open_directions(space);
        let ahead: Vec<Direction> = [facing, facing.left(), facing.right()]
            .into_iter()
            .filter(|direction| open.contains(direction))
            .collect();

        ahead
            .choose(rng)
            .copied()
            .or_else(|| open.contains(&facing.opposite()).then_some(facing.opposite()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const LOOP: &str = "\
#####
#   #
# # #
#   #
#####
";

    const CORRIDORS: &str = "\
#*#####
# #   #
# # # #
#   # #
#####o#
";

    fn parse(text: &str) -> Grid {
        text.parse().unwrap()
    }

    #[test]
    fn test_open_directions() {
        let grid = parse(CORRIDORS);
        assert_eq!(
            grid.open_directions(Space::new(1, 1)),
            vec![Direction::North, Direction::South]
        );
        assert_eq!(
            grid.open_directions(Space::new(3, 2)),
            vec![Direction::East, Direction::West]
        );
        // wall corner beside the exit opening
        assert!(grid.open_directions(Space::new(0, 0)).is_empty());
        assert!(grid.open_directions(Space::new(1, 2)).is_empty());
    }

    #[test]
    fn test_dead_ends_and_junctions() {
        let grid = parse(CORRIDORS);
        assert_eq!(grid.dead_ends(), vec![Space::new(0, 1), Space::new(4, 5)]);
        assert!(!grid.is_dead_end(Space::new(0, 0)));
        assert!(!grid.is_junction(Space::new(1, 3)));

        let open = parse(LOOP);
        assert!(open.dead_ends().is_empty());
    }

    #[test]
    fn test_connectivity() {
        let grid = parse(CORRIDORS);
        assert!(grid.is_connected());
        assert_eq!(grid.reachable_from(Space::new(0, 1)).len(), grid.aisle_count());
        assert!(grid.reachable_from(Space::new(0, 0)).is_empty());

        let split = parse("#####\n# # #\n#####\n");
        assert!(!split.is_connected());
        assert!(!split.is_perfect());
    }

    #[test]
    fn test_perfect_maze_detection() {
        assert!(parse(CORRIDORS).is_perfect());

        let looped = parse(LOOP);
        assert!(looped.is_connected());
        assert_eq!(looped.aisle_edge_count(), looped.aisle_count());
        assert!(!looped.is_perfect());
    }

    #[test]
    fn test_pick_prefers_not_turning_back() {
        let grid = parse(CORRIDORS);
        let mut rng = StdRng::seed_from_u64(3);

        // straight corridor heading south: only forward is open ahead
        for _ in 0..10 {
            assert_eq!(
                grid.pick_open_direction(Space::new(1, 1), Direction::South, &mut rng),
                Some(Direction::South)
            );
        }

        // corner at (3, 1): coming south, the only way on is east (a left turn)
        assert_eq!(
            grid.pick_open_direction(Space::new(3, 1), Direction::South, &mut rng),
            Some(Direction::East)
        );
    }

    #[test]
    fn test_pick_turns_back_at_dead_end() {
        let grid = parse(CORRIDORS);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            grid.pick_open_direction(Space::new(0, 1), Direction::North, &mut rng),
            Some(Direction::South)
        );

        // walls beside the exit and inside the corridor bend
        assert_eq!(
            grid.pick_open_direction(Space::new(0, 0), Direction::East, &mut rng),
            None
        );
        assert_eq!(
            grid.pick_open_direction(Space::new(2, 2), Direction::North, &mut rng),
            None
        );

        let sealed = parse("###\n# #\n###\n");
        assert_eq!(
            sealed.pick_open_direction(Space::new(1, 1), Direction::East, &mut rng),
            None
        );
    }

    #[test]
    fn test_pick_is_uniform_among_open_ways() {
        let grid = parse(LOOP);
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = HashSet::new();

        // (1, 2) heading north: west and east are both open, north is wall
        for _ in 0..64 {
            seen.insert(grid.pick_open_direction(Space::new(1, 2), Direction::North, &mut rng));
        }
        assert_eq!(seen, HashSet::from([Some(Direction::West), Some(Direction::East)]));
    }
}
