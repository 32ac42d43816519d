//! The burrow-sorting world.
//!
//! A hallway of eleven cells sits above four side rooms. Agents of four
//! kinds start scattered across the rooms and must be sorted so each kind
//! occupies its own room, at minimal total energy. Moving one agent costs
//! the number of cells walked times the kind's step cost.
//!
//! Movement rules:
//!
//! - Agents never stop in the doorway cell directly above a room.
//! - An agent standing in the hallway may only move again by walking
//!   straight into its destination room, and only when that room holds no
//!   agent of another kind.
//! - Agents entering their room pack to the back: the only legal entry
//!   cell is the deepest open one.
//! - An agent already in its destination room never leaves unless the room
//!   still holds an agent of another kind beneath or above it.
//!
//! Successor generation runs an explicit-worklist flood fill per agent
//! over the empty cells it can reach, deduplicated against a
//! traversal-local structural set keyed by the pending move. Room depth is
//! a [`Geometry`] parameter, never module state: the two puzzle variants
//! differ only in depth.

use serde::Serialize;

use burrow_kernel::store::{CanonSet, Canonical};
use burrow_search::contract::SearchWorld;

/// The hallway row.
pub const HALLWAY_ROW: i32 = 1;

/// Leftmost and rightmost hallway columns.
const HALLWAY_SPAN: std::ops::RangeInclusive<i32> = 1..=11;

/// Columns holding a room, left to right.
pub const ROOM_COLUMNS: [i32; 4] = [3, 5, 7, 9];

/// A grid coordinate. Roles (hallway, doorway, room) are derived from the
/// coordinates via [`Geometry`], not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

/// Burrow shape: fixed hallway and room columns, variable room depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    room_depth: i32,
}

impl Geometry {
    /// A burrow whose rooms hold `room_depth` agents each.
    #[must_use]
    pub fn new(room_depth: u8) -> Self {
        Self {
            room_depth: i32::from(room_depth),
        }
    }

    /// Number of cells in each room.
    #[must_use]
    pub fn room_depth(&self) -> i32 {
        self.room_depth
    }

    /// The row of the deepest room cell.
    #[must_use]
    pub fn deepest_room_row(&self) -> i32 {
        HALLWAY_ROW + self.room_depth
    }

    /// Whether `cell` is a hallway cell (doorways included).
    #[must_use]
    pub fn is_hallway(&self, cell: Cell) -> bool {
        cell.y == HALLWAY_ROW && HALLWAY_SPAN.contains(&cell.x)
    }

    /// Whether `cell` is the hallway cell directly above a room. Never a
    /// legal stopping point.
    #[must_use]
    pub fn is_doorway(&self, cell: Cell) -> bool {
        self.is_hallway(cell) && ROOM_COLUMNS.contains(&cell.x)
    }

    /// Whether `cell` is inside a room.
    #[must_use]
    pub fn is_room(&self, cell: Cell) -> bool {
        cell.y > HALLWAY_ROW && cell.y <= self.deepest_room_row() && ROOM_COLUMNS.contains(&cell.x)
    }

    /// The orthogonally adjacent cells that are part of the burrow.
    #[must_use]
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        let candidates = [
            Cell {
                x: cell.x + 1,
                y: cell.y,
            },
            Cell {
                x: cell.x - 1,
                y: cell.y,
            },
            Cell {
                x: cell.x,
                y: cell.y + 1,
            },
            Cell {
                x: cell.x,
                y: cell.y - 1,
            },
        ];
        candidates
            .into_iter()
            .filter(|&c| self.is_hallway(c) || self.is_room(c))
            .collect()
    }
}

/// The four agent kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AgentKind {
    Amber,
    Bronze,
    Copper,
    Desert,
}

impl AgentKind {
    /// All kinds, in room order.
    pub const ALL: [Self; 4] = [Self::Amber, Self::Bronze, Self::Copper, Self::Desert];

    /// The kind denoted by a grid character, if any.
    #[must_use]
    pub fn from_char(character: char) -> Option<Self> {
        match character {
            'A' => Some(Self::Amber),
            'B' => Some(Self::Bronze),
            'C' => Some(Self::Copper),
            'D' => Some(Self::Desert),
            _ => None,
        }
    }

    /// Energy spent per cell walked.
    #[must_use]
    pub fn step_cost(self) -> u64 {
        match self {
            Self::Amber => 1,
            Self::Bronze => 10,
            Self::Copper => 100,
            Self::Desert => 1000,
        }
    }

    /// The column of this kind's destination room.
    #[must_use]
    pub fn home_column(self) -> i32 {
        match self {
            Self::Amber => 3,
            Self::Bronze => 5,
            Self::Copper => 7,
            Self::Desert => 9,
        }
    }
}

/// A mobile agent: a kind and its current cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Agent {
    pub kind: AgentKind,
    pub at: Cell,
}

impl Agent {
    /// Energy to walk from the current cell to `to`.
    ///
    /// Motion is hallway-then-room or room-then-hallway, so the cost
    /// decomposes as steps-up + steps-along + steps-down; no pathfinding is
    /// needed. Same-column moves are straight vertical.
    #[must_use]
    pub fn move_cost(&self, to: Cell) -> u64 {
        let steps = if self.at.x == to.x {
            u64::from(self.at.y.abs_diff(to.y))
        } else {
            u64::from(self.at.y.abs_diff(HALLWAY_ROW))
                + u64::from(self.at.x.abs_diff(to.x))
                + u64::from(to.y.abs_diff(HALLWAY_ROW))
        };
        steps * self.kind.step_cost()
    }

    /// Whether the agent stands inside its destination room.
    #[must_use]
    pub fn is_home(&self, geometry: &Geometry) -> bool {
        geometry.is_room(self.at) && self.at.x == self.kind.home_column()
    }
}

/// A full assignment of every agent to a cell, plus accumulated energy.
///
/// Immutable: transitions construct new values. Agent order in the vector
/// is an implementation detail; structural identity goes through
/// [`Configuration::key`], which sorts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    agents: Vec<Agent>,
    energy: u64,
}

/// The identity-relevant projection of a [`Configuration`]: the sorted
/// multiset of `(kind, cell)` pairs. Accumulated energy and agent order
/// are excluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigKey(Vec<Agent>);

impl Configuration {
    /// Build a configuration.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if two agents occupy the same cell — that is
    /// a domain-model bug, not a recoverable condition.
    #[must_use]
    pub fn new(agents: Vec<Agent>, energy: u64) -> Self {
        debug_assert!(
            agents
                .iter()
                .enumerate()
                .all(|(i, a)| agents[..i].iter().all(|b| b.at != a.at)),
            "two agents occupy the same cell"
        );
        Self { agents, energy }
    }

    /// The agents, in internal order.
    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Total energy spent reaching this configuration.
    #[must_use]
    pub fn energy(&self) -> u64 {
        self.energy
    }

    /// Whether every agent stands in its destination room.
    #[must_use]
    pub fn is_organized(&self, geometry: &Geometry) -> bool {
        self.agents.iter().all(|a| a.is_home(geometry))
    }

    /// The structural identity of this configuration.
    #[must_use]
    pub fn key(&self) -> ConfigKey {
        let mut sorted = self.agents.clone();
        sorted.sort_unstable();
        ConfigKey(sorted)
    }

    /// Whether any agent occupies `cell`.
    #[must_use]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        occupied(&self.agents, cell)
    }

    /// Whether the room in `column` holds an agent of a kind that does not
    /// belong there ("incorrectly occupied").
    #[must_use]
    pub fn room_hosts_stranger(&self, column: i32) -> bool {
        room_hosts_stranger(&self.agents, column)
    }

    /// The deepest unoccupied row of the room in `column` — the only legal
    /// entry row. Equals the deepest room row when the room is empty.
    #[must_use]
    pub fn deepest_open_row(&self, geometry: &Geometry, column: i32) -> i32 {
        deepest_open_row(geometry, &self.agents, column, None)
    }

    /// All configurations reachable by moving one agent through empty
    /// cells to a cell it may legally rest on.
    ///
    /// Per agent, an explicit worklist walks every reachable empty cell,
    /// deduplicating partial moves against a traversal-local structural
    /// set. Cells that survive the rest rules finalize into a successor
    /// whose energy adds the single move's cost from the agent's original
    /// cell. Every successor's energy is strictly greater than this
    /// configuration's: a zero-length move is its own seed and is caught
    /// by the dedup set.
    #[must_use]
    pub fn successors(&self, geometry: &Geometry) -> Vec<Self> {
        let mut next_states = Vec::new();
        let mut seen: CanonSet<MoveKey> = CanonSet::new();
        let mut worklist: Vec<Intermediate> = Vec::new();

        for (index, agent) in self.agents.iter().enumerate() {
            if let Ok(seed) = Canonical::new(MoveKey::seed(agent)) {
                seen.insert(seed);
            }
            worklist.push(Intermediate {
                agents: self.agents.clone(),
                moving: index,
                origin: *agent,
            });
        }

        while let Some(step) = worklist.pop() {
            let mover = step.agents[step.moving];
            let home_column = mover.kind.home_column();
            let home_hosts_stranger = room_hosts_stranger(&step.agents, home_column);

            for cell in geometry.neighbors(mover.at) {
                if occupied(&step.agents, cell) {
                    continue;
                }
                // An agent already home never moves up again, unless its
                // room still holds a wrong-kind agent.
                if step.origin.is_home(geometry)
                    && cell.y < step.origin.at.y
                    && !home_hosts_stranger
                {
                    continue;
                }
                // From the hallway, a room may only be entered if it is
                // the mover's destination and free of strangers. Rooms are
                // dead ends, so this also prunes traversal.
                if geometry.is_room(cell)
                    && geometry.is_hallway(mover.at)
                    && (cell.x != home_column || room_hosts_stranger(&step.agents, cell.x))
                {
                    continue;
                }

                let Ok(key) = Canonical::new(MoveKey {
                    kind: step.origin.kind,
                    from: step.origin.at,
                    to: cell,
                }) else {
                    debug_assert!(false, "move key must canonicalize");
                    continue;
                };
                if !seen.insert(key) {
                    continue;
                }

                let mut moved = step.agents.clone();
                moved[step.moving].at = cell;
                worklist.push(Intermediate {
                    agents: moved.clone(),
                    moving: step.moving,
                    origin: step.origin,
                });

                // The walk continues past the cells below; no successor is
                // emitted for them.
                if geometry.is_hallway(step.origin.at) && geometry.is_hallway(cell) {
                    continue;
                }
                if geometry.is_doorway(cell) {
                    continue;
                }
                if geometry.is_room(cell) {
                    if cell.x != home_column {
                        continue;
                    }
                    // Pack to the back: the only legal entry row is the
                    // deepest open one.
                    if cell.y != deepest_open_row(geometry, &step.agents, cell.x, Some(step.moving))
                    {
                        continue;
                    }
                }

                next_states.push(Self::new(
                    moved,
                    self.energy + step.origin.move_cost(cell),
                ));
            }
        }

        next_states
    }
}

/// A transient in-progress move: the configuration mid-walk, the index of
/// the agent being moved, and the agent as it stood when the walk began.
/// The origin is needed both for the completed move's cost and for the
/// never-leave-home rule. Never escapes successor generation.
#[derive(Debug, Clone)]
struct Intermediate {
    agents: Vec<Agent>,
    moving: usize,
    origin: Agent,
}

/// Traversal-local dedup key: one pending move of one agent. Keyed on the
/// move, not the whole configuration — only the moving agent changes
/// during the walk.
#[derive(Debug, Clone, Serialize)]
struct MoveKey {
    kind: AgentKind,
    from: Cell,
    to: Cell,
}

impl MoveKey {
    fn seed(agent: &Agent) -> Self {
        Self {
            kind: agent.kind,
            from: agent.at,
            to: agent.at,
        }
    }
}

fn occupied(agents: &[Agent], cell: Cell) -> bool {
    agents.iter().any(|a| a.at == cell)
}

fn room_hosts_stranger(agents: &[Agent], column: i32) -> bool {
    agents
        .iter()
        .any(|a| a.at.x == column && a.at.y > HALLWAY_ROW && a.kind.home_column() != column)
}

fn deepest_open_row(
    geometry: &Geometry,
    agents: &[Agent],
    column: i32,
    ignore: Option<usize>,
) -> i32 {
    agents
        .iter()
        .enumerate()
        .filter(|(i, a)| {
            Some(*i) != ignore && a.at.x == column && a.at.y > HALLWAY_ROW
        })
        .map(|(_, a)| a.at.y)
        .min()
        .map_or(geometry.deepest_room_row(), |y| y - 1)
}

/// Grid parse failure. Fails fast; no partial configuration is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A character other than `#`, `.`, space, or an agent letter.
    UnrecognizedCharacter { character: char, x: usize, y: usize },
    /// An agent letter on a cell outside the configured burrow.
    MisplacedAgent { kind: AgentKind, x: usize, y: usize },
    /// A kind whose agent count does not match the room depth.
    WrongKindCount {
        kind: AgentKind,
        expected: usize,
        found: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character, x, y } => {
                write!(f, "unrecognized character {character:?} at column {x}, row {y}")
            }
            Self::MisplacedAgent { kind, x, y } => {
                write!(f, "{kind:?} agent outside the burrow at column {x}, row {y}")
            }
            Self::WrongKindCount {
                kind,
                expected,
                found,
            } => {
                write!(f, "expected {expected} {kind:?} agents, found {found}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a burrow grid into its initial configuration.
///
/// `#` is wall, `.` empty floor, space padding; `A`–`D` place an agent.
/// The configuration starts at zero energy.
///
/// # Errors
///
/// Returns [`ParseError`] on any other character, on an agent outside the
/// burrow described by `geometry`, or when a kind's agent count differs
/// from the room depth.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn parse(input: &str, geometry: &Geometry) -> Result<Configuration, ParseError> {
    let mut agents = Vec::new();
    for (y, line) in input.lines().enumerate() {
        for (x, character) in line.chars().enumerate() {
            match character {
                '#' | '.' | ' ' | '\r' => {}
                other => {
                    let Some(kind) = AgentKind::from_char(other) else {
                        return Err(ParseError::UnrecognizedCharacter {
                            character: other,
                            x,
                            y,
                        });
                    };
                    let cell = Cell {
                        x: x as i32,
                        y: y as i32,
                    };
                    if !geometry.is_room(cell) && !geometry.is_hallway(cell) {
                        return Err(ParseError::MisplacedAgent { kind, x, y });
                    }
                    agents.push(Agent { kind, at: cell });
                }
            }
        }
    }

    let expected = geometry.room_depth() as usize;
    for kind in AgentKind::ALL {
        let found = agents.iter().filter(|a| a.kind == kind).count();
        if found != expected {
            return Err(ParseError::WrongKindCount {
                kind,
                expected,
                found,
            });
        }
    }

    Ok(Configuration::new(agents, 0))
}

/// The burrow world, searchable by the generic engine.
#[derive(Debug, Clone, Copy)]
pub struct BurrowWorld {
    geometry: Geometry,
}

impl BurrowWorld {
    /// A world over the given burrow shape.
    #[must_use]
    pub fn new(geometry: Geometry) -> Self {
        Self { geometry }
    }

    /// The burrow shape.
    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }
}

impl SearchWorld for BurrowWorld {
    type State = Configuration;
    type Key = ConfigKey;

    fn cost(&self, state: &Configuration) -> u64 {
        state.energy()
    }

    fn key(&self, state: &Configuration) -> ConfigKey {
        state.key()
    }

    fn is_goal(&self, state: &Configuration) -> bool {
        state.is_organized(&self.geometry)
    }

    fn successors(&self, state: &Configuration) -> Vec<Configuration> {
        state.successors(&self.geometry)
    }
}
