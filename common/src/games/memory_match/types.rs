pub const PAIR_COUNT: usize = 6;
pub const CARD_COUNT: usize = PAIR_COUNT * 2;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Icon {
    Cpu,
    Chip,
    Router,
    Server,
    Database,
    Code,
}

impl Icon {
    pub const ALL: [Icon; PAIR_COUNT] = [
        Icon::Cpu,
        Icon::Chip,
        Icon::Router,
        Icon::Server,
        Icon::Database,
        Icon::Code,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Icon::Cpu => "cpu",
            Icon::Chip => "chip",
            Icon::Router => "router",
            Icon::Server => "server",
            Icon::Database => "database",
            Icon::Code => "code",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Card {
    pub id: usize,
    pub icon: Icon,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FlipOutcome {
    /// First card of a pair turned over.
    Revealed(Icon),
    Matched(Icon),
    /// Both cards stay face up until `hide_mismatched` is called.
    Mismatch { first: usize, second: usize },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    InProgress,
    Won,
}
