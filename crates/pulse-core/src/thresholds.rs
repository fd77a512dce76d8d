//! Fixed thresholds used by the feedback heuristics

/// Brainstorm summary tiers: fewer ideas than each bound selects that tier
pub const BRAINSTORM_STARTING: usize = 3;
pub const BRAINSTORM_GOOD_START: usize = 5;
pub const BRAINSTORM_EXCELLENT: usize = 8;

/// Organize: at most this many priorities counts as focused
pub const ORGANIZE_FOCUSED_MAX: usize = 5;
/// Organize: fewer priorities than this reads as a narrow focus
pub const ORGANIZE_NARROW: usize = 3;

/// Inspire summary tiers by reference count
pub const INSPIRE_STARTING: usize = 2;
pub const INSPIRE_FOUNDATION: usize = 5;
pub const INSPIRE_BREADTH: usize = 10;
/// Inspire: fewer references than this asks for more research
pub const INSPIRE_RESEARCH_MIN: usize = 3;

/// Experiment: first test description must be longer than this to be focused
pub const EXPERIMENT_FOCUSED_CHARS: usize = 10;
/// Experiment: how many metrics are echoed back
pub const EXPERIMENT_METRICS_ECHOED: usize = 2;

/// Themes: tokens must be longer than this many characters
pub const THEME_MIN_TOKEN_CHARS: usize = 3;
/// Themes: tokens must appear more than this many times
pub const THEME_MIN_FREQUENCY: usize = 1;
/// Themes: at most this many are returned
pub const THEME_LIMIT: usize = 3;
