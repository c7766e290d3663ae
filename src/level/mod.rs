// Level module - level data on disk and the live level being played
//
// - data.rs: LevelData schema and the sources levels are loaded from
// - session.rs: LevelSession, which owns every entity in one playthrough

pub mod data;
pub mod session;

pub use data::{LevelData, LevelLibrary, LevelSource, MemoryLevels};
pub use session::{LevelOutcome, LevelSession};
