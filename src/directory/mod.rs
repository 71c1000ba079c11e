// src/directory/mod.rs

pub mod directory;
pub mod filter;

pub use directory::{NavigationTarget, TournamentDirectory};
pub use filter::{
    filter_tournaments, status_counts, DirectoryFilter, EmptyListKind, StatusCounts, StatusFilter,
};
