pub mod manual_finder_orchestrator;

pub use manual_finder_orchestrator::{build_query, ManualFinderOrchestrator};
