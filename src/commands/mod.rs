//! Command implementations

pub mod advise;
pub mod analyze;
pub mod hard_mode;
pub mod top;
pub mod worst_case;

pub use advise::run_advise;
pub use analyze::{AnalysisResult, analyze_word};
pub use hard_mode::analyze_hard_mode;
pub use top::{TopEntropies, top_entropies};
pub use worst_case::analyze_worst_case;
