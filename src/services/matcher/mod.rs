//! Fuzzy association of schedule rows with original TKB documents.

pub mod file_matcher;
pub mod keywords;
pub mod listing_cache;
pub mod normalizer;
pub mod walker;

pub use file_matcher::{find_file, find_file_cached, match_candidates, MatchResult};
pub use keywords::extract_keywords;
pub use listing_cache::ListingCache;
pub use normalizer::normalize;
pub use walker::{scan_candidate_files, CandidateFile};
