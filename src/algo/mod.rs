//! Graph analytics: centrality and community detection
//!
//! Both algorithms are best-effort by contract: centrality failure and
//! community-detection failure degrade to safe defaults at the engine
//! layer instead of propagating.

pub mod centrality;
pub mod common;
pub mod community;

pub use centrality::{power_centrality, CentralityConfig, CentralityError};
pub use common::UndirectedView;
pub use community::{detect_communities, COMMUNITY_SEED};
