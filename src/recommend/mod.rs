pub mod emotion;
pub mod engine;
pub mod enrich;
pub mod filter;
pub mod search;
pub mod types;
pub mod window;

pub use emotion::{lookup, map_emotion, EmotionLabel, EmotionMapping, InvalidEmotion};
pub use engine::{relaxation_chain, Engine, RelaxationStep, ResolveError};
pub use enrich::{enrich, enrich_all, movie_summary, Enrichment};
pub use filter::{normalize, FilterSpec};
pub use search::search;
pub use types::*;
pub use window::WindowPlan;
