pub mod gemini;
pub mod opener;
pub mod traits;

pub use gemini::GeminiClient;
pub use opener::{LoggingOpener, SystemOpener};
pub use traits::{CategoryRecommender, LinkOpener, Recommendation, Transcriber};
