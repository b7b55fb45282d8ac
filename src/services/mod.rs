// FactCheck AI Core Services
// Analysis engine plus the thin I/O collaborators it feeds on.

pub mod analysis;
pub mod extraction;
pub mod news;
pub mod ocr;

pub use analysis::{analyze, AnalysisContext, Classification};
pub use extraction::{ExtractError, PageFetcher};
pub use news::NewsClient;
pub use ocr::OcrClient;
