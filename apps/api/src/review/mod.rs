// Resume review operations: bullet augmentation, grading, and job comparison.
// Each handler runs validate → extract → prompt → LLM → JSON decode.

pub mod handlers;
pub mod models;
pub mod prompts;
