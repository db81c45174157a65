//! LLM handle abstraction and provider wire formats.

pub mod base_llm;
pub mod providers;

pub use base_llm::{BaseLLM, BoxError, LLMError, LLMMessage};
pub use providers::Provider;
