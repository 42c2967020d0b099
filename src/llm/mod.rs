pub mod stateless_llm_interface;
pub mod claude_llm;
pub mod stateless_llm_factory;

#[cfg(test)]
pub mod mock_upstream;

pub use stateless_llm_interface::*;
pub use claude_llm::*;
pub use stateless_llm_factory::*;
