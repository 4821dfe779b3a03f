mod dto;
mod entity;
mod error;
mod tickets_repository;
mod tickets_repository_impl;

#[cfg(test)]
mod tickets_repository_memory;

pub use dto::*;
pub use error::*;
pub use tickets_repository::*;
pub use tickets_repository_impl::*;

#[cfg(test)]
pub use tickets_repository_memory::*;
