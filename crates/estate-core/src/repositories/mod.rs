//! Repository traits (ports)

pub mod value;
pub mod entity;
pub mod filter;
pub mod repository;
pub mod memory;
pub mod blocking;
pub mod registry;

pub use value::{Column, FieldType, Value, ValueKind};
pub use entity::Entity;
pub use filter::{not_searchable, CompareOp, Filter};
pub use repository::{Repository, SharedRepository};
pub use memory::MemoryRepository;
pub use blocking::BlockingRepository;
pub use registry::RepositorySet;
