// flow-domain library entry point
pub mod category;
pub mod entity;
pub mod error;
pub mod flowset;
pub mod node;
pub mod registry;
pub mod tree;

pub use category::Category;
pub use entity::Entity;
pub use error::DomainError;
pub use flowset::{FlowSet, GraphModelProvider};
pub use node::Node;
pub use registry::NameRegistry;
pub use tree::{Folder, TreeEntry};
