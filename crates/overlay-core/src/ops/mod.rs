pub mod collection;

pub use collection::ActiveCollection;
