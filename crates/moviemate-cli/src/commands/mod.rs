pub mod add;
pub mod config;
pub mod context;
pub mod delete;
pub mod display;
pub mod edit;
pub mod fields;
pub mod list;
pub mod prompts;
pub mod search;
pub mod show;

pub use context::AppContext;
pub use fields::MovieFields;
