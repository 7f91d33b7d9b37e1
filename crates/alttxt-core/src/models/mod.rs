//! Plot models: the read-only input of every generation run.

pub mod data_model;
pub mod grammar_model;
pub mod subset;

pub use data_model::DataModel;
pub use grammar_model::{
    BookmarkedIntersection, FilterModel, GrammarModel, MetaData, QueryMembership, SetQuery,
};
pub use subset::{Subset, SubsetRecord};
