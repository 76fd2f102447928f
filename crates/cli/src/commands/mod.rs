pub(crate) mod migrate;
pub(crate) mod page;
pub(crate) mod search;
pub(crate) mod serve;
