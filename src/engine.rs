pub(crate) mod config;
pub(crate) mod dispatch;
pub(crate) mod path_spec;
pub(crate) mod policy;
