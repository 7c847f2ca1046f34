pub(crate) mod dash;
