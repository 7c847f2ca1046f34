pub(crate) mod mask;
pub(crate) mod notch_bar;
pub(crate) mod primitives;
pub(crate) mod trace;
