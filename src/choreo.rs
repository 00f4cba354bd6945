pub(crate) mod phase;
pub(crate) mod reveal;
pub(crate) mod section;
pub(crate) mod step;
pub(crate) mod style;
