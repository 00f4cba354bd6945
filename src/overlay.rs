pub(crate) mod detail;
pub(crate) mod dial;
pub(crate) mod lifecycle;
