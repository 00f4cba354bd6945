pub(crate) mod hijack;
pub(crate) mod smoother;
pub(crate) mod tracker;
