pub(crate) mod host;
pub(crate) mod page;
pub(crate) mod timers;
