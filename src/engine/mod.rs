pub(crate) mod frame;
pub(crate) mod registry;
pub(crate) mod runner;
