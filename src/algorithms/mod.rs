pub(crate) mod bitonic;
pub(crate) mod clock;
pub(crate) mod cycle;
pub(crate) mod distribution;
pub(crate) mod exchange;
pub(crate) mod heap;
pub(crate) mod insertion;
pub(crate) mod merge;
pub(crate) mod partition;
pub(crate) mod selection;
