pub(crate) mod cancel;
pub(crate) mod error;
pub(crate) mod math;
