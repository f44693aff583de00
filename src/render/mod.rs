pub(crate) mod cubemap;
pub(crate) mod dispatch;
pub(crate) mod face;
pub(crate) mod view;
