pub(crate) mod gnomonic;
pub(crate) mod orientation;
pub(crate) mod params;
