pub(crate) mod controller;
pub(crate) mod ease;
pub(crate) mod track;
