pub(crate) mod spans;
