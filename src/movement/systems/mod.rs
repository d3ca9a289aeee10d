//! Movement domain: device sampling systems.

pub(crate) mod input;

pub(crate) use input::{read_aim, read_input};
