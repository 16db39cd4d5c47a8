//! Internal utilities shared by the ecpk crates

pub mod constant_time;
