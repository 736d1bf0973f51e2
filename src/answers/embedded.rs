//! Embedded answer lists (generated by build.rs)

include!(concat!(env!("OUT_DIR"), "/answers_5.rs"));
include!(concat!(env!("OUT_DIR"), "/answers_6.rs"));
include!(concat!(env!("OUT_DIR"), "/answers_7.rs"));
