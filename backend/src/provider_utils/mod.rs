//! Access to the openFDA device event endpoint and to saved response files.

pub mod openfda_utils;
pub mod event_file;
