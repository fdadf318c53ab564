pub mod metacheck;
