//! Shared test helpers.

#![allow(dead_code)]

pub mod annotation_assertions;
pub mod source_fixtures;
