//! Pure helper functions shared by core and infra

pub mod normalize;
