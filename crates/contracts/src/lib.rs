//! Wire contracts shared between the frontend and the inventory API.

pub mod domain;
