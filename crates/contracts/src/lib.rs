//! DTOs shared between the admin frontend and the commerce backend API.

pub mod domain;
pub mod shared;
pub mod system;
