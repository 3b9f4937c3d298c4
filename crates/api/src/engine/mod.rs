//! Multi-step jobs that sit between the HTTP surface and the repositories.

pub mod auto_completion;
