//! Long-running tasks spawned at startup. Each takes a
//! [`CancellationToken`](tokio_util::sync::CancellationToken) and exits
//! promptly when it fires.

pub mod auto_completion;
