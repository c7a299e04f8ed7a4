// Copyright (C) 2020-2026 Andy Kurnia.

// stdout is reserved for answers, so logs go to stderr.
// RUST_LOG overrides the default level, e.g. RUST_LOG=wordcheat=debug.
pub fn init() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
