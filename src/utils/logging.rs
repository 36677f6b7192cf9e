// setup_tracing installs the global fmt subscriber used by both drivers.
// Logs go to stderr so they never interleave with the example output.
pub fn setup_tracing(json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time();
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
