//! FILENAME: app/dashboard/src/main.rs
// PURPOSE: Command-line entry point.
// FORMAT: stdout carries JSON lines, the log goes to stderr as seq|level|category|message

fn main() {
    std::process::exit(dashboard_lib::run());
}
