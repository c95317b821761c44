/// Installs the termination handlers. On receipt of a termination-class
/// signal the process logs a timestamped line and exits nonzero; no
/// database or socket cleanup is attempted before exit.
pub fn spawn_signal_listener() {
    tokio::spawn(async {
        let sig = wait_for_termination().await;
        log::info!(
            "{}: received {} - terminating",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            sig
        );
        std::process::exit(1);
    });
}

#[cfg(unix)]
async fn wait_for_termination() -> &'static str {
    use tokio::signal::ctrl_c;
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");
    let mut hangup = signal(SignalKind::hangup()).expect("Failed to install SIGHUP handler");
    let mut quit = signal(SignalKind::quit()).expect("Failed to install SIGQUIT handler");

    tokio::select! {
        _ = ctrl_c() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
        _ = hangup.recv() => "SIGHUP",
        _ = quit.recv() => "SIGQUIT",
    }
}

#[cfg(not(unix))]
async fn wait_for_termination() -> &'static str {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    "Ctrl+C"
}
