#![cfg(unix)]

use std::process::Command;
use std::time::Duration;
use textsummary::shutdown::ShutdownSignals;

#[tokio::test]
async fn hangup_is_reported_instead_of_killing_the_process() {
    let mut signals = ShutdownSignals::install().unwrap();

    let status = Command::new("kill")
        .args(["-HUP", &std::process::id().to_string()])
        .status()
        .expect("kill is available");
    assert!(status.success());

    tokio::time::timeout(Duration::from_secs(5), signals.recv())
        .await
        .expect("signal delivered")
        .unwrap();
}
