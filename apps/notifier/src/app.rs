//! Application orchestrator — wires the sink, adapter, tray, and session.

use std::time::Duration;

use chantray_notify::EventAdapter;
use chantray_session::Session;
use chantray_tray::{TrayConfig, TrayEvent, TrayHandle};
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::notifier::DesktopNotifier;

/// Application name shown in the tray and on notifications.
const APP_NAME: &str = "chantray";

/// Interval between tray event polls.
const TRAY_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Runs the notifier until disconnect is requested or the session ends.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let cancel = CancellationToken::new();

    // -- Notification sink + event adapter --
    let sink = DesktopNotifier::new(APP_NAME);
    let adapter = EventAdapter::new(Box::new(sink), config.retention_ms);
    adapter.set_show_joins_parts(config.show_joins_parts);
    adapter.set_show_all_messages(config.show_all_messages);
    let toggles = adapter.toggles();

    // -- Tray --
    let tray_config = TrayConfig {
        app_name: APP_NAME.into(),
        ..TrayConfig::default()
    };
    let (mut tray, _event_tx, _update_rx) = TrayHandle::new(tray_config);
    tray.set_show_joins_parts(config.show_joins_parts);
    tray.set_show_all_messages(config.show_all_messages);

    // -- IRC session --
    let session = Session::connect(config.session()).await?;
    tray.set_connected(true);
    tracing::info!("notifier ready");

    let mut session_task = tokio::spawn(session.run(adapter, cancel.clone()));

    // -- Main loop: tray events, ctrl-c, session end --
    loop {
        tokio::select! {
            result = &mut session_task => {
                match result {
                    Ok(Ok(())) => tracing::info!("session ended"),
                    Ok(Err(e)) => tracing::error!("session error: {e}"),
                    Err(e) => tracing::error!("session task failed: {e}"),
                }
                break;
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("SIGINT received, shutting down");
                cancel.cancel();
            }
            _ = tokio::time::sleep(TRAY_POLL_INTERVAL) => {
                while let Some(event) = tray.try_recv_event() {
                    match event {
                        TrayEvent::ShowAllMessages(on) => {
                            toggles.set_show_all_messages(on);
                            tray.set_show_all_messages(on);
                        }
                        TrayEvent::ShowJoinsParts(on) => {
                            toggles.set_show_joins_parts(on);
                            tray.set_show_joins_parts(on);
                        }
                        TrayEvent::DisconnectRequested => {
                            tracing::info!("disconnect requested via tray");
                            cancel.cancel();
                        }
                    }
                }
            }
        }
    }

    // -- Graceful shutdown --
    tray.set_connected(false);
    tray.shutdown();

    Ok(())
}
