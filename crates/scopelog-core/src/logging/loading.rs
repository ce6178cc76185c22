//! Progress indication for one in-flight asynchronous operation
//!
//! Three strategies, selected once per call from the environment probes:
//! timed output for browser-like runtimes, a plain one-line status when
//! output is piped, and a whale animation on an interactive terminal.

use std::future::Future;
use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};

use crate::clock::Clock;
use crate::console::Console;

/// Whale glyph at four fixed horizontal offsets, cycled in order
const FRAMES: [&str; 4] = ["      🐳", "    🐳  ", "  🐳    ", "🐳      "];

/// Animation ticker period
const FRAME_PERIOD: Duration = Duration::from_millis(250);

/// Timed progress for browser-like runtimes
///
/// Logs the label with elapsed milliseconds at settlement; failures go to
/// the error channel and are forwarded unaltered.
pub(crate) async fn run_timed<T, E, F>(
    console: &dyn Console,
    clock: &dyn Clock,
    prefix: &str,
    label: &str,
    operation: F,
) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    let start = clock.now_millis();
    let result = operation.await;
    let elapsed = (clock.now_millis() - start).round() as i64;
    match &result {
        Ok(_) => console.out_line(&format!("🟢 {prefix}: {label} ({elapsed}ms)")),
        Err(_) => console.err_line(&format!("🔴 {prefix}: {label} ({elapsed}ms)")),
    }
    result
}

/// Plain progress for non-interactive terminal output
///
/// Writes the label with no trailing newline, then appends the verdict to
/// the same line at settlement. No animation.
pub(crate) async fn run_plain<T, E, F>(
    console: &dyn Console,
    label: &str,
    operation: F,
) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    console.write(label);
    let result = operation.await;
    match &result {
        Ok(_) => console.write("   🟢 Success\n"),
        Err(_) => console.write("   🔴 Failure\n"),
    }
    result
}

/// Animated progress for an interactive terminal
///
/// A 250ms ticker overwrites the line with the next whale frame; the ticker
/// and the operation are raced in a single `select!` loop, so there is one
/// writer and the ticker is dropped at settlement before the verdict line.
pub(crate) async fn run_animated<T, E, F>(
    console: &dyn Console,
    prefix: &str,
    label: &str,
    operation: F,
) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    // First frame appears one full period after the call, not immediately
    let mut ticker = time::interval_at(time::Instant::now() + FRAME_PERIOD, FRAME_PERIOD);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tokio::pin!(operation);
    let mut frame = 0usize;
    loop {
        tokio::select! {
            result = &mut operation => {
                match &result {
                    Ok(_) => console.write(&format!("\r🟢 {prefix}: {label}\n")),
                    Err(_) => console.write(&format!("\r🔴 {prefix}: {label}\n")),
                }
                break result;
            }
            _ = ticker.tick() => {
                console.write(&format!("\r🔄{prefix}: {}", FRAMES[frame]));
                frame = (frame + 1) % FRAMES.len();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::console::MemoryConsole;

    fn io_failure(message: &str) -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::Other, message.to_string())
    }

    #[tokio::test]
    async fn test_timed_success_logs_elapsed() {
        let console = MemoryConsole::new();
        let clock = ManualClock::with_readings([100.0, 200.0]);

        let result = run_timed(&console, &clock, "[TEST]", "fetch data", async {
            Ok::<_, std::io::Error>(7)
        })
        .await;

        assert_eq!(result.unwrap(), 7);
        assert_eq!(console.out_lines(), vec!["🟢 [TEST]: fetch data (100ms)"]);
        assert!(console.err_lines().is_empty());
    }

    #[tokio::test]
    async fn test_timed_failure_logs_to_error_channel_and_forwards() {
        let console = MemoryConsole::new();
        let clock = ManualClock::with_readings([100.0, 200.0]);

        let result: Result<(), _> =
            run_timed(&console, &clock, "[TEST]", "fetch data", async {
                Err(io_failure("fail"))
            })
            .await;

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "fail");
        assert_eq!(console.err_lines(), vec!["🔴 [TEST]: fetch data (100ms)"]);
        assert!(console.out_lines().is_empty());
    }

    #[tokio::test]
    async fn test_timed_rounds_fractional_elapsed() {
        let console = MemoryConsole::new();
        let clock = ManualClock::with_readings([0.0, 99.6]);

        let _ = run_timed(&console, &clock, "[TEST]", "work", async {
            Ok::<_, std::io::Error>(())
        })
        .await;

        assert_eq!(console.out_lines(), vec!["🟢 [TEST]: work (100ms)"]);
    }

    #[tokio::test]
    async fn test_plain_success_appends_verdict() {
        let console = MemoryConsole::new();

        let result = run_plain(&console, "doing work", async { Ok::<_, std::io::Error>(()) }).await;

        assert!(result.is_ok());
        assert_eq!(console.raw_writes(), vec!["doing work", "   🟢 Success\n"]);
        assert!(console.out_lines().is_empty());
    }

    #[tokio::test]
    async fn test_plain_failure_appends_verdict_and_forwards() {
        let console = MemoryConsole::new();

        let result: Result<(), _> =
            run_plain(&console, "doing work", async { Err(io_failure("fail")) }).await;

        assert_eq!(result.unwrap_err().to_string(), "fail");
        assert_eq!(console.raw_writes(), vec!["doing work", "   🔴 Failure\n"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_animated_cycles_frames_then_settles() {
        let console = MemoryConsole::new();

        let result = run_animated(&console, "[TEST]", "doing work", async {
            time::sleep(Duration::from_millis(1100)).await;
            Ok::<_, std::io::Error>("ok")
        })
        .await;

        assert_eq!(result.unwrap(), "ok");
        let writes = console.raw_writes();
        assert_eq!(
            writes,
            vec![
                "\r🔄[TEST]:       🐳",
                "\r🔄[TEST]:     🐳  ",
                "\r🔄[TEST]:   🐳    ",
                "\r🔄[TEST]: 🐳      ",
                "\r🟢 [TEST]: doing work\n",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_animated_wraps_after_fourth_frame() {
        let console = MemoryConsole::new();

        let _ = run_animated(&console, "[TEST]", "doing work", async {
            time::sleep(Duration::from_millis(1350)).await;
            Ok::<_, std::io::Error>(())
        })
        .await;

        let writes = console.raw_writes();
        // Fifth tick wraps back to the first frame
        assert_eq!(writes[4], "\r🔄[TEST]:       🐳");
        assert_eq!(writes.last().unwrap(), "\r🟢 [TEST]: doing work\n");
    }

    #[tokio::test(start_paused = true)]
    async fn test_animated_failure_overwrites_line_and_forwards() {
        let console = MemoryConsole::new();

        let result: Result<(), _> = run_animated(&console, "[TEST]", "doing work", async {
            time::sleep(Duration::from_millis(300)).await;
            Err(io_failure("fail"))
        })
        .await;

        assert_eq!(result.unwrap_err().to_string(), "fail");
        let writes = console.raw_writes();
        assert_eq!(writes.last().unwrap(), "\r🔴 [TEST]: doing work\n");
        // No frame is written after settlement
        assert_eq!(
            writes
                .iter()
                .filter(|write| write.starts_with("\r🔄"))
                .count(),
            1
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_animated_immediate_settlement_skips_frames() {
        let console = MemoryConsole::new();

        let _ = run_animated(&console, "[TEST]", "instant", async {
            Ok::<_, std::io::Error>(())
        })
        .await;

        assert_eq!(console.raw_writes(), vec!["\r🟢 [TEST]: instant\n"]);
    }
}
