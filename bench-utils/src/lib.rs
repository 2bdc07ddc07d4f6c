//! Lightweight, feature-gated timing spans for instrumenting the hot loops
//! of the `algebra` and `ibe` crates (prime sampling, Miller's algorithm,
//! Weil pairing retries) without pulling in a full tracing stack.
//!
//! With the `print-trace` feature disabled, [`start_timer`] and
//! [`end_timer`] compile away to nothing.

#[cfg(feature = "print-trace")]
use std::time::Instant;

#[cfg(feature = "print-trace")]
pub struct TimerInfo {
    pub msg: String,
    pub time: Instant,
}

#[macro_export]
macro_rules! start_timer {
    ($msg:expr) => {{
        #[cfg(feature = "print-trace")]
        {
            use $crate::TimerInfo;
            use colored::Colorize;
            let msg = $msg();
            println!("{}", format!("Start: {}", msg).green());
            TimerInfo {
                msg: msg.to_string(),
                time: std::time::Instant::now(),
            }
        }

        #[cfg(not(feature = "print-trace"))]
        {
            ()
        }
    }};
}

#[macro_export]
macro_rules! end_timer {
    ($time:expr) => {{
        #[cfg(feature = "print-trace")]
        {
            use colored::Colorize;
            let time = $time.time.elapsed();
            println!(
                "{}",
                format!("End: {} ... {:?}", $time.msg, time).blue()
            );
        }

        #[cfg(not(feature = "print-trace"))]
        {
            let _ = &$time;
        }
    }};
}
