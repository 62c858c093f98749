//! Example driving the loader hooks through a simulated bundle load

use color_eyre::Result;
use console::style;
use preloader::event::ProgressEvent;
use preloader::hooks::LoaderHooksBuilder;
use preloader::sink::BarSink;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "preloader=info".into()),
        )
        .init();

    // Pretend a 4 MiB bundle arrives in 64 KiB chunks
    let total: u64 = 4 * 1024 * 1024;
    let chunk: u64 = 64 * 1024;

    let mut hooks = LoaderHooksBuilder::new()
        .sink(BarSink::new())
        .timer_label("simulated-initializer")
        .build();

    hooks.on_start();

    let mut current = 0;
    while current < total {
        current = (current + chunk).min(total);
        hooks.on_progress(ProgressEvent::new(current, total));
        thread::sleep(Duration::from_millis(20));
    }

    hooks.on_complete();
    hooks.on_success(&"simulated module handle");

    println!("{}", style("Load complete!").green().bold());

    Ok(())
}
