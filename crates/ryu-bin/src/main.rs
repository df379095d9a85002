//! Ryu entrypoint.
use anyhow::{Context, Result};
use clap::Parser;
use core_actions::ModalInputController;
use core_config::Config;
use core_input::KeyDecoder;
use core_render::{RenderOptions, Renderer, text_rows};
use core_terminal::{CrosstermBackend, TerminalBackend, enter_guard};
use core_text::TextBuffer;
use std::io::{Write, stdin, stdout};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "ryu", version, about = "Ryu modal text editor")]
struct Args {
    /// File to open. Without one the editor starts on an unsaved empty buffer.
    pub path: Option<PathBuf>,
    /// Configuration file path (overrides discovery of `ryu.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

fn configure_logging(config: &Config) -> Option<WorkerGuard> {
    let log_path = Path::new(&config.file.log.file);
    if log_path.exists() {
        let _ = std::fs::remove_file(log_path);
    }
    let dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let name = log_path.file_name()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.file.log.filter.as_deref().unwrap_or("info"))
    });
    let file_appender = tracing_appender::rolling::never(dir, name);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(nb_writer)
        .with_ansi(false)
        .try_init()
        .ok()
        .map(|_| guard)
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn load_buffer(path: Option<&Path>) -> Result<TextBuffer> {
    match path {
        Some(path) => TextBuffer::open(path)
            .with_context(|| format!("cannot open {}", path.display())),
        None => Ok(TextBuffer::new()),
    }
}

fn render_options(config: &Config) -> RenderOptions {
    let display = &config.file.display;
    RenderOptions {
        title: display.title.clone(),
        no_name: display.no_name.clone(),
        line_numbers: display.line_numbers,
        scroll_margin: config.effective_scroll_margin,
    }
}

fn run(args: Args, mut config: Config) -> Result<()> {
    // Fail before touching the terminal so the error prints on a sane screen.
    let mut buffer = load_buffer(args.path.as_deref())?;

    let mut backend = CrosstermBackend::new();
    backend.set_title(&config.file.display.title)?;
    let guard = enter_guard(&mut backend)?;

    let size = guard.backend().size()?;
    config.apply_viewport(text_rows(size.1));
    let mut renderer = Renderer::new(render_options(&config));
    let mut controller = ModalInputController::new();
    let stdin = stdin();
    let mut decoder = KeyDecoder::new(stdin.lock());
    let mut message: Option<String> = None;

    info!(
        target: "runtime",
        path = ?buffer.source_path(),
        lines = buffer.line_count(),
        scroll_margin = config.effective_scroll_margin,
        "session_start"
    );

    loop {
        let size = guard.backend().size()?;
        let view = controller.view(&buffer);
        let mut out = stdout().lock();
        renderer.render(&mut out, &view, message.as_deref(), size)?;
        out.flush()?;
        drop(out);

        match controller.step(&mut decoder, &mut buffer) {
            Ok(outcome) => {
                if outcome.redraw {
                    message = None;
                }
                if outcome.quit {
                    break;
                }
            }
            Err(e) => {
                warn!(target: "runtime", error = %e, "command_failed");
                message = Some(e.to_string());
            }
        }
    }

    info!(target: "runtime", dirty = buffer.is_dirty(), "session_end");
    drop(guard);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = core_config::load_from(args.config.clone())?;
    let _log_guard = configure_logging(&config);
    install_panic_hook();
    info!(target: "runtime", "startup");
    config.log_load_outcome();
    run(args, config)
}
