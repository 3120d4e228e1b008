//! Validates message JSON and sends it to a webhook.
//!
//! Usage:
//!
//! ```text
//! hookcraft --message payload.json --file build.log --webhook-url <url>
//! hookcraft --check < payload.json
//! ```
//!
//! The webhook URL may also come from `HOOKCRAFT_WEBHOOK_URL`. Log output is
//! controlled with `RUST_LOG` and defaults to `info`.

use std::{sync::Arc, time::Duration};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use clap::Parser;
use eyre::{WrapErr, eyre};
use hookcraft::{
    editor::{EditCoordinator, HeadlessHost},
    message::{
        adapters::{
            http::{HttpTransportConfig, ReqwestTransport},
            memory::RecordingTransport,
        },
        domain::{Attachment, Message},
        ports::{DispatchReport, ResponseBody, WebhookTransport},
        services::Dispatcher,
    },
};
use mockable::DefaultClock;
use tokio::io::AsyncReadExt;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "hookcraft", version, about = "Validate and send webhook messages")]
struct Cli {
    /// Message JSON file; standard input when omitted.
    #[arg(long, value_name = "PATH")]
    message: Option<Utf8PathBuf>,

    /// File to attach; repeat for several.
    #[arg(long = "file", value_name = "PATH")]
    files: Vec<Utf8PathBuf>,

    /// Webhook URL to send to.
    #[arg(long, env = "HOOKCRAFT_WEBHOOK_URL", hide_env_values = true)]
    webhook_url: Option<String>,

    /// Validate the message and exit without sending.
    #[arg(long)]
    check: bool,

    /// Send to an in-memory transport instead of the network.
    #[arg(long, conflicts_with = "check")]
    dry_run: bool,

    /// HTTP request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let text = read_message(cli.message.as_deref()).await?;

    let mut editor = EditCoordinator::new(Message::default(), HeadlessHost);
    editor.edit_json(text);

    if cli.check {
        let errors = editor.state().errors();
        for error in errors {
            warn!(%error, "validation error");
        }
        if !errors.is_empty() {
            return Err(eyre!("message has {} validation error(s)", errors.len()));
        }
        info!("message is valid");
        return Ok(());
    }

    if !cli.files.is_empty() {
        let files = cli
            .files
            .iter()
            .map(|path| read_attachment(path.as_path()))
            .collect::<eyre::Result<Vec<_>>>()?;
        editor.select_files(Some(files));
    }
    editor.set_endpoint(cli.webhook_url.unwrap_or_default());

    let report = if cli.dry_run {
        let transport = Arc::new(RecordingTransport::new());
        let report = send(&mut editor, Arc::clone(&transport)).await?;
        info!(recorded = transport.requests().len(), "dry run; request kept in memory");
        report
    } else {
        let mut config = HttpTransportConfig::default();
        if let Some(secs) = cli.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        let transport = ReqwestTransport::with_config(&config).wrap_err("build HTTP client")?;
        send(&mut editor, Arc::new(transport)).await?
    };

    log_response(&report);
    if report.response.is_success() {
        Ok(())
    } else {
        Err(eyre!("webhook responded with status {}", report.response.status))
    }
}

async fn send<T: WebhookTransport>(
    editor: &mut EditCoordinator<HeadlessHost>,
    transport: Arc<T>,
) -> eyre::Result<DispatchReport> {
    let dispatcher = Dispatcher::new(transport, Arc::new(DefaultClock));
    editor
        .dispatch(&dispatcher)
        .await
        .wrap_err("message was not sent")
}

async fn read_message(path: Option<&Utf8Path>) -> eyre::Result<String> {
    let Some(file) = path else {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .wrap_err("read message from stdin")?;
        return Ok(text);
    };
    let (dir, name) = open_parent(file)?;
    dir.read_to_string(name)
        .wrap_err_with(|| format!("read message file '{file}'"))
}

fn read_attachment(path: &Utf8Path) -> eyre::Result<Attachment> {
    let (dir, name) = open_parent(path)?;
    Attachment::read_from(&dir, Utf8Path::new(name))
        .wrap_err_with(|| format!("attach '{path}'"))
}

fn open_parent(path: &Utf8Path) -> eyre::Result<(Dir, &str)> {
    let name = path
        .file_name()
        .ok_or_else(|| eyre!("path '{path}' has no file name"))?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .wrap_err_with(|| format!("open directory '{parent}'"))?;
    Ok((dir, name))
}

fn log_response(report: &DispatchReport) {
    let status = report.response.status;
    match &report.response.body {
        ResponseBody::Json(body) => info!(status, %body, "webhook response"),
        ResponseBody::Text(body) => info!(status, %body, "webhook response"),
        ResponseBody::Empty => info!(status, "webhook response"),
    }
}
