use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc};
use std::thread;

use extractor_logging::extractor_warn;

use crate::client::{ClientSettings, ExtractClient, ReqwestExtractClient};
use crate::pdf::{render_document, DocumentSpec, ExportError, EXPORT_FILENAME};
use crate::persist::write_atomic;
use crate::{EngineEvent, Generation};

/// Configuration for the engine thread.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Base URL of the extraction API; requests go to `{base_url}/extract`.
    pub base_url: String,
    /// Directory exported documents are written into.
    pub output_dir: PathBuf,
    pub settings: ClientSettings,
}

enum EngineCommand {
    Extract { generation: Generation, url: String },
    Export { spec: DocumentSpec },
}

/// Handle to the background engine: commands in, events out.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let client = Arc::new(ReqwestExtractClient::new(
            config.base_url,
            config.settings,
        ));
        let output_dir = config.output_dir;

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                let output_dir = output_dir.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, &output_dir, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn extract(&self, generation: Generation, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Extract {
            generation,
            url: url.into(),
        });
    }

    pub fn export(&self, spec: DocumentSpec) {
        let _ = self.cmd_tx.send(EngineCommand::Export { spec });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    client: &dyn ExtractClient,
    command: EngineCommand,
    output_dir: &Path,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Extract { generation, url } => {
            let result = client.extract(&url).await;
            if let Err(err) = &result {
                extractor_warn!("Extraction {} failed: {}", generation, err.kind);
            }
            let _ = event_tx.send(EngineEvent::ExtractionCompleted { generation, result });
        }
        EngineCommand::Export { spec } => {
            let result = export_document(&spec, output_dir);
            let _ = event_tx.send(EngineEvent::ExportCompleted { result });
        }
    }
}

fn export_document(spec: &DocumentSpec, output_dir: &Path) -> Result<PathBuf, ExportError> {
    let bytes = render_document(spec)?;
    let path = write_atomic(output_dir, EXPORT_FILENAME, &bytes)?;
    Ok(path)
}
