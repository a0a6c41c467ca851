use extractor_core::{Effect, Msg};
use extractor_engine::{
    ClientSettings, DocumentSpec, EngineConfig, EngineEvent, EngineHandle, EXPORT_FILENAME,
};
use extractor_logging::{extractor_info, extractor_warn};

use super::config::AppConfig;

/// Executes core effects against the engine and feeds engine events back
/// into the message loop.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: &AppConfig) -> Self {
        let engine = EngineHandle::new(EngineConfig {
            base_url: config.base_url.clone(),
            output_dir: config.output_dir.clone(),
            settings: ClientSettings::default(),
        });
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartExtraction { generation, url } => {
                    extractor_info!("StartExtraction generation={} url={}", generation, url);
                    self.engine.extract(generation, url);
                }
                Effect::ExportPdf {
                    title,
                    summary,
                    key_points,
                } => {
                    extractor_info!("ExportPdf key_points={}", key_points.len());
                    self.engine.export(DocumentSpec {
                        title,
                        summary,
                        key_points,
                    });
                }
            }
        }
    }

    /// Drains pending engine events into core messages.
    pub fn poll(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            msgs.push(match event {
                EngineEvent::ExtractionCompleted { generation, result } => match result {
                    Ok(content) => Msg::ExtractionSucceeded {
                        generation,
                        summary: content.summary,
                        key_points: content.key_points,
                    },
                    Err(err) => Msg::ExtractionFailed {
                        generation,
                        message: err.message,
                    },
                },
                EngineEvent::ExportCompleted { result } => match result {
                    Ok(path) => {
                        let filename = path
                            .file_name()
                            .and_then(|name| name.to_str())
                            .unwrap_or(EXPORT_FILENAME)
                            .to_owned();
                        Msg::ExportFinished {
                            result: Ok(filename),
                        }
                    }
                    Err(err) => {
                        extractor_warn!("Export failed: {}", err);
                        Msg::ExportFinished {
                            result: Err("Could not write the PDF file.".to_owned()),
                        }
                    }
                },
            });
        }
        msgs
    }
}
