use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    Open,
    Opened(Option<PathBuf>),
    Save,
    ImageTarget(Option<PathBuf>),
    HistogramTarget(Option<PathBuf>),
    BlurChanged(u32),
    TophatChanged(u32),
    ThresholdChanged(u32),
}
