use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use uuid::Uuid;

use crate::capability::MediaAcquirer;

/// Downloads a video with yt-dlp and extracts its audio track as a 16 kHz
/// mono WAV, ready for Whisper. Each call writes to a uniquely named file so
/// concurrent requests never collide.
pub struct YtDlpAcquirer {
    work_dir: PathBuf,
}

impl YtDlpAcquirer {
    pub fn new(work_dir: PathBuf) -> Self {
        Self { work_dir }
    }
}

#[async_trait]
impl MediaAcquirer for YtDlpAcquirer {
    async fn fetch(&self, url: &str) -> anyhow::Result<PathBuf> {
        let output_template = self
            .work_dir
            .join(format!("audio-{}.%(ext)s", Uuid::new_v4()));

        let output = Command::new("yt-dlp")
            .arg(url)
            .arg("--print")
            .arg("after_move:filepath")
            .arg("--extractor-args")
            .arg("youtube:player_client=android,web")
            .arg("-f")
            .arg("bestaudio/best")
            .arg("--extract-audio")
            .arg("--audio-format")
            .arg("wav")
            .arg("--postprocessor-args")
            .arg("ffmpeg:-ar 16000 -ac 1")
            .arg("-o")
            .arg(&output_template)
            .output()
            .await?;

        if !output.status.success() {
            anyhow::bail!(
                "{}",
                String::from_utf8_lossy(&output.stderr).trim().to_string()
            );
        }

        let stdout_str = String::from_utf8_lossy(output.stdout.as_slice());
        Ok(PathBuf::from(stdout_str.trim()))
    }
}
