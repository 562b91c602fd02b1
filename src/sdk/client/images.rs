//! Image synthesis and download

use super::client::{DashScopeClient, ensure_success};
use crate::sdk::{errors::*, types::*};
use std::time::Duration;
use tracing::{debug, info, warn};

const SYNTHESIS_PATH: &str = "services/aigc/text2image/image-synthesis";
const TASKS_PATH: &str = "tasks";

impl DashScopeClient {
    /// Generate one image and return its URL.
    ///
    /// `Ok(None)` means the task succeeded without producing an image, which is
    /// what content-policy rejections look like. Transport errors, error
    /// statuses, failed tasks and polling timeouts are errors.
    pub async fn synthesize(&self, prompt: &str, model: &str, size: &str) -> Result<Option<String>> {
        if prompt.trim().is_empty() {
            return Err(SdkError::InvalidRequest("image prompt is empty".to_string()));
        }

        let submitted = self.submit_image_task(prompt, model, size).await?;
        let output = if submitted.task_status.is_finished() {
            submitted
        } else {
            self.wait_for_task(&submitted.task_id).await?
        };

        match output.task_status {
            TaskStatus::Succeeded => {
                let url = output.results.iter().find_map(|r| r.url.clone());
                match url {
                    Some(url) => {
                        info!("Image task {} produced {}", output.task_id, url);
                        Ok(Some(url))
                    }
                    None => {
                        let reason = output
                            .results
                            .iter()
                            .find_map(|r| match (&r.code, &r.message) {
                                (Some(code), Some(message)) => Some(format!("{}: {}", code, message)),
                                (Some(code), None) => Some(code.clone()),
                                (None, Some(message)) => Some(message.clone()),
                                (None, None) => None,
                            })
                            .unwrap_or_else(|| "no result returned".to_string());
                        warn!("Image task {} succeeded without an image ({})", output.task_id, reason);
                        Ok(None)
                    }
                }
            }
            _ => Err(SdkError::TaskFailed {
                task_id: output.task_id,
                code: output.code.unwrap_or_else(|| format!("{:?}", output.task_status)),
                message: output.message.unwrap_or_default(),
            }),
        }
    }

    async fn submit_image_task(&self, prompt: &str, model: &str, size: &str) -> Result<TaskOutput> {
        let url = self.endpoint(SYNTHESIS_PATH);
        debug!("Submitting image task: model={} size={}", model, size);

        let body = ImageSynthesisBody {
            model,
            input: ImageSynthesisInput { prompt },
            parameters: ImageSynthesisParameters { size, n: 1 },
        };

        let builder = self
            .authorized(self.http_client.post(&url))
            .header("X-DashScope-Async", "enable")
            .json(&body);
        let response: TaskResponse = self.send_json(builder).await?;
        Ok(response.output)
    }

    async fn wait_for_task(&self, task_id: &str) -> Result<TaskOutput> {
        let url = self.endpoint(&format!("{}/{}", TASKS_PATH, task_id));
        let interval = Duration::from_millis(self.config.image_poll_interval_ms);

        for attempt in 1..=self.config.image_max_polls {
            let builder = self.authorized(self.http_client.get(&url));
            let response: TaskResponse = self.send_json(builder).await?;
            let output = response.output;

            if output.task_status.is_finished() {
                debug!(
                    "Image task {} finished as {:?} after {} polls",
                    task_id, output.task_status, attempt
                );
                return Ok(output);
            }

            tokio::time::sleep(interval).await;
        }

        Err(SdkError::Timeout(format!(
            "image task {} still running after {} polls",
            task_id, self.config.image_max_polls
        )))
    }

    /// Download an image. The URL is pre-signed, so no credential is sent.
    pub async fn fetch_and_encode(&self, url: &str) -> Result<EncodedImage> {
        debug!("Downloading image {}", url);

        let response = self.http_client.get(url).send().await?;
        let response = ensure_success(response).await?;

        let format = EncodedImage::format_from_content_type(
            response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
        );
        let bytes = response.bytes().await?;

        Ok(EncodedImage {
            format: format.to_string(),
            bytes: bytes.to_vec(),
        })
    }
}
