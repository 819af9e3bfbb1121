use crate::models::Testimonial;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

pub fn resolve_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

pub fn resolve_api_base_url() -> String {
    env::var("API_BASE_URL")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

pub fn resolve_testimonials_path() -> PathBuf {
    if let Ok(path) = env::var("TESTIMONIALS_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/testimonials.json")
}

pub async fn load_testimonials(path: &Path) -> Vec<Testimonial> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(testimonials) => testimonials,
            Err(err) => {
                error!("failed to parse testimonials file: {err}");
                Vec::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            error!("failed to read testimonials file: {err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("portfolio_site_{}_{name}", std::process::id()));
        path
    }

    #[tokio::test]
    async fn missing_file_means_no_testimonials() {
        let path = temp_path("missing.json");
        assert!(load_testimonials(&path).await.is_empty());
    }

    #[tokio::test]
    async fn malformed_file_is_ignored() {
        let path = temp_path("malformed.json");
        fs::write(&path, b"{ not json").await.unwrap();
        assert!(load_testimonials(&path).await.is_empty());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn reads_testimonial_list() {
        let path = temp_path("ok.json");
        fs::write(
            &path,
            br#"[{"avatar":"/a.png","name":"Jessica","text":"Fast and careful."}]"#,
        )
        .await
        .unwrap();
        let testimonials = load_testimonials(&path).await;
        assert_eq!(testimonials.len(), 1);
        assert_eq!(testimonials[0].name, "Jessica");
        let _ = fs::remove_file(&path).await;
    }
}
