use anyhow::{anyhow, Result};
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::Duration;

/// The first wasm build dominates startup.
const READY_TIMEOUT: Duration = Duration::from_secs(300);
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// `dx serve` for the web package, killed on drop.
pub struct DevServer {
    base_url: String,
    child: Child,
}

impl DevServer {
    pub async fn spawn() -> Result<Self> {
        let port = free_port()?;
        let child = Command::new("dx")
            .current_dir(workspace_root())
            .args(["serve", "--package", "web", "--platform", "web"])
            .args(["--addr", "127.0.0.1", "--port", &port.to_string()])
            .env("APP_MODE", "local")
            .env("SITE_SUBMIT_DELAY_MS", "200")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| anyhow!("could not start `dx serve`: {err}"))?;

        let server = Self {
            base_url: format!("http://127.0.0.1:{port}"),
            child,
        };
        tokio::time::timeout(READY_TIMEOUT, server.until_ready())
            .await
            .map_err(|_| anyhow!("dx serve not ready after {READY_TIMEOUT:?}"))?;
        Ok(server)
    }

    pub fn url(&self) -> &str {
        &self.base_url
    }

    async fn until_ready(&self) {
        loop {
            match reqwest::get(&self.base_url).await {
                Ok(response) if response.status().is_success() => return,
                _ => tokio::time::sleep(POLL_INTERVAL).await,
            }
        }
    }
}

impl Drop for DevServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn free_port() -> Result<u16> {
    Ok(TcpListener::bind("127.0.0.1:0")?.local_addr()?.port())
}
